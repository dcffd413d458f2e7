use crate::models::{ActivityRecord, LoadType};

const RUN_TYPES: [&str; 3] = ["Run", "TrailRun", "VirtualRun"];
const RIDE_TYPES: [&str; 3] = ["Ride", "VirtualRide", "EBikeRide"];
const HIKE_TYPES: [&str; 1] = ["Hike"];
const WALK_TYPES: [&str; 1] = ["Walk"];

/// Sport labels are matched exactly as the activity store reports them.
pub fn load_type(activity_type: &str) -> LoadType {
    if RUN_TYPES.contains(&activity_type) {
        LoadType::Run
    } else if RIDE_TYPES.contains(&activity_type) {
        LoadType::Ride
    } else if HIKE_TYPES.contains(&activity_type) {
        LoadType::Hike
    } else if WALK_TYPES.contains(&activity_type) {
        LoadType::Walk
    } else {
        LoadType::Other
    }
}

pub fn type_weight(load_type: LoadType) -> f64 {
    match load_type {
        LoadType::Run => 1.0,
        LoadType::Ride => 0.6,
        LoadType::Hike => 0.85,
        LoadType::Walk => 0.5,
        LoadType::Other => 0.45,
    }
}

/// Faster runs count for more; hikes get a flat bump once pace is known.
pub fn intensity(load_type: LoadType, pace_min_per_km: Option<f64>) -> f64 {
    match (load_type, pace_min_per_km) {
        (LoadType::Run, Some(pace)) if pace < 4.5 => 1.25,
        (LoadType::Run, Some(pace)) if pace < 5.5 => 1.15,
        (LoadType::Run, Some(pace)) if pace > 7.5 => 0.9,
        (LoadType::Hike, Some(_)) => 1.05,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityLoad {
    pub load: f64,
    pub load_type: LoadType,
    pub pace_min_per_km: Option<f64>,
}

pub fn activity_load(activity: &ActivityRecord) -> ActivityLoad {
    let load_type = load_type(&activity.activity_type);
    let minutes = activity.moving_s / 60.0;
    if !minutes.is_finite() || minutes <= 0.0 {
        return ActivityLoad {
            load: 0.0,
            load_type,
            pace_min_per_km: None,
        };
    }

    let distance_km = activity.distance_m / 1000.0;
    let pace_min_per_km = if distance_km > 0.0 {
        Some(minutes / distance_km)
    } else {
        None
    };

    ActivityLoad {
        load: minutes * type_weight(load_type) * intensity(load_type, pace_min_per_km),
        load_type,
        pace_min_per_km,
    }
}
