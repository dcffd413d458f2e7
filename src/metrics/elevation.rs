use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::models::ActivityRecord;

/// Sports whose climbing counts towards vertical totals.
const CLIMBING_TYPES: [&str; 4] = ["Run", "TrailRun", "Hike", "Walk"];

/// Vertical meters run and hiked in the current week, month and year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationGain {
    pub weekly_gain_m: f64,
    pub monthly_gain_m: f64,
    pub yearly_gain_m: f64,
}

impl ElevationGain {
    pub fn compute(activities: &[ActivityRecord], now: DateTime<Utc>) -> Self {
        let mut totals = Self::default();

        for activity in activities {
            if !CLIMBING_TYPES.contains(&activity.activity_type.as_str()) {
                continue;
            }
            let gain = activity.elevation_gain_m.unwrap_or(0.0);
            let start = activity.start_time;

            if start.iso_week() == now.iso_week() {
                totals.weekly_gain_m += gain;
            }
            if start.year() == now.year() {
                totals.yearly_gain_m += gain;
                if start.month() == now.month() {
                    totals.monthly_gain_m += gain;
                }
            }
        }

        totals
    }
}
