use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Day of the week as it appears in a training plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Canonical Monday -> Sunday order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn short(&self) -> &'static str {
        &self.as_str()[..3]
    }

    /// Full English or Danish weekday name, any case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "monday" | "mandag" => Some(Weekday::Monday),
            "tuesday" | "tirsdag" => Some(Weekday::Tuesday),
            "wednesday" | "onsdag" => Some(Weekday::Wednesday),
            "thursday" | "torsdag" => Some(Weekday::Thursday),
            "friday" | "fredag" => Some(Weekday::Friday),
            "saturday" | "lørdag" => Some(Weekday::Saturday),
            "sunday" | "søndag" => Some(Weekday::Sunday),
            _ => None,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training intent of a planned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayType {
    Run,
    Rest,
    CrossTrain,
    Other,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Run => "run",
            DayType::Rest => "rest",
            DayType::CrossTrain => "cross-train",
            DayType::Other => "other",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub day_type: DayType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub week_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == weekday)
    }

    /// Adds `plan`, folding it into an existing entry for the same weekday.
    /// The first title and type are kept unless the first entry is `other`.
    pub(crate) fn merge_day(&mut self, plan: DayPlan) {
        let Some(existing) = self.days.iter_mut().find(|d| d.day == plan.day) else {
            self.days.push(plan);
            return;
        };

        if !plan.content.is_empty() {
            if existing.content.is_empty() {
                existing.content = plan.content;
            } else {
                let kept = existing.content.trim_end().len();
                existing.content.truncate(kept);
                existing.content.push_str("\n\n");
                existing.content.push_str(&plan.content);
            }
        }
        if existing.day_type == DayType::Other && plan.day_type != DayType::Other {
            existing.title = plan.title;
            existing.day_type = plan.day_type;
        }
    }

    pub(crate) fn sort_days(&mut self) {
        self.days.sort_by_key(|d| d.day);
    }
}

/// One recorded exercise session as handed over by the activity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_time: DateTime<Utc>,
    pub distance_m: f64,
    pub moving_s: f64,
    #[serde(default)]
    pub average_hr: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub elevation_gain_m: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    Run,
    Ride,
    Hike,
    Walk,
    Other,
}

impl LoadType {
    pub const ALL: [LoadType; 5] = [
        LoadType::Run,
        LoadType::Ride,
        LoadType::Hike,
        LoadType::Walk,
        LoadType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadType::Run => "run",
            LoadType::Ride => "ride",
            LoadType::Hike => "hike",
            LoadType::Walk => "walk",
            LoadType::Other => "other",
        }
    }
}

/// Load split across sport categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadByType {
    pub run: f64,
    pub ride: f64,
    pub hike: f64,
    pub walk: f64,
    pub other: f64,
}

impl LoadByType {
    pub fn get(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Run => self.run,
            LoadType::Ride => self.ride,
            LoadType::Hike => self.hike,
            LoadType::Walk => self.walk,
            LoadType::Other => self.other,
        }
    }

    pub fn add(&mut self, load_type: LoadType, load: f64) {
        match load_type {
            LoadType::Run => self.run += load,
            LoadType::Ride => self.ride += load,
            LoadType::Hike => self.hike += load,
            LoadType::Walk => self.walk += load,
            LoadType::Other => self.other += load,
        }
    }

    pub fn total(&self) -> f64 {
        LoadType::ALL.iter().map(|t| self.get(*t)).sum()
    }

    pub(crate) fn rounded(&self) -> Self {
        Self {
            run: self.run.round(),
            ride: self.ride.round(),
            hike: self.hike.round(),
            walk: self.walk.round(),
            other: self.other.round(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadPoint {
    pub date: String,
    #[serde(flatten)]
    pub by_type: LoadByType,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacePoint {
    pub date: String,
    pub pace: f64,
    pub pace_label: String,
}

/// Point-in-time coaching snapshot derived from an activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachMetrics {
    pub as_of: DateTime<Utc>,
    pub load7: f64,
    pub load28: f64,
    pub load_by_type7: LoadByType,
    pub daily_load14: Vec<DailyLoadPoint>,
    pub run_pace_trend: Vec<PacePoint>,
    pub acute_chronic_ratio: f64,
    pub fatigue_score: u8,
    pub injury_risk_score: u8,
    pub consistency_score: u8,
    pub progress_score: u8,
    pub training_load_score: u8,
    pub run_days7: usize,
    pub active_days14: usize,
}
