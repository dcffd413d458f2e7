use chrono::NaiveDate;

use super::load::load_type;
use super::window::{WindowAggregate, DAILY_SERIES_DAYS};
use crate::models::{ActivityRecord, LoadType, PacePoint};

pub const PACE_TREND_LEN: usize = 10;
const NEUTRAL: f64 = 50.0;
const RUN_STREAK_DAYS: usize = 5;
const RUN_STREAK_RISK: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub acute_chronic_ratio: f64,
    pub training_load_score: u8,
    pub fatigue_score: u8,
    pub injury_risk_score: u8,
    pub consistency_score: u8,
    pub progress_score: u8,
}

/// Round to the nearest integer and clamp into 0..=100.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 7-day load against a quarter of the 28-day load.
pub fn acute_chronic_ratio(load7: f64, load28: f64) -> f64 {
    if load28 > 0.0 {
        load7 / (load28 / 4.0)
    } else {
        0.0
    }
}

impl Scores {
    pub fn synthesize(aggregate: &WindowAggregate) -> Self {
        let ratio = acute_chronic_ratio(aggregate.load7, aggregate.load28);
        let deviation = ratio - 1.0;

        let streak_risk = if aggregate.run_days7.len() >= RUN_STREAK_DAYS {
            RUN_STREAK_RISK
        } else {
            0.0
        };

        let consistency =
            aggregate.active_days14.len() as f64 / DAILY_SERIES_DAYS as f64 * 100.0;

        let progress = match (
            aggregate.recent_runs.average_pace(),
            aggregate.prior_runs.average_pace(),
        ) {
            (Some(recent), Some(prior)) => {
                let improvement = (prior - recent) / prior;
                NEUTRAL + improvement * 200.0
            }
            _ => NEUTRAL,
        };

        Self {
            acute_chronic_ratio: round2(ratio),
            training_load_score: clamp_score(NEUTRAL + deviation * 55.0),
            fatigue_score: clamp_score(NEUTRAL + deviation * 45.0),
            injury_risk_score: clamp_score(NEUTRAL + deviation * 60.0 + streak_risk),
            consistency_score: clamp_score(consistency),
            progress_score: clamp_score(progress),
        }
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "High",
        60..=79 => "Moderate",
        40..=59 => "Low",
        _ => "Very Low",
    }
}

/// `m:ss` for a pace in minutes per km.
pub fn pace_label(pace_min_per_km: f64) -> String {
    let total_seconds = (pace_min_per_km * 60.0).round() as i64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Short dashboard label such as `Jun 5`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// The ten most recent runs with distance, oldest first.
pub fn run_pace_trend(activities: &[ActivityRecord]) -> Vec<PacePoint> {
    let mut runs: Vec<&ActivityRecord> = activities
        .iter()
        .filter(|a| {
            load_type(&a.activity_type) == LoadType::Run
                && a.distance_m > 0.0
                && a.moving_s.is_finite()
                && a.moving_s > 0.0
        })
        .collect();
    runs.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    runs.truncate(PACE_TREND_LEN);
    runs.reverse();

    runs.into_iter()
        .map(|run| {
            let pace = run.moving_s / (run.distance_m / 1000.0) / 60.0;
            PacePoint {
                date: date_label(run.start_time.date_naive()),
                pace: round2(pace),
                pace_label: pace_label(pace),
            }
        })
        .collect()
}
