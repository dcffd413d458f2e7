//! Coaching metrics over trailing 7/14/28-day windows.

pub mod elevation;
pub mod load;
pub mod scores;
pub mod window;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{ActivityRecord, CoachMetrics, DailyLoadPoint};
use scores::{date_label, run_pace_trend, Scores};
use window::WindowAggregate;

pub use elevation::ElevationGain;
pub use load::{activity_load, ActivityLoad};
pub use scores::score_label;

/// Compute a full metrics snapshot for `activities` as seen at `as_of`.
pub fn compute_coach_metrics(activities: &[ActivityRecord], as_of: DateTime<Utc>) -> CoachMetrics {
    let aggregate = WindowAggregate::scan(activities, as_of);
    let scores = Scores::synthesize(&aggregate);

    debug!(
        activities = activities.len(),
        load7 = aggregate.load7,
        load28 = aggregate.load28,
        ratio = scores.acute_chronic_ratio,
        "computed coach metrics"
    );

    let daily_load14 = aggregate
        .daily
        .iter()
        .map(|bucket| {
            let by_type = bucket.by_type.rounded();
            DailyLoadPoint {
                date: date_label(bucket.date),
                total: bucket.by_type.total().round(),
                by_type,
            }
        })
        .collect();

    CoachMetrics {
        as_of,
        load7: aggregate.load7.round(),
        load28: aggregate.load28.round(),
        load_by_type7: aggregate.load_by_type7.rounded(),
        daily_load14,
        run_pace_trend: run_pace_trend(activities),
        acute_chronic_ratio: scores.acute_chronic_ratio,
        fatigue_score: scores.fatigue_score,
        injury_risk_score: scores.injury_risk_score,
        consistency_score: scores.consistency_score,
        progress_score: scores.progress_score,
        training_load_score: scores.training_load_score,
        run_days7: aggregate.run_days7.len(),
        active_days14: aggregate.active_days14.len(),
    }
}
