//! One pass over the activity list, bucketing load into trailing windows.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::load::activity_load;
use crate::models::{ActivityRecord, LoadByType, LoadType};

pub const DAILY_SERIES_DAYS: usize = 14;

/// Distance and time of a group of runs, for distance-weighted pace.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunTotals {
    pub count: usize,
    pub distance_m: f64,
    pub moving_s: f64,
}

impl RunTotals {
    fn add(&mut self, activity: &ActivityRecord) {
        self.count += 1;
        self.distance_m += activity.distance_m;
        self.moving_s += activity.moving_s;
    }

    /// Seconds per km, `None` without distance.
    pub fn average_pace(&self) -> Option<f64> {
        if self.distance_m > 0.0 {
            Some(self.moving_s / (self.distance_m / 1000.0))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub by_type: LoadByType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowAggregate {
    pub now: DateTime<Utc>,
    /// Oldest first, ending on the calendar day of `now`.
    pub daily: Vec<DailyBucket>,
    pub load7: f64,
    pub load14: f64,
    pub load28: f64,
    pub load_by_type7: LoadByType,
    pub active_days14: BTreeSet<NaiveDate>,
    pub run_days7: BTreeSet<NaiveDate>,
    /// Runs with a pace in the last 14 days.
    pub recent_runs: RunTotals,
    /// Runs with a pace between 14 and 28 days back.
    pub prior_runs: RunTotals,
}

impl WindowAggregate {
    pub fn scan(activities: &[ActivityRecord], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let daily = (0..DAILY_SERIES_DAYS as i64)
            .rev()
            .map(|days_back| DailyBucket {
                date: today - Duration::days(days_back),
                by_type: LoadByType::default(),
            })
            .collect();

        let mut aggregate = Self {
            now,
            daily,
            load7: 0.0,
            load14: 0.0,
            load28: 0.0,
            load_by_type7: LoadByType::default(),
            active_days14: BTreeSet::new(),
            run_days7: BTreeSet::new(),
            recent_runs: RunTotals::default(),
            prior_runs: RunTotals::default(),
        };

        for activity in activities {
            aggregate.add(activity);
        }
        aggregate
    }

    /// Window membership is strict: the activity must start after
    /// `now - days`.
    pub fn in_window(&self, start: DateTime<Utc>, days: i64) -> bool {
        start > self.now - Duration::days(days)
    }

    fn add(&mut self, activity: &ActivityRecord) {
        let computed = activity_load(activity);
        let start = activity.start_time;
        let date = start.date_naive();
        let is_run = computed.load_type == LoadType::Run;

        let in7 = self.in_window(start, 7);
        let in14 = self.in_window(start, 14);
        let in28 = self.in_window(start, 28);

        if in7 {
            self.load7 += computed.load;
            self.load_by_type7.add(computed.load_type, computed.load);
            if is_run {
                self.run_days7.insert(date);
            }
        }
        if in14 {
            self.load14 += computed.load;
            self.active_days14.insert(date);
        }
        if in28 {
            self.load28 += computed.load;
        }

        if let Some(bucket) = self.daily.iter_mut().find(|b| b.date == date) {
            bucket.by_type.add(computed.load_type, computed.load);
        }

        if is_run && computed.pace_min_per_km.is_some() {
            if in14 {
                self.recent_runs.add(activity);
            } else if in28 {
                self.prior_runs.add(activity);
            }
        }
    }
}
