use std::collections::HashMap;
use std::fmt::Write;

use crate::metrics::{score_label, ElevationGain};
use crate::models::{ActivityRecord, CoachMetrics, DayType, LoadType, WeeklyPlan};

#[derive(Debug, Clone, PartialEq)]
pub struct DayTypeSummary {
    pub day_type: DayType,
    pub count: usize,
}

pub fn summarize_by_type(weeks: &[WeeklyPlan]) -> Vec<DayTypeSummary> {
    let mut map: HashMap<DayType, usize> = HashMap::new();

    for day in weeks.iter().flat_map(|w| w.days.iter()) {
        *map.entry(day.day_type).or_insert(0) += 1;
    }

    let mut summaries: Vec<DayTypeSummary> = map
        .into_iter()
        .map(|(day_type, count)| DayTypeSummary { day_type, count })
        .collect();

    summaries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.day_type.as_str().cmp(b.day_type.as_str()))
    });
    summaries
}

/// `m:ss/km`, or `0:00/km` when there is no distance.
pub fn format_pace(moving_s: f64, distance_m: f64) -> String {
    if distance_m <= 0.0 {
        return "0:00/km".to_string();
    }
    let pace_seconds = moving_s / (distance_m / 1000.0);
    let minutes = (pace_seconds / 60.0).floor() as i64;
    let seconds = (pace_seconds % 60.0).floor() as i64;
    format!("{minutes}:{seconds:02}/km")
}

/// One line per activity, newest first.
pub fn activity_digest(activities: &[ActivityRecord], limit: usize) -> Vec<String> {
    let mut recent: Vec<&ActivityRecord> = activities.iter().collect();
    recent.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    recent
        .into_iter()
        .take(limit)
        .map(|a| {
            let hr = a
                .average_hr
                .filter(|hr| hr.is_finite() && *hr != 0.0)
                .map(|hr| format!("{:.0}", hr.round()))
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "{} {}: {:.2} km in {:.1} min ({}, avg HR {})",
                a.start_time.format("%Y-%m-%d"),
                a.activity_type,
                a.distance_m / 1000.0,
                a.moving_s / 60.0,
                format_pace(a.moving_s, a.distance_m),
                hr
            )
        })
        .collect()
}

pub fn build_report(
    weeks: &[WeeklyPlan],
    metrics: &CoachMetrics,
    activities: &[ActivityRecord],
    elevation: &ElevationGain,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Training Report");
    let _ = writeln!(
        output,
        "Generated as of {}",
        metrics.as_of.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Load");
    let _ = writeln!(output, "- 7-day load: {:.0}", metrics.load7);
    let _ = writeln!(output, "- 28-day load: {:.0}", metrics.load28);
    let _ = writeln!(
        output,
        "- Acute:chronic ratio: {:.2}",
        metrics.acute_chronic_ratio
    );
    for load_type in LoadType::ALL {
        let load = metrics.load_by_type7.get(load_type);
        if load > 0.0 {
            let _ = writeln!(output, "  - {}: {:.0}", load_type.as_str(), load);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Scores");
    let scores = [
        ("Training load", metrics.training_load_score),
        ("Fatigue", metrics.fatigue_score),
        ("Injury risk", metrics.injury_risk_score),
        ("Consistency", metrics.consistency_score),
        ("Progress", metrics.progress_score),
    ];
    for (name, score) in scores {
        let _ = writeln!(output, "- {}: {} ({})", name, score, score_label(score));
    }
    let _ = writeln!(
        output,
        "- Run days (7d): {}, active days (14d): {}",
        metrics.run_days7, metrics.active_days14
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Elevation");
    let _ = writeln!(output, "- This week: {:.0} m", elevation.weekly_gain_m);
    let _ = writeln!(output, "- This month: {:.0} m", elevation.monthly_gain_m);
    let _ = writeln!(output, "- This year: {:.0} m", elevation.yearly_gain_m);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Training Plan");

    if weeks.is_empty() {
        let _ = writeln!(output, "No training plan uploaded.");
    } else {
        let mix: Vec<String> = summarize_by_type(weeks)
            .iter()
            .map(|s| format!("{} {}", s.count, s.day_type))
            .collect();
        let _ = writeln!(output, "Day mix: {}", mix.join(", "));
        for week in weeks {
            let _ = writeln!(output);
            match week.start_date {
                Some(start) => {
                    let _ = writeln!(output, "### {} (from {})", week.week_title, start);
                }
                None => {
                    let _ = writeln!(output, "### {}", week.week_title);
                }
            }
            for day in &week.days {
                let _ = writeln!(output, "- {}: {} ({})", day.day, day.title, day.day_type);
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Activities");

    let digest = activity_digest(activities, 5);
    if digest.is_empty() {
        let _ = writeln!(output, "No activities recorded.");
    } else {
        for line in digest {
            let _ = writeln!(output, "- {line}");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::metrics::compute_coach_metrics;
    use crate::plan::parse_training_plan;

    fn sample_activity(days_ago: i64, average_hr: Option<f64>) -> ActivityRecord {
        ActivityRecord {
            activity_type: "Run".to_string(),
            start_time: Utc.with_ymd_and_hms(2025, 6, 15, 7, 0, 0).unwrap()
                - Duration::days(days_ago),
            distance_m: 8000.0,
            moving_s: 2730.0,
            average_hr,
            name: None,
            elevation_gain_m: Some(90.0),
        }
    }

    #[test]
    fn pace_is_minutes_and_seconds_per_km() {
        assert_eq!(format_pace(1800.0, 5000.0), "6:00/km");
        assert_eq!(format_pace(2730.0, 8000.0), "5:41/km");
        assert_eq!(format_pace(600.0, 0.0), "0:00/km");
    }

    #[test]
    fn digest_is_newest_first() {
        let activities = vec![
            sample_activity(3, None),
            sample_activity(1, Some(151.6)),
            sample_activity(2, Some(0.0)),
        ];
        let digest = activity_digest(&activities, 5);
        assert_eq!(
            digest[0],
            "2025-06-14 Run: 8.00 km in 45.5 min (5:41/km, avg HR 152)"
        );
        assert!(digest[1].ends_with("avg HR N/A)"));
        assert!(digest[2].ends_with("avg HR N/A)"));
    }

    #[test]
    fn day_mix_counts_types() {
        let weeks = parse_training_plan(Some("| Week | Mon | Tue |\n| 1 | 5km | Gym |"));
        let mix = summarize_by_type(&weeks);
        assert_eq!(mix[0], DayTypeSummary { day_type: DayType::Rest, count: 5 });
        assert_eq!(mix.len(), 3);
    }

    #[test]
    fn report_covers_plan_and_metrics() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let activities = vec![sample_activity(0, Some(150.0)), sample_activity(2, None)];
        let metrics = compute_coach_metrics(&activities, now);
        let elevation = ElevationGain::compute(&activities, now);
        let weeks = parse_training_plan(Some("## Week 1\n### Monday: Easy run\n8 km"));

        let report = build_report(&weeks, &metrics, &activities, &elevation);
        assert!(report.starts_with("# Training Report\nGenerated as of 2025-06-15 12:00 UTC"));
        assert!(report.contains("- Consistency: 14 (Very Low)"));
        assert!(report.contains("### Week 1\n- Monday: Easy run (run)"));
        assert!(report.contains("- This month: 180 m"));
        assert!(report.contains("## Recent Activities\n- 2025-06-15 Run"));
    }

    #[test]
    fn report_without_data() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let metrics = compute_coach_metrics(&[], now);
        let report = build_report(&[], &metrics, &[], &ElevationGain::default());
        assert!(report.contains("No training plan uploaded."));
        assert!(report.contains("No activities recorded."));
        assert!(report.contains("- Progress: 50 (Low)"));
    }
}
