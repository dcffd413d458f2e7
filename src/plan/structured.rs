//! Plans delivered as JSON with a `weekly_schedule` list.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::classify;
use crate::models::{DayPlan, WeeklyPlan, Weekday};

#[derive(Debug, Deserialize)]
struct StructuredPlan {
    weekly_schedule: Vec<StructuredWeek>,
}

/// Week fields are kept loose so one odd value cannot sink the whole plan.
#[derive(Debug, Deserialize)]
struct StructuredWeek {
    #[serde(default)]
    week_number: Option<Value>,
    #[serde(default)]
    start_date: Option<Value>,
    #[serde(default)]
    sessions: Option<Value>,
}

/// Only attempted when the text opens like JSON; any decode failure or an
/// empty schedule hands control to the next strategy.
pub fn parse(text: &str) -> Option<Vec<WeeklyPlan>> {
    let trimmed = text.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }

    let plan: StructuredPlan = match serde_json::from_str(trimmed) {
        Ok(plan) => plan,
        Err(err) => {
            debug!(error = %err, "not a structured plan");
            return None;
        }
    };

    let weeks: Vec<WeeklyPlan> = plan
        .weekly_schedule
        .into_iter()
        .enumerate()
        .map(|(idx, week)| normalize_week(idx, week))
        .collect();

    if weeks.is_empty() {
        None
    } else {
        Some(weeks)
    }
}

fn normalize_week(idx: usize, week: StructuredWeek) -> WeeklyPlan {
    let number = week
        .week_number
        .as_ref()
        .and_then(scalar_text)
        .unwrap_or_else(|| (idx + 1).to_string());

    let start_date = week.start_date.as_ref().and_then(|raw| {
        let parsed = raw
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        if parsed.is_none() && !raw.is_null() {
            debug!(start_date = %raw, "ignoring unparseable week start date");
        }
        parsed
    });

    let sessions = match week.sessions {
        Some(Value::Array(sessions)) => sessions,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!(sessions = %other, "ignoring non-list sessions");
            Vec::new()
        }
    };

    let mut plan = WeeklyPlan {
        week_title: format!("Week {number}"),
        start_date,
        days: Vec::new(),
    };
    for day in sessions.iter().filter_map(normalize_session) {
        plan.merge_day(day);
    }
    plan.sort_days();
    plan
}

fn normalize_session(session: &Value) -> Option<DayPlan> {
    let Some(fields) = session.as_object() else {
        debug!(session = %session, "dropping session that is not an object");
        return None;
    };

    let raw_day = fields.get("day").and_then(Value::as_str).unwrap_or_default();
    let Some(day) = Weekday::from_name(raw_day) else {
        debug!(day = raw_day, "dropping session without a recognizable weekday");
        return None;
    };

    let label = fields.get("type").and_then(scalar_text).unwrap_or_default();

    let mut parts = Vec::new();
    if let Some(minutes) = fields.get("duration_minutes").and_then(present_value) {
        parts.push(format!("**Duration:** {minutes} min"));
    }
    if let Some(vert) = fields.get("vert_meters").and_then(present_value) {
        parts.push(format!("**Vert:** {vert}m"));
    }
    if let Some(notes) = fields.get("notes").and_then(present_value) {
        parts.push(notes);
    }

    Some(DayPlan {
        day,
        day_type: classify::STRUCTURED.classify(&label),
        title: if label.is_empty() {
            "Training".to_string()
        } else {
            label
        },
        content: parts.join("\n\n"),
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Zero, false, empty and null values are treated as absent.
fn present_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayType;

    #[test]
    fn normalizes_week_and_sessions() {
        let text = r#"{
            "weekly_schedule": [
                {
                    "week_number": 1,
                    "start_date": "2025-03-03",
                    "sessions": [
                        {"day": "Wednesday", "type": "Strength", "notes": "Core and hips"},
                        {"day": "Monday", "type": "Easy Run", "duration_minutes": 40, "vert_meters": 150}
                    ]
                }
            ]
        }"#;

        let weeks = parse(text).unwrap();
        assert_eq!(weeks.len(), 1);
        let week = &weeks[0];
        assert_eq!(week.week_title, "Week 1");
        assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2025, 3, 3));
        assert_eq!(week.days[0].day, Weekday::Monday);
        assert_eq!(week.days[0].day_type, DayType::Run);
        assert_eq!(week.days[0].title, "Easy Run");
        assert_eq!(week.days[0].content, "**Duration:** 40 min\n\n**Vert:** 150m");
        assert_eq!(week.days[1].day, Weekday::Wednesday);
        assert_eq!(week.days[1].day_type, DayType::CrossTrain);
        assert_eq!(week.days[1].content, "Core and hips");
    }

    #[test]
    fn zero_duration_is_omitted() {
        let text = r#"{"weekly_schedule": [{"week_number": 2, "sessions": [
            {"day": "Friday", "type": "Rest", "duration_minutes": 0}
        ]}]}"#;
        let weeks = parse(text).unwrap();
        let friday = weeks[0].day(Weekday::Friday).unwrap();
        assert_eq!(friday.content, "");
        assert_eq!(friday.day_type, DayType::Rest);
    }

    #[test]
    fn missing_week_number_uses_position() {
        let text = r#"{"weekly_schedule": [{"sessions": []}, {"sessions": []}]}"#;
        let weeks = parse(text).unwrap();
        assert_eq!(weeks[1].week_title, "Week 2");
    }

    #[test]
    fn danish_day_names_are_translated() {
        let text = r#"{"weekly_schedule": [{"week_number": "3", "sessions": [
            {"day": "Lørdag", "type": "Long run"}
        ]}]}"#;
        let weeks = parse(text).unwrap();
        assert_eq!(weeks[0].week_title, "Week 3");
        assert_eq!(weeks[0].days[0].day, Weekday::Saturday);
    }

    #[test]
    fn falls_through_on_other_shapes() {
        assert!(parse("# Week 1").is_none());
        assert!(parse("{ not json").is_none());
        assert!(parse(r#"{"weeks": []}"#).is_none());
        assert!(parse(r#"[{"weekly_schedule": []}]"#).is_none());
        assert!(parse(r#"{"weekly_schedule": []}"#).is_none());
    }

    #[test]
    fn null_sessions_keep_the_rest_of_the_plan() {
        let text = r#"{"weekly_schedule":[
            {"week_number":1,"sessions":null},
            {"week_number":2,"sessions":[{"day":"Monday","type":"Easy Run","duration_minutes":40}]}
        ]}"#;
        let weeks = parse(text).unwrap();
        assert_eq!(weeks.len(), 2);
        assert!(weeks[0].days.is_empty());
        assert_eq!(weeks[1].week_title, "Week 2");
        assert_eq!(weeks[1].day(Weekday::Monday).unwrap().day_type, DayType::Run);
    }

    #[test]
    fn odd_session_fields_are_tolerated() {
        let text = r#"{"weekly_schedule":[{"week_number":1,"start_date":20250303,"sessions":[
            {"day":"Tuesday","type":"Tempo","notes":7},
            {"day":3,"type":"Easy Run"},
            "Thursday",
            {"day":"Saturday","type":null,"duration_minutes":"90"}
        ]}]}"#;
        let weeks = parse(text).unwrap();
        let week = &weeks[0];
        assert_eq!(week.start_date, None);
        assert_eq!(week.days.len(), 2);

        let tuesday = week.day(Weekday::Tuesday).unwrap();
        assert_eq!(tuesday.content, "7");
        assert_eq!(tuesday.day_type, DayType::Run);

        let saturday = week.day(Weekday::Saturday).unwrap();
        assert_eq!(saturday.title, "Training");
        assert_eq!(saturday.content, "**Duration:** 90 min");
    }

    #[test]
    fn non_list_sessions_give_an_empty_week() {
        let weeks = parse(r#"{"weekly_schedule": [{"sessions": 4}]}"#).unwrap();
        assert_eq!(weeks[0].week_title, "Week 1");
        assert!(weeks[0].days.is_empty());
    }

    #[test]
    fn two_sessions_on_one_day_share_an_entry() {
        let text = r#"{"weekly_schedule": [{"week_number": 1, "sessions": [
            {"day": "Monday", "type": "Easy Run", "duration_minutes": 40},
            {"day": "Monday", "type": "Strength", "notes": "Core"}
        ]}]}"#;
        let weeks = parse(text).unwrap();
        assert_eq!(weeks[0].days.len(), 1);
        let monday = &weeks[0].days[0];
        assert_eq!(monday.title, "Easy Run");
        assert_eq!(monday.day_type, DayType::Run);
        assert_eq!(monday.content, "**Duration:** 40 min\n\nCore");
    }
}
