use std::collections::HashMap;

use tracing::debug;

use super::classify;
use crate::models::{DayPlan, DayType, WeeklyPlan, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Week,
    Day(Weekday),
}

/// Maps an English or Danish header cell to its column. Abbreviations match
/// because lookup is by substring; columns like "Date" or "Total" are ignored.
fn normalize_header(cell: &str) -> Option<Column> {
    const DAYS: [(&str, &str, &str, Weekday); 7] = [
        ("mandag", "monday", "mon", Weekday::Monday),
        ("tirsdag", "tuesday", "tue", Weekday::Tuesday),
        ("onsdag", "wednesday", "wed", Weekday::Wednesday),
        ("torsdag", "thursday", "thu", Weekday::Thursday),
        ("fredag", "friday", "fri", Weekday::Friday),
        ("lørdag", "saturday", "sat", Weekday::Saturday),
        ("søndag", "sunday", "sun", Weekday::Sunday),
    ];

    let lower = cell.to_lowercase();
    if lower.contains("uge") || lower.contains("week") {
        return Some(Column::Week);
    }
    DAYS.iter()
        .find(|(danish, english, abbr, _)| {
            lower.contains(danish) || lower.contains(english) || lower.contains(abbr)
        })
        .map(|(_, _, _, day)| Column::Day(*day))
}

fn clean_cell(cell: &str) -> String {
    cell.replace("**", "").trim().to_string()
}

/// Cells between the leading and trailing pipe.
fn split_cells(line: &str) -> Vec<&str> {
    let pieces: Vec<&str> = line.split('|').map(str::trim).collect();
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1].to_vec()
}

pub fn parse(text: &str) -> Option<Vec<WeeklyPlan>> {
    let mut weeks = Vec::new();
    let mut columns: HashMap<usize, Column> = HashMap::new();
    let mut found_header = false;

    for raw in text.lines() {
        let line = raw.trim();
        if !line.starts_with('|') {
            continue;
        }

        let cells = split_cells(line);
        let is_separator = line.contains("---");

        let is_header = cells.iter().any(|c| {
            matches!(
                normalize_header(&clean_cell(c)),
                Some(Column::Week) | Some(Column::Day(Weekday::Monday))
            )
        });

        if is_header && !is_separator {
            columns = cells
                .iter()
                .enumerate()
                .filter_map(|(idx, c)| normalize_header(&clean_cell(c)).map(|col| (idx, col)))
                .collect();
            found_header = true;
            continue;
        }

        if is_separator || !found_header {
            continue;
        }

        if let Some(week) = parse_row(&cells, &columns) {
            weeks.push(week);
        } else {
            debug!(row = line, "skipping table row without a week identifier");
        }
    }

    if weeks.is_empty() {
        None
    } else {
        Some(weeks)
    }
}

fn parse_row(cells: &[&str], columns: &HashMap<usize, Column>) -> Option<WeeklyPlan> {
    let mut week_id = String::new();
    let mut days: Vec<DayPlan> = Vec::new();

    for (idx, cell) in cells.iter().enumerate() {
        let Some(column) = columns.get(&idx) else {
            continue;
        };
        let content = clean_cell(cell);

        match column {
            Column::Week => week_id = content,
            Column::Day(day) => {
                if content.is_empty() || days.iter().any(|d| d.day == *day) {
                    continue;
                }
                days.push(DayPlan {
                    day: *day,
                    title: content.clone(),
                    day_type: classify::TABLE.classify(&content),
                    content,
                });
            }
        }
    }

    if week_id.is_empty() {
        return None;
    }

    for day in Weekday::ALL {
        if !days.iter().any(|d| d.day == day) {
            days.push(DayPlan {
                day,
                title: "Rest".to_string(),
                content: String::new(),
                day_type: DayType::Rest,
            });
        }
    }

    let mut week = WeeklyPlan {
        week_title: format!("Week {week_id}"),
        start_date: None,
        days,
    };
    week.sort_days();
    Some(week)
}
