use std::sync::LazyLock;

use regex::Regex;

use super::classify;
use crate::models::{DayPlan, DayType, WeeklyPlan, Weekday};

static WEEK_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^#{1,3}\s+(Week\s+\d+|Intro|Base Phase|Race Week|Uge\s+\d+)(.*)").ok()
});

static DAY_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:#{3,4}|\*\*|-)\s*(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday|Mandag|Tirsdag|Onsdag|Torsdag|Fredag|Lørdag|Søndag)[:\s]*(.*)",
    )
    .ok()
});

const IMPLICIT_WEEK_TITLE: &str = "Training Plan";
const DEFAULT_DAY_TITLE: &str = "Training";
/// Body text past this length no longer upgrades an unclassified day.
const BODY_SCAN_LIMIT: usize = 200;

enum Line<'a> {
    Week(String),
    Day { day: Weekday, trailing: &'a str },
    Body(&'a str),
}

fn read_line(line: &str) -> Line<'_> {
    if let Some(caps) = WEEK_HEADER.as_ref().and_then(|re| re.captures(line)) {
        let label = caps.get(1).map_or("", |m| m.as_str()).trim();
        let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
        let title = if rest.is_empty() {
            label.to_string()
        } else {
            format!("{label} {rest}")
        };
        return Line::Week(title);
    }

    if let Some(caps) = DAY_HEADER.as_ref().and_then(|re| re.captures(line)) {
        let day = caps.get(1).and_then(|m| Weekday::from_name(m.as_str()));
        if let Some(day) = day {
            let trailing = caps.get(2).map_or("", |m| m.as_str());
            return Line::Day { day, trailing };
        }
    }

    Line::Body(line)
}

#[derive(Default)]
struct HeaderParser {
    weeks: Vec<WeeklyPlan>,
    week: Option<WeeklyPlan>,
    day: Option<DayPlan>,
}

impl HeaderParser {
    fn flush_day(&mut self) {
        if let Some(day) = self.day.take() {
            self.week
                .get_or_insert_with(|| new_week(IMPLICIT_WEEK_TITLE))
                .merge_day(day);
        }
    }

    fn flush_week(&mut self) {
        self.flush_day();
        if let Some(week) = self.week.take() {
            self.weeks.push(week);
        }
    }

    fn feed(&mut self, line: &str) {
        match read_line(line) {
            Line::Week(title) => {
                self.flush_week();
                self.week = Some(new_week(&title));
            }
            Line::Day { day, trailing } => {
                self.flush_day();
                self.week
                    .get_or_insert_with(|| new_week(IMPLICIT_WEEK_TITLE));

                let title = trailing.replace("**", "").trim().to_string();
                self.day = Some(DayPlan {
                    day,
                    day_type: classify::HEADING.classify(&title),
                    title: if title.is_empty() {
                        DEFAULT_DAY_TITLE.to_string()
                    } else {
                        title
                    },
                    content: String::new(),
                });
            }
            Line::Body(text) => {
                let Some(day) = self.day.as_mut() else {
                    return;
                };
                day.content.push_str(text);
                day.content.push('\n');

                if day.day_type == DayType::Other
                    && day.content.chars().count() < BODY_SCAN_LIMIT
                {
                    day.day_type = classify::DAY_BODY.classify(&day.content);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<WeeklyPlan> {
        self.flush_week();
        self.weeks
    }
}

fn new_week(title: &str) -> WeeklyPlan {
    WeeklyPlan {
        week_title: title.to_string(),
        start_date: None,
        days: Vec::new(),
    }
}

/// Never fails: text without any recognizable heading yields no weeks.
pub fn parse(text: &str) -> Option<Vec<WeeklyPlan>> {
    let mut parser = HeaderParser::default();
    for line in text.lines() {
        parser.feed(line);
    }
    Some(parser.finish())
}
