//! Training-plan parsing: the first format that recognizes the text wins.

pub mod classify;
pub mod headers;
pub mod structured;
pub mod table;

use serde::Serialize;
use tracing::debug;

use crate::models::WeeklyPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    Structured,
    Table,
    Headers,
    /// No text was supplied.
    Empty,
}

impl PlanFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFormat::Structured => "structured",
            PlanFormat::Table => "table",
            PlanFormat::Headers => "headers",
            PlanFormat::Empty => "empty",
        }
    }
}

type Strategy = fn(&str) -> Option<Vec<WeeklyPlan>>;

const STRATEGIES: [(PlanFormat, Strategy); 3] = [
    (PlanFormat::Structured, structured::parse),
    (PlanFormat::Table, table::parse),
    (PlanFormat::Headers, headers::parse),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPlan {
    pub format: PlanFormat,
    pub weeks: Vec<WeeklyPlan>,
}

/// Parse plan text and report which format recognized it.
pub fn parse_plan_text(text: &str) -> ParsedPlan {
    if text.is_empty() {
        return ParsedPlan {
            format: PlanFormat::Empty,
            weeks: Vec::new(),
        };
    }

    let parsed = STRATEGIES
        .iter()
        .find_map(|(format, strategy)| {
            strategy(text).map(|weeks| ParsedPlan {
                format: *format,
                weeks,
            })
        })
        .unwrap_or(ParsedPlan {
            format: PlanFormat::Headers,
            weeks: Vec::new(),
        });

    debug!(
        format = parsed.format.as_str(),
        weeks = parsed.weeks.len(),
        "parsed training plan"
    );
    parsed
}

/// Parse a stored plan document into weeks. Missing or unreadable plans give
/// an empty schedule rather than an error.
pub fn parse_training_plan(text: Option<&str>) -> Vec<WeeklyPlan> {
    match text {
        Some(text) => parse_plan_text(text).weeks,
        None => Vec::new(),
    }
}
