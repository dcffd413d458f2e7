use std::sync::LazyLock;

use regex::Regex;

use crate::models::DayType;

/// A number followed by a distance or time unit, e.g. `5km` or `40 min`.
static DISTANCE_OR_TIME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+\s*(km|min)").ok());

#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The whole (trimmed, lowercased) text equals one of the values.
    Exact(&'static [&'static str]),
    /// The text contains one of the values.
    Contains(&'static [&'static str]),
    Pattern(&'static LazyLock<Option<Regex>>),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Exact(values) => values.iter().any(|v| *v == text),
            Matcher::Contains(values) => values.iter().any(|v| text.contains(v)),
            Matcher::Pattern(pattern) => LazyLock::force(pattern)
                .as_ref()
                .is_some_and(|re| re.is_match(text)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub day_type: DayType,
    pub matcher: Matcher,
}

const fn rule(day_type: DayType, matcher: Matcher) -> Rule {
    Rule { day_type, matcher }
}

#[derive(Debug, Clone, Copy)]
pub struct DayTypeClassifier {
    rules: &'static [Rule],
}

impl DayTypeClassifier {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// First matching rule wins; unmatched text is [`DayType::Other`].
    pub fn classify(&self, text: &str) -> DayType {
        let lower = text.trim().to_lowercase();
        self.rules
            .iter()
            .find(|r| r.matcher.matches(&lower))
            .map(|r| r.day_type)
            .unwrap_or(DayType::Other)
    }
}

static STRUCTURED_RULES: [Rule; 5] = [
    rule(DayType::Rest, Matcher::Exact(&["", "off", "fri"])),
    rule(DayType::Rest, Matcher::Contains(&["rest"])),
    rule(DayType::Run, Matcher::Pattern(&DISTANCE_OR_TIME)),
    rule(
        DayType::Run,
        Matcher::Contains(&[
            "run", "jog", "interval", "tempo", "fartlek", "trail", "vert", "recovery", "easy",
            "steady", "quality", "race", "shakeout",
        ]),
    ),
    rule(
        DayType::CrossTrain,
        Matcher::Contains(&["cross", "strength", "gym", "swim", "bike", "alternative"]),
    ),
];
/// Session type labels from structured plans (`"Easy Run"`, `"Strength"`).
pub static STRUCTURED: DayTypeClassifier = DayTypeClassifier::new(&STRUCTURED_RULES);

static TABLE_RULES: [Rule; 4] = [
    rule(DayType::Rest, Matcher::Exact(&["", "-", "off", "fri", "rest"])),
    rule(DayType::Run, Matcher::Pattern(&DISTANCE_OR_TIME)),
    rule(
        DayType::Run,
        Matcher::Contains(&["løb", "run", "fart", "interval", "tempo", "hm", "vert"]),
    ),
    rule(
        DayType::CrossTrain,
        Matcher::Contains(&["styrke", "gym", "swim", "bike"]),
    ),
];
/// Table cells (`"5km"`, `"-"`, `"Styrke"`).
pub static TABLE: DayTypeClassifier = DayTypeClassifier::new(&TABLE_RULES);

static HEADING_RULES: [Rule; 3] = [
    rule(DayType::Rest, Matcher::Contains(&["rest", "off", "fri"])),
    rule(
        DayType::Run,
        Matcher::Contains(&["run", "jog", "intervals", "tempo", "løb"]),
    ),
    rule(
        DayType::CrossTrain,
        Matcher::Contains(&["bike", "swim", "gym", "cross", "styrke"]),
    ),
];
/// Trailing text of a day heading (`"### Tuesday: Intervals"`).
pub static HEADING: DayTypeClassifier = DayTypeClassifier::new(&HEADING_RULES);

static DAY_BODY_RULES: [Rule; 2] = [
    rule(DayType::Rest, Matcher::Contains(&["rest day"])),
    rule(DayType::Run, Matcher::Contains(&["kilometer", "mile", "km"])),
];
/// Body text under a day heading, used to upgrade an unclassified day.
pub static DAY_BODY: DayTypeClassifier = DayTypeClassifier::new(&DAY_BODY_RULES);
