use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::models::ActivityRecord;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load an activity list from a `.csv` export or a JSON array.
pub fn read_activities(path: &Path) -> anyhow::Result<Vec<ActivityRecord>> {
    let activities = if is_csv(path) {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let mut activities = Vec::new();
        for (index, result) in reader.deserialize::<ActivityRecord>().enumerate() {
            let record = result
                .with_context(|| format!("invalid activity on row {} of {}", index + 1, path.display()))?;
            activities.push(record);
        }
        activities
    } else {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON array of activities", path.display()))?
    };

    debug!(count = activities.len(), path = %path.display(), "loaded activities");
    Ok(activities)
}

pub fn read_plan(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read plan {}", path.display()))
}
