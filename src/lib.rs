//! Training-plan normalization and coaching metrics for runners.

pub mod input;
pub mod metrics;
pub mod models;
pub mod plan;
pub mod report;

pub use metrics::{compute_coach_metrics, ElevationGain};
pub use plan::{parse_plan_text, parse_training_plan};
