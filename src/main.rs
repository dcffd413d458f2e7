use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stridecoach::models::Weekday;
use stridecoach::{compute_coach_metrics, input, metrics, parse_plan_text, report, ElevationGain};

#[derive(Parser)]
#[command(name = "stridecoach", version)]
#[command(about = "Training plan parser and coaching metrics for runners", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a training plan document into weeks
    Plan {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Compute load and scores from an activity list
    Metrics {
        #[arg(long)]
        activities: PathBuf,
        /// Reference instant (RFC 3339), defaults to now
        #[arg(long, env = "STRIDECOACH_AS_OF")]
        as_of: Option<DateTime<Utc>>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        activities: PathBuf,
        #[arg(long)]
        plan: Option<PathBuf>,
        #[arg(long, env = "STRIDECOACH_AS_OF")]
        as_of: Option<DateTime<Utc>>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { file, json } => {
            let text = input::read_plan(&file)?;
            let parsed = parse_plan_text(&text);

            if json {
                let out = serde_json::to_string_pretty(&parsed.weeks)
                    .context("failed to encode plan")?;
                println!("{out}");
                return Ok(());
            }

            if parsed.weeks.is_empty() {
                println!("No weeks found in {}.", file.display());
                return Ok(());
            }

            println!(
                "Parsed {} weeks ({} format):",
                parsed.weeks.len(),
                parsed.format.as_str()
            );
            for week in &parsed.weeks {
                println!("{}", week.week_title);
                for day in Weekday::ALL {
                    if let Some(plan) = week.day(day) {
                        println!("  {} {} ({})", day.short(), plan.title, plan.day_type);
                    }
                }
            }
        }
        Commands::Metrics {
            activities,
            as_of,
            json,
        } => {
            let records = input::read_activities(&activities)?;
            let snapshot = compute_coach_metrics(&records, as_of.unwrap_or_else(Utc::now));

            if json {
                let out = serde_json::to_string_pretty(&snapshot)
                    .context("failed to encode metrics")?;
                println!("{out}");
                return Ok(());
            }

            println!(
                "Load 7d {:.0}, 28d {:.0}, ratio {:.2}",
                snapshot.load7, snapshot.load28, snapshot.acute_chronic_ratio
            );
            let scores = [
                ("training load", snapshot.training_load_score),
                ("fatigue", snapshot.fatigue_score),
                ("injury risk", snapshot.injury_risk_score),
                ("consistency", snapshot.consistency_score),
                ("progress", snapshot.progress_score),
            ];
            for (name, score) in scores {
                println!("- {name}: {score} ({})", metrics::score_label(score));
            }
        }
        Commands::Report {
            activities,
            plan,
            as_of,
            out,
        } => {
            let now = as_of.unwrap_or_else(Utc::now);
            let records = input::read_activities(&activities)?;
            let weeks = match plan {
                Some(path) => parse_plan_text(&input::read_plan(&path)?).weeks,
                None => Vec::new(),
            };

            let snapshot = compute_coach_metrics(&records, now);
            let elevation = ElevationGain::compute(&records, now);
            let report = report::build_report(&weeks, &snapshot, &records, &elevation);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
