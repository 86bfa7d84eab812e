// ABOUTME: CLI for evaluating goal snapshots into health reports
// ABOUTME: Loads a snapshot JSON, runs the analyzer and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # pulso-health
//!
//! Evaluate a goal snapshot from disk:
//!
//! ```bash
//! pulso-health snapshot.json
//! pulso-health snapshot.json --format json
//! pulso-health snapshot.json --narrative          # requires GEMINI_API_KEY
//! pulso-health snapshot.json --at 2025-10-01T00:00:00Z
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use tracing::warn;

use pulso_okr_engine::config::EngineConfig;
use pulso_okr_engine::intelligence::{GoalHealthAnalyzer, HealthReport};
use pulso_okr_engine::llm::GeminiProvider;
use pulso_okr_engine::logging::AppLogger;
use pulso_okr_engine::models::Goal;

/// Output rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Pretty,
    /// Raw JSON report
    Json,
}

/// Evaluate the health of a goal snapshot
#[derive(Debug, Parser)]
#[command(name = "pulso-health", version, about)]
struct Cli {
    /// Path to the goal snapshot JSON file
    snapshot: PathBuf,

    /// Generate the AI narrative summary (requires GEMINI_API_KEY)
    #[arg(long)]
    narrative: bool,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::from_env()?;
    config.logging.init()?;

    let goal = Goal::from_json_file(&cli.snapshot)?;
    let now = cli.at.unwrap_or_else(Utc::now);

    let mut analyzer = GoalHealthAnalyzer::new().with_narrative_config(config.narrative);
    if cli.narrative {
        match GeminiProvider::from_env() {
            Ok(provider) => analyzer = analyzer.with_provider(Arc::new(provider)),
            // Missing credentials degrade to the placeholder narrative
            Err(error) => warn!(error = %error, "Narrative requested without provider credentials"),
        }
    }

    let started = Instant::now();
    let report = if cli.narrative {
        analyzer.evaluate_with_narrative(&goal, now).await
    } else {
        analyzer.evaluate(&goal, now)
    };
    AppLogger::log_health_evaluation(
        &goal.id.to_string(),
        report.score,
        &report.health.to_string(),
        started.elapsed().as_millis().try_into().unwrap_or(u64::MAX),
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Pretty => print_pretty(&goal, &report),
    }

    Ok(())
}

/// Render the report for terminal consumption
fn print_pretty(goal: &Goal, report: &HealthReport) {
    println!("Goal: {}", goal.title);
    println!("Health: {} (score {}/100)", report.health, report.score);
    println!(
        "Tasks: {} total, {} done, {} overdue ({} critical), {} stuck",
        report.metrics.total_tasks,
        report.metrics.completed_tasks,
        report.metrics.overdue_tasks,
        report.metrics.critical_tasks,
        report.metrics.stuck_tasks
    );
    println!(
        "Check-ins: {} recent, {} stressed, {} with blockers",
        report.metrics.recent_check_ins,
        report.metrics.negative_morale_count,
        report.metrics.blocker_count
    );

    if report.insights.is_empty() {
        println!("Insights: none");
    } else {
        println!("Insights:");
        for insight in &report.insights {
            println!("  [{:?}] {}", insight.kind, insight.message);
        }
    }

    if let Some(narrative) = &report.narrative {
        println!("Narrative:");
        println!("  {narrative}");
    }
}
