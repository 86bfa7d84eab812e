// ABOUTME: Main library entry point for the Pulso OKR intelligence engine
// ABOUTME: Goal health scoring, workspace reports and reminder selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

#![deny(unsafe_code)]

//! # Pulso OKR Engine
//!
//! The analytics engine of the Pulso project-management platform. Given a
//! hydrated goal snapshot (Goal -> Key Results -> Projects -> Tasks ->
//! Check-ins), it computes a 0-100 health score, a three-level status
//! classification and an ordered list of human-readable insights, optionally
//! decorated with an LLM-written narrative.
//!
//! ## Features
//!
//! - **Goal health scoring**: single-pass aggregation, capped risk factors,
//!   deterministic classification
//! - **Insight generation**: fixed-order, reproducible messages for the UI
//! - **Narrative summaries**: pluggable LLM providers (Gemini built in) that
//!   can fail without ever affecting the numeric result
//! - **Workspace reports**: status breakdown, workload ranking and goal
//!   progress summaries for the dashboard
//! - **Reminder selection**: due-date windows for push notifications
//!
//! ## Example
//!
//! ```rust,no_run
//! use pulso_okr_engine::intelligence::GoalHealthAnalyzer;
//! use pulso_okr_engine::models::Goal;
//!
//! fn main() -> Result<(), pulso_okr_engine::errors::AppError> {
//!     let goal = Goal::from_json_file("snapshot.json")?;
//!     let report = GoalHealthAnalyzer::new().evaluate_now(&goal);
//!     println!("{} -> {} ({})", goal.title, report.score, report.health);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Models**: the read-only snapshot tree handed in by the platform
//! - **Intelligence**: aggregation, scoring, insights and the analyzer facade
//! - **LLM**: provider SPI and the Gemini implementation for narratives
//! - **Reports/Reminders**: dashboard aggregations and notification selection
//! - **Config**: environment-only configuration management

/// Environment-driven configuration management
pub mod config;

/// Application constants and tuning values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Analytics and intelligence for goal health analysis
pub mod intelligence;

/// LLM provider abstraction for narrative generation
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for goal snapshots
pub mod models;

/// Due-date reminder selection
pub mod reminders;

/// Workspace-level reporting aggregations
pub mod reports;

/// Test utilities for creating consistent snapshot fixtures
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
