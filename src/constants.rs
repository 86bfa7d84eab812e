// ABOUTME: System-wide constants and tuning values for the Pulso OKR engine
// ABOUTME: Risk weights, caps, classification thresholds and report limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # Constants Module
//!
//! Tuning values for health scoring, progress classification and reporting.
//! Grouped by concern so call sites read as `risk_weights::OVERDUE_TASK`.

/// Per-occurrence risk points for each risk factor
pub mod risk_weights {
    /// Points per overdue task
    pub const OVERDUE_TASK: u32 = 5;
    /// Points per overdue task with HIGH or URGENT priority
    pub const CRITICAL_TASK: u32 = 15;
    /// Points per task marked STUCK
    pub const STUCK_TASK: u32 = 10;
    /// Points per recent check-in reporting stressed morale
    pub const STRESSED_CHECKIN: u32 = 10;
    /// Points per recent check-in with an explicit blocker
    pub const REPORTED_BLOCKER: u32 = 5;
}

/// Upper bound each risk factor can contribute, applied before summation
pub mod risk_caps {
    /// Cap for the overdue-task contribution
    pub const OVERDUE_TASKS: u32 = 30;
    /// Cap for the critical-overdue contribution
    pub const CRITICAL_TASKS: u32 = 40;
    /// Cap for the stuck-task contribution
    pub const STUCK_TASKS: u32 = 25;
    /// Cap for the stressed-morale contribution
    pub const STRESSED_CHECKINS: u32 = 20;
    /// Cap for the reported-blocker contribution
    pub const REPORTED_BLOCKERS: u32 = 20;
}

/// Health classification boundaries over the 0-100 score
pub mod health_thresholds {
    /// Scores below this are OFF_TRACK
    pub const OFF_TRACK_BELOW: u8 = 50;
    /// Scores at or above this are ON_TRACK
    pub const ON_TRACK_FROM: u8 = 80;
    /// Completion percentage under which the low-progress advisory may fire
    pub const LOW_COMPLETION_PERCENT: f64 = 20.0;
    /// Minimum accumulated risk for the low-progress advisory to fire
    pub const LOW_COMPLETION_MIN_RISK: u32 = 10;
}

/// Progress-based goal classification used by the workspace reports
pub mod progress {
    /// Per-key-result progress is capped at this percentage in summaries
    pub const KR_PROGRESS_CAP: f64 = 100.0;
    /// Average progress below this is AT_RISK
    pub const AT_RISK_BELOW: f64 = 30.0;
    /// Average progress below this (and at or above `AT_RISK_BELOW`) is `NEEDS_ATTENTION`
    pub const NEEDS_ATTENTION_BELOW: f64 = 70.0;
}

/// Bounds applied when assembling reports
pub mod limits {
    /// How many of a task's most recent check-ins feed the morale signals
    pub const RECENT_CHECKIN_WINDOW: usize = 3;
    /// How many goals the progress summary report covers
    pub const REPORT_GOAL_LIMIT: usize = 10;
}

/// Service identity for logging and diagnostics
pub mod service {
    /// Structured-logging service name
    pub const SERVICE_NAME: &str = "pulso-okr-engine";
}
