// ABOUTME: Core data models for the Pulso OKR engine
// ABOUTME: Defines the Goal -> KeyResult -> Project -> Task -> CheckIn snapshot tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # Data Models
//!
//! The read-only goal snapshot evaluated by the intelligence module. The tree
//! is assembled by the platform's persistence layer (an external collaborator)
//! and handed to the engine fully hydrated; nothing here touches a database.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: plain data, no ORM coupling
//! - **Serializable**: wire format mirrors the platform's camelCase JSON
//! - **Type Safe**: status, priority and morale are closed enums

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Workflow status of a task on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Actively being worked on
    InProgress,
    /// Finished
    Done,
    /// Blocked and flagged by the team
    Stuck,
}

impl TaskStatus {
    /// Spanish display label used across the platform's reports
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Todo => "Por Hacer",
            Self::InProgress => "En Curso",
            Self::Done => "Listo",
            Self::Stuck => "Detenido",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let value = match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Stuck => "STUCK",
        };
        write!(f, "{value}")
    }
}

/// Priority assigned to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Lowest urgency
    Low,
    /// Default urgency
    Medium,
    /// Elevated urgency
    High,
    /// Drop-everything urgency
    Urgent,
}

impl TaskPriority {
    /// Whether an overdue task of this priority counts as critical
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

/// Morale reported in a check-in
///
/// Wire values match the platform's database enum, which is Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Morale {
    /// Motivated and energized
    Excelente,
    /// Business as usual
    Normal,
    /// Stressed or frustrated
    Estresado,
}

/// A periodic self-report attached to a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Check-in identifier
    pub id: Uuid,
    /// Reported morale
    pub morale: Morale,
    /// Free-text blockers, if any were reported
    #[serde(default)]
    pub blockers: Option<String>,
    /// When the check-in was created
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    /// Whether this check-in reports an explicit blocker (non-empty after trimming)
    #[must_use]
    pub fn has_blocker(&self) -> bool {
        self.blockers
            .as_deref()
            .is_some_and(|b| !b.trim().is_empty())
    }
}

/// A task on a project board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Workflow status
    pub status: TaskStatus,
    /// Assigned priority
    pub priority: TaskPriority,
    /// Optional due date
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Check-ins attached to this task
    #[serde(default)]
    pub check_ins: Vec<CheckIn>,
}

impl Task {
    /// Whether the task is past its due date at `now` and not yet done
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < now)
    }

    /// The most recent check-ins, newest first, bounded by the engine's window
    ///
    /// Snapshots normally arrive with at most the window's worth of check-ins
    /// already ordered; this re-sorts so counts never depend on input order.
    #[must_use]
    pub fn recent_check_ins(&self) -> Vec<&CheckIn> {
        let mut recent: Vec<&CheckIn> = self.check_ins.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limits::RECENT_CHECKIN_WINDOW);
        recent
    }
}

/// A project grouping tasks under a key result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier
    pub id: Uuid,
    /// Project name
    pub name: String,
    /// Tasks associated with this project
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A measurable key result under a goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    /// Key result identifier
    pub id: Uuid,
    /// Key result title
    pub title: String,
    /// Target value to reach
    pub target_value: f64,
    /// Current measured value
    pub current_value: f64,
    /// Projects contributing to this key result
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl KeyResult {
    /// Progress percentage toward the target
    ///
    /// A target of zero or less contributes 0%, never a division error or NaN.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target_value > 0.0 {
            (self.current_value / self.target_value) * 100.0
        } else {
            0.0
        }
    }
}

/// A strategic goal (OKR) with its full nested snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Goal title
    pub title: String,
    /// Key results under this goal
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

impl Goal {
    /// Iterate every task in the snapshot tree
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.key_results
            .iter()
            .flat_map(|kr| kr.projects.iter())
            .flat_map(|p| p.tasks.iter())
    }

    /// Load a goal snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the file cannot be read and
    /// `SerializationError` when the content is not a valid snapshot.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::not_found("Goal snapshot")
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        Self::from_json(&content)
    }

    /// Decode a goal snapshot from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the content is not a valid snapshot.
    pub fn from_json(content: &str) -> AppResult<Self> {
        serde_json::from_str(content).map_err(AppError::from)
    }
}

/// A workspace member with their assigned tasks, as used by workload reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identifier
    pub id: Uuid,
    /// Display name, when the member set one
    #[serde(default)]
    pub name: Option<String>,
    /// Login email
    pub email: String,
    /// Tasks assigned to this member
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Member {
    /// Name to show in reports: profile name, else the email local part
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}
