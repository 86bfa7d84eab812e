// ABOUTME: Test utilities for creating consistent snapshot fixtures
// ABOUTME: Builders for goals, tasks and check-ins used across the test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! Helpers for constructing goal snapshots in tests.
//!
//! Available to integration tests (and downstream crates) via the `testing`
//! feature. Fixtures default to Spanish titles matching the platform's data.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{CheckIn, Goal, KeyResult, Morale, Project, Task, TaskPriority, TaskStatus};

/// Build a task with the given status, priority and due date
#[must_use]
pub fn task_with(
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: "Tarea de prueba".into(),
        status,
        priority,
        due_date,
        check_ins: vec![],
    }
}

/// Build a check-in with the given morale and blockers
#[must_use]
pub fn check_in_with(
    morale: Morale,
    blockers: Option<&str>,
    created_at: DateTime<Utc>,
) -> CheckIn {
    CheckIn {
        id: Uuid::new_v4(),
        morale,
        blockers: blockers.map(ToOwned::to_owned),
        created_at,
    }
}

/// Build a key result at the given completion
#[must_use]
pub fn key_result_with(current_value: f64, target_value: f64) -> KeyResult {
    KeyResult {
        id: Uuid::new_v4(),
        title: "Resultado clave de prueba".into(),
        target_value,
        current_value,
        projects: vec![],
    }
}

/// Build a goal holding the given tasks under a single key result and project
#[must_use]
pub fn goal_with_tasks(tasks: Vec<Task>) -> Goal {
    let mut key_result = key_result_with(40.0, 100.0);
    key_result.projects = vec![Project {
        id: Uuid::new_v4(),
        name: "Proyecto de prueba".into(),
        tasks,
    }];

    Goal {
        id: Uuid::new_v4(),
        title: "Objetivo de prueba".into(),
        key_results: vec![key_result],
    }
}

/// Build a goal with no key results at all
#[must_use]
pub fn empty_goal() -> Goal {
    Goal {
        id: Uuid::new_v4(),
        title: "Objetivo vacío".into(),
        key_results: vec![],
    }
}
