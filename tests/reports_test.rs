// ABOUTME: Integration tests for workspace reports and reminder selection
// ABOUTME: Covers status breakdown, workload ranking, progress summaries and windows
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pulso OKR Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use uuid::Uuid;

use pulso_okr_engine::models::{Goal, Member, TaskPriority, TaskStatus};
use pulso_okr_engine::reminders::due_for_reminder;
use pulso_okr_engine::reports::{
    goal_progress_summaries, task_status_breakdown, workload_ranking, ProgressHealth,
};
use pulso_okr_engine::test_utils::{goal_with_tasks, key_result_with, task_with};

#[test]
fn status_breakdown_covers_a_mixed_board() {
    let tasks = vec![
        task_with(TaskStatus::Todo, TaskPriority::Low, None),
        task_with(TaskStatus::Todo, TaskPriority::Low, None),
        task_with(TaskStatus::InProgress, TaskPriority::Medium, None),
        task_with(TaskStatus::Done, TaskPriority::High, None),
        task_with(TaskStatus::Stuck, TaskPriority::Urgent, None),
    ];

    let entries = task_status_breakdown(&tasks);
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].label, "Por Hacer");
    assert_eq!(entries[0].count, 2);
    assert_eq!(entries[1].count, 1);
    assert_eq!(entries[2].count, 1);
    assert_eq!(entries[3].count, 1);
}

#[test]
fn workload_ranking_uses_email_prefix_without_profile_name() {
    let members = vec![Member {
        id: Uuid::new_v4(),
        name: None,
        email: "diego@pulso.app".into(),
        tasks: vec![task_with(TaskStatus::InProgress, TaskPriority::Low, None)],
    }];

    let ranking = workload_ranking(&members);
    assert_eq!(ranking[0].name, "diego");
    assert_eq!(ranking[0].active, 1);
    assert_eq!(ranking[0].total, 1);
}

#[test]
fn progress_summaries_classify_each_band() {
    let goal_at = |current: f64| Goal {
        id: Uuid::new_v4(),
        title: "g".into(),
        key_results: vec![key_result_with(current, 100.0)],
    };

    let goals = vec![goal_at(10.0), goal_at(29.0), goal_at(30.0), goal_at(70.0)];
    let summaries = goal_progress_summaries(&goals);

    assert_eq!(summaries[0].health, ProgressHealth::AtRisk);
    assert_eq!(summaries[1].health, ProgressHealth::AtRisk);
    assert_eq!(summaries[2].health, ProgressHealth::NeedsAttention);
    assert_eq!(summaries[3].health, ProgressHealth::OnTrack);
}

#[test]
fn reminders_and_health_read_the_same_snapshot() {
    // One flow: the snapshot feeding a health report also feeds reminders.
    let now = Utc::now();
    let goal = goal_with_tasks(vec![
        task_with(TaskStatus::Todo, TaskPriority::High, Some(now + Duration::hours(2))),
        task_with(TaskStatus::Done, TaskPriority::High, Some(now + Duration::hours(2))),
        task_with(TaskStatus::Todo, TaskPriority::Low, Some(now + Duration::days(10))),
    ]);

    let reminders = due_for_reminder(goal.tasks(), now);
    assert_eq!(reminders.len(), 1);
    assert!(reminders[0].title.contains("hoy") || reminders[0].title.contains("mañana"));
}
