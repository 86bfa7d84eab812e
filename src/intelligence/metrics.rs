// ABOUTME: Single-pass metrics aggregation over a goal snapshot
// ABOUTME: Produces the counters the risk scorer and insight generator consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! Metrics aggregation for goal health analysis.
//!
//! Walks the Goal -> `KeyResult` -> Project -> Task -> `CheckIn` tree exactly
//! once. All counters are commutative sums, so traversal order never changes
//! the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Goal, Morale, TaskStatus};

/// Raw counters tallied from a goal snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalMetrics {
    /// Every task in the snapshot
    pub total_tasks: u32,
    /// Tasks with status DONE
    pub completed_tasks: u32,
    /// Unfinished tasks whose due date is strictly in the past
    pub overdue_tasks: u32,
    /// Tasks flagged STUCK
    pub stuck_tasks: u32,
    /// Overdue tasks with HIGH or URGENT priority
    pub critical_tasks: u32,
    /// Recent check-ins considered (at most the window per task)
    pub recent_check_ins: u32,
    /// Recent check-ins reporting stressed morale
    pub negative_morale_count: u32,
    /// Recent check-ins with an explicit blocker
    pub blocker_count: u32,
}

/// Aggregation result: the counters plus the average key-result progress
///
/// The average progress rides beside the counters rather than inside them:
/// it feeds the narrative prompt but is not part of the report's wire tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalAggregate {
    /// Counter tally
    pub metrics: GoalMetrics,
    /// Average of per-key-result progress percentages; 0 without key results
    pub avg_key_result_progress: f64,
}

/// Aggregate a goal snapshot into metrics in a single deterministic pass
#[must_use]
pub fn aggregate_goal(goal: &Goal, now: DateTime<Utc>) -> GoalAggregate {
    let mut metrics = GoalMetrics::default();
    let mut progress_sum = 0.0;

    for key_result in &goal.key_results {
        progress_sum += key_result.progress_percent();

        for project in &key_result.projects {
            for task in &project.tasks {
                metrics.total_tasks += 1;

                if task.status == TaskStatus::Done {
                    metrics.completed_tasks += 1;
                } else {
                    if task.status == TaskStatus::Stuck {
                        metrics.stuck_tasks += 1;
                    }

                    if task.is_overdue(now) {
                        metrics.overdue_tasks += 1;
                        if task.priority.is_critical() {
                            metrics.critical_tasks += 1;
                        }
                    }
                }

                for check_in in task.recent_check_ins() {
                    metrics.recent_check_ins += 1;
                    if check_in.morale == Morale::Estresado {
                        metrics.negative_morale_count += 1;
                    }
                    if check_in.has_blocker() {
                        metrics.blocker_count += 1;
                    }
                }
            }
        }
    }

    let avg_key_result_progress = if goal.key_results.is_empty() {
        0.0
    } else {
        progress_sum / goal.key_results.len() as f64
    };

    GoalAggregate {
        metrics,
        avg_key_result_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckIn, KeyResult, Project, Task, TaskPriority};
    use chrono::Duration;
    use uuid::Uuid;

    fn task(status: TaskStatus, priority: TaskPriority, due: Option<DateTime<Utc>>) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "t".into(),
            status,
            priority,
            due_date: due,
            check_ins: vec![],
        }
    }

    fn goal_of(tasks: Vec<Task>) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            title: "Objetivo".into(),
            key_results: vec![KeyResult {
                id: Uuid::new_v4(),
                title: "KR".into(),
                target_value: 10.0,
                current_value: 5.0,
                projects: vec![Project {
                    id: Uuid::new_v4(),
                    name: "Proyecto".into(),
                    tasks,
                }],
            }],
        }
    }

    #[test]
    fn empty_goal_aggregates_to_zeroes() {
        let goal = Goal {
            id: Uuid::new_v4(),
            title: "Vacío".into(),
            key_results: vec![],
        };
        let agg = aggregate_goal(&goal, Utc::now());
        assert_eq!(agg.metrics, GoalMetrics::default());
        assert!((agg.avg_key_result_progress - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn done_tasks_never_count_as_overdue_or_stuck() {
        let now = Utc::now();
        let past = Some(now - Duration::days(2));
        let goal = goal_of(vec![
            task(TaskStatus::Done, TaskPriority::Urgent, past),
            task(TaskStatus::Todo, TaskPriority::Low, past),
        ]);

        let m = aggregate_goal(&goal, now).metrics;
        assert_eq!(m.total_tasks, 2);
        assert_eq!(m.completed_tasks, 1);
        assert_eq!(m.overdue_tasks, 1);
        assert_eq!(m.critical_tasks, 0);
        assert_eq!(m.stuck_tasks, 0);
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let now = Utc::now();
        let goal = goal_of(vec![task(TaskStatus::Todo, TaskPriority::High, Some(now))]);
        let m = aggregate_goal(&goal, now).metrics;
        assert_eq!(m.overdue_tasks, 0);
    }

    #[test]
    fn stuck_overdue_urgent_task_counts_in_all_three() {
        let now = Utc::now();
        let goal = goal_of(vec![task(
            TaskStatus::Stuck,
            TaskPriority::Urgent,
            Some(now - Duration::hours(1)),
        )]);

        let m = aggregate_goal(&goal, now).metrics;
        assert_eq!(m.stuck_tasks, 1);
        assert_eq!(m.overdue_tasks, 1);
        assert_eq!(m.critical_tasks, 1);
    }

    #[test]
    fn check_in_signals_come_from_recent_window_only() {
        let now = Utc::now();
        let mut t = task(TaskStatus::InProgress, TaskPriority::Medium, None);
        // Four check-ins; the oldest (stressed, with blocker) must fall outside
        // the 3-entry window.
        t.check_ins = vec![
            CheckIn {
                id: Uuid::new_v4(),
                morale: Morale::Estresado,
                blockers: Some("bloqueado".into()),
                created_at: now - Duration::days(10),
            },
            CheckIn {
                id: Uuid::new_v4(),
                morale: Morale::Normal,
                blockers: None,
                created_at: now - Duration::days(3),
            },
            CheckIn {
                id: Uuid::new_v4(),
                morale: Morale::Excelente,
                blockers: None,
                created_at: now - Duration::days(2),
            },
            CheckIn {
                id: Uuid::new_v4(),
                morale: Morale::Estresado,
                blockers: Some("Esperando diseño".into()),
                created_at: now - Duration::days(1),
            },
        ];
        let goal = goal_of(vec![t]);

        let m = aggregate_goal(&goal, now).metrics;
        assert_eq!(m.recent_check_ins, 3);
        assert_eq!(m.negative_morale_count, 1);
        assert_eq!(m.blocker_count, 1);
    }

    #[test]
    fn average_progress_ignores_zero_targets() {
        let mut goal = goal_of(vec![]);
        goal.key_results.push(KeyResult {
            id: Uuid::new_v4(),
            title: "KR2".into(),
            target_value: 0.0,
            current_value: 99.0,
            projects: vec![],
        });
        // KR1 is at 50%, KR2 contributes 0% => average 25%
        let agg = aggregate_goal(&goal, Utc::now());
        assert!((agg.avg_key_result_progress - 25.0).abs() < 1e-9);
    }
}
