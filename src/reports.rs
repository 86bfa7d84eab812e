// ABOUTME: Workspace-level reporting over snapshot slices
// ABOUTME: Status breakdown, member workload ranking and goal progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # Workspace Reports
//!
//! Pure aggregations feeding the platform's dashboard charts. The persistence
//! layer hands in the already-loaded slices; rendering stays on the frontend.
//! Each function is deterministic and allocation-light.

use serde::{Deserialize, Serialize};

use crate::constants::{limits, progress};
use crate::models::{Goal, Member, Task, TaskStatus};

/// Fixed status order used by the breakdown so chart colors stay stable
const STATUS_ORDER: [TaskStatus; 4] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Done,
    TaskStatus::Stuck,
];

/// One slice of the task status donut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdownEntry {
    /// Status this slice counts
    pub status: TaskStatus,
    /// Spanish display label
    pub label: String,
    /// Number of tasks in this status
    pub count: u32,
}

/// Tally tasks per status
///
/// Always returns all four statuses in a fixed order, zero-filled, so an
/// empty workspace still renders a complete (if empty) chart.
#[must_use]
pub fn task_status_breakdown<'a, I>(tasks: I) -> Vec<StatusBreakdownEntry>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut counts = [0_u32; 4];
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts[0] += 1,
            TaskStatus::InProgress => counts[1] += 1,
            TaskStatus::Done => counts[2] += 1,
            TaskStatus::Stuck => counts[3] += 1,
        }
    }

    STATUS_ORDER
        .iter()
        .zip(counts)
        .map(|(status, count)| StatusBreakdownEntry {
            status: *status,
            label: status.display_label().to_owned(),
            count,
        })
        .collect()
}

/// A member's standing in the workload ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWorkload {
    /// Display name (profile name or email local part)
    pub name: String,
    /// Unfinished tasks (TODO, `IN_PROGRESS`, STUCK)
    pub active: u32,
    /// Finished tasks
    pub completed: u32,
    /// All assigned tasks
    pub total: u32,
}

/// Rank members by active workload, busiest first
///
/// Members without any assigned task are dropped from the ranking.
#[must_use]
pub fn workload_ranking(members: &[Member]) -> Vec<MemberWorkload> {
    let mut ranking: Vec<MemberWorkload> = members
        .iter()
        .map(|member| {
            let completed = member
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Done)
                .count() as u32;
            let total = member.tasks.len() as u32;
            MemberWorkload {
                name: member.display_name().to_owned(),
                active: total - completed,
                completed,
                total,
            }
        })
        .filter(|w| w.total > 0)
        .collect();

    ranking.sort_by(|a, b| b.active.cmp(&a.active));
    ranking
}

/// Progress-based classification used by the goal summary widget
///
/// Distinct from the scorer's risk-based [`crate::intelligence::OkrHealth`]:
/// this one only looks at how far key results have advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressHealth {
    /// No key results to measure
    Unknown,
    /// Average progress below 30%
    AtRisk,
    /// Average progress below 70%
    NeedsAttention,
    /// Average progress at 70% or above
    OnTrack,
}

/// One row of the goal progress summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressSummary {
    /// Goal identifier
    pub id: uuid::Uuid,
    /// Goal title
    pub title: String,
    /// Average key-result progress, each capped at 100%, rounded
    pub progress: u8,
    /// Progress-based classification
    pub health: ProgressHealth,
}

/// Summarize goal progress for the dashboard widget
///
/// Covers at most the report limit of goals; callers pass goals ordered
/// newest first, matching the platform's listing.
#[must_use]
pub fn goal_progress_summaries(goals: &[Goal]) -> Vec<GoalProgressSummary> {
    goals
        .iter()
        .take(limits::REPORT_GOAL_LIMIT)
        .map(|goal| {
            if goal.key_results.is_empty() {
                return GoalProgressSummary {
                    id: goal.id,
                    title: goal.title.clone(),
                    progress: 0,
                    health: ProgressHealth::Unknown,
                };
            }

            let capped_sum: f64 = goal
                .key_results
                .iter()
                .map(|kr| kr.progress_percent().min(progress::KR_PROGRESS_CAP))
                .sum();
            let avg = capped_sum / goal.key_results.len() as f64;

            let health = if avg < progress::AT_RISK_BELOW {
                ProgressHealth::AtRisk
            } else if avg < progress::NEEDS_ATTENTION_BELOW {
                ProgressHealth::NeedsAttention
            } else {
                ProgressHealth::OnTrack
            };

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = avg.round().clamp(0.0, 100.0) as u8;

            GoalProgressSummary {
                id: goal.id,
                title: goal.title.clone(),
                progress: rounded,
                health,
            }
        })
        .collect()
}
