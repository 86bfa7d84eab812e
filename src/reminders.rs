// ABOUTME: Due-date reminder selection for push notifications
// ABOUTME: Picks tasks inside the reminder window and builds notification texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # Reminder Selection
//!
//! Decides which tasks deserve a due-date reminder and what the notification
//! should say. Delivery (web push) is the platform's concern; this module only
//! computes the selection.
//!
//! The window deliberately spans from the start of yesterday through the end
//! of tomorrow so timezone offsets between the server and the user cannot
//! hide a task that is due "today" locally.

use chrono::{DateTime, Days, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Task, TaskStatus};

/// A reminder ready to be handed to the notification sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReminder {
    /// Task the reminder is about
    pub task_id: Uuid,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
}

/// Select the tasks due for a reminder at `now`
///
/// A task qualifies when it is not DONE and its due date falls inside the
/// window `[start of yesterday, end of tomorrow]`. Tasks due by the end of
/// today are announced as "hoy", the rest as "mañana".
#[must_use]
pub fn due_for_reminder<'a, I>(tasks: I, now: DateTime<Utc>) -> Vec<TaskReminder>
where
    I: IntoIterator<Item = &'a Task>,
{
    let today = now.date_naive();
    let window_start = (today - Days::new(1)).and_time(NaiveTime::MIN).and_utc();
    // End of tomorrow: start of the day after tomorrow minus one millisecond
    let window_end =
        (today + Days::new(2)).and_time(NaiveTime::MIN).and_utc() - Duration::milliseconds(1);
    let end_of_today = today.and_time(NaiveTime::MIN).and_utc() + Duration::days(1);

    tasks
        .into_iter()
        .filter(|task| task.status != TaskStatus::Done)
        .filter_map(|task| {
            let due = task.due_date?;
            if due < window_start || due > window_end {
                return None;
            }

            let time_text = if due <= end_of_today { "hoy" } else { "mañana" };
            Some(TaskReminder {
                task_id: task.id,
                title: format!("🚨 Tarea por vencer {time_text}"),
                body: format!("\"{}\" debe entregarse pronto.", task.title),
            })
        })
        .collect()
}
