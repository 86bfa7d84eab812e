// ABOUTME: Insight generation for goal health reports
// ABOUTME: Maps aggregated metrics and risk to an ordered list of messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! Insight generation for goal health reports.
//!
//! Insights are produced by a pure function evaluating a fixed rule order.
//! The order is a public contract: downstream snapshot tests and the UI rely
//! on it, so new rules append rather than reorder.

use serde::{Deserialize, Serialize};

use crate::constants::health_thresholds;
use crate::intelligence::{GoalMetrics, RiskBreakdown};

/// Severity tag of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    /// Attention recommended
    Warning,
    /// Immediate action required
    Danger,
    /// Informational signal
    Info,
    /// Positive reinforcement
    Success,
}

/// A single human-readable insight in a health report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsight {
    /// Severity tag
    pub kind: InsightKind,
    /// Message shown to the team (Spanish, matching the platform UI)
    pub message: String,
}

impl HealthInsight {
    fn new(kind: InsightKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Generate the ordered insight list for aggregated metrics
///
/// Evaluation order: overdue, critical, stuck, morale, blockers, low
/// progress, positive momentum. The SUCCESS insight can only appear when the
/// accumulated risk is exactly zero, so it never coexists with any
/// risk-triggered message. A goal with no tasks and no risk produces an empty
/// list.
#[must_use]
pub fn generate_insights(metrics: &GoalMetrics, risk: &RiskBreakdown) -> Vec<HealthInsight> {
    let mut insights = Vec::new();
    let risk_score = risk.total();

    if metrics.overdue_tasks > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Warning,
            format!(
                "Hay {} tarea(s) vencida(s) afectando este objetivo.",
                metrics.overdue_tasks
            ),
        ));
    }

    if metrics.critical_tasks > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Danger,
            format!(
                "¡Alerta! {} tarea(s) CRÍTICAS están retrasadas.",
                metrics.critical_tasks
            ),
        ));
    }

    if metrics.stuck_tasks > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Warning,
            format!(
                "El equipo ha marcado {} tarea(s) como detenidas (STUCK).",
                metrics.stuck_tasks
            ),
        ));
    }

    if metrics.negative_morale_count > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Info,
            format!(
                "Se detectó alta tensión. {} reporte(s) reciente(s) indican estado de ánimo 'Estresado'.",
                metrics.negative_morale_count
            ),
        ));
    }

    if metrics.blocker_count > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Warning,
            format!(
                "Se han reportado obstáculos explícitos en {} check-in(s) reciente(s).",
                metrics.blocker_count
            ),
        ));
    }

    // Low completion despite having tasks, once risk has already accumulated
    let completion_percent = if metrics.total_tasks > 0 {
        f64::from(metrics.completed_tasks) / f64::from(metrics.total_tasks) * 100.0
    } else {
        0.0
    };
    if metrics.total_tasks > 0
        && completion_percent < health_thresholds::LOW_COMPLETION_PERCENT
        && risk_score > health_thresholds::LOW_COMPLETION_MIN_RISK
    {
        insights.push(HealthInsight::new(
            InsightKind::Info,
            format!(
                "Progreso de tareas bajo ({}%), considera revisar la viabilidad de las fechas.",
                completion_percent.round()
            ),
        ));
    }

    if risk_score == 0 && metrics.completed_tasks > 0 {
        insights.push(HealthInsight::new(
            InsightKind::Success,
            "¡Excelente inercia! Las tareas fluyen sin bloqueos y dentro de las fechas límite."
                .to_owned(),
        ));
    }

    insights
}
