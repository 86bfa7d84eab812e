// ABOUTME: Prompt templates for LLM-backed narrative generation
// ABOUTME: Builds the Spanish analyst prompt from a computed health report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! Prompt construction for the goal-health narrative.
//!
//! The prompt is written in Spanish to match the platform's user base and the
//! insight texts embedded in it. It receives only already-computed values, so
//! narrative generation can never influence the scoring result.

use std::fmt::Write as _;

use crate::intelligence::{GoalMetrics, HealthInsight, OkrHealth};

/// Build the narrative prompt for a computed health report
#[must_use]
pub fn narrative_prompt(
    goal_title: &str,
    health: OkrHealth,
    score: u8,
    metrics: &GoalMetrics,
    avg_key_result_progress: f64,
    insights: &[HealthInsight],
) -> String {
    let mut anomalies = String::new();
    if insights.is_empty() {
        anomalies.push_str("- Ninguna");
    } else {
        for insight in insights {
            let _ = writeln!(anomalies, "- {}", insight.message);
        }
    }

    format!(
        "Eres un analista ágil de proyectos. Analiza el siguiente reporte métrico de un \
objetivo (OKR) llamado \"{goal_title}\" y escribe un párrafo corto (máximo 3 oraciones) \
con un diagnóstico motivador pero objetivo para el equipo.\n\
\n\
Métricas actuales:\n\
- Salud calculada: {health} (Score: {score}/100)\n\
- Tareas completadas: {completed} de {total}\n\
- Tareas vencidas: {overdue} ({critical} críticas)\n\
- Tareas estancadas: {stuck}\n\
- Check-ins estresados: {stressed}\n\
- Bloqueos reportados: {blockers}\n\
- Progreso promedio de resultados clave: {progress:.0}%\n\
\n\
Las anomalías detectadas por el sistema fueron:\n\
{anomalies}\n\
Escribe tu análisis directamente, sin saludos ni introducciones genéricas.",
        completed = metrics.completed_tasks,
        total = metrics.total_tasks,
        overdue = metrics.overdue_tasks,
        critical = metrics.critical_tasks,
        stuck = metrics.stuck_tasks,
        stressed = metrics.negative_morale_count,
        blockers = metrics.blocker_count,
        progress = avg_key_result_progress,
        anomalies = anomalies.trim_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::InsightKind;

    #[test]
    fn prompt_embeds_metrics_and_anomalies() {
        let metrics = GoalMetrics {
            total_tasks: 4,
            completed_tasks: 1,
            overdue_tasks: 2,
            stuck_tasks: 0,
            critical_tasks: 1,
            recent_check_ins: 3,
            negative_morale_count: 1,
            blocker_count: 0,
        };
        let insights = vec![HealthInsight {
            kind: InsightKind::Warning,
            message: "Hay 2 tarea(s) vencida(s) afectando este objetivo.".into(),
        }];

        let prompt = narrative_prompt(
            "Lanzar la app móvil",
            OkrHealth::AtRisk,
            65,
            &metrics,
            42.0,
            &insights,
        );

        assert!(prompt.contains("\"Lanzar la app móvil\""));
        assert!(prompt.contains("AT_RISK (Score: 65/100)"));
        assert!(prompt.contains("Tareas completadas: 1 de 4"));
        assert!(prompt.contains("- Hay 2 tarea(s) vencida(s)"));
        assert!(prompt.contains("42%"));
    }

    #[test]
    fn prompt_marks_absent_anomalies() {
        let metrics = GoalMetrics::default();
        let prompt = narrative_prompt("Q3", OkrHealth::OnTrack, 100, &metrics, 0.0, &[]);
        assert!(prompt.contains("- Ninguna"));
    }
}
