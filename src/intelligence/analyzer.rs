// ABOUTME: Goal health analyzer combining aggregation, scoring and insights
// ABOUTME: Optionally asks an injected LLM provider for a narrative summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! The goal health analyzer.
//!
//! [`GoalHealthAnalyzer::evaluate`] is a pure function of the snapshot and the
//! evaluation instant. The narrative path wraps it: one attempt against the
//! injected provider, no retry, and any failure degrades to a placeholder
//! string without touching score, health or insights.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::NarrativeConfig;
use crate::intelligence::{
    aggregate_goal, classify_score, generate_insights, health_score, GoalMetrics, HealthInsight,
    OkrHealth, RiskBreakdown,
};
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;
use crate::models::Goal;

/// Placeholder used when no narrative provider is configured
pub const NARRATIVE_UNCONFIGURED: &str =
    "No se configuró la llave de IA para generar el resumen descriptivo.";

/// Placeholder used when narrative generation fails at runtime
pub const NARRATIVE_UNAVAILABLE: &str =
    "El análisis avanzado no está disponible en este momento.";

/// The computed health report for a goal
///
/// Ephemeral: computed on demand for a single request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Status band derived from the score
    pub health: OkrHealth,
    /// Health score, 0-100
    pub score: u8,
    /// Optional narrative paragraph (placeholder text when generation failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// Ordered insight list
    pub insights: Vec<HealthInsight>,
    /// Raw counter tally the report was derived from
    pub metrics: GoalMetrics,
}

/// Analyzer evaluating goal snapshots into health reports
pub struct GoalHealthAnalyzer {
    provider: Option<Arc<dyn LlmProvider>>,
    narrative: NarrativeConfig,
}

impl Default for GoalHealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalHealthAnalyzer {
    /// Create an analyzer without a narrative provider
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            narrative: NarrativeConfig::default(),
        }
    }

    /// Attach a narrative provider
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Override the narrative request settings
    #[must_use]
    pub fn with_narrative_config(mut self, narrative: NarrativeConfig) -> Self {
        self.narrative = narrative;
        self
    }

    /// Evaluate a goal snapshot at the given instant
    ///
    /// Pure: no I/O, no shared state. The narrative field is left empty.
    #[must_use]
    pub fn evaluate(&self, goal: &Goal, now: DateTime<Utc>) -> HealthReport {
        self.build_report(goal, now).0
    }

    /// Evaluate a goal snapshot at the current instant
    #[must_use]
    pub fn evaluate_now(&self, goal: &Goal) -> HealthReport {
        self.evaluate(goal, Utc::now())
    }

    /// Evaluate a goal snapshot and attach a narrative summary
    ///
    /// The provider is called once. Missing configuration or a failed call
    /// substitute a placeholder; the scoring result is returned regardless.
    pub async fn evaluate_with_narrative(
        &self,
        goal: &Goal,
        now: DateTime<Utc>,
    ) -> HealthReport {
        let (mut report, avg_progress) = self.build_report(goal, now);
        report.narrative = Some(self.generate_narrative(goal, &report, avg_progress).await);
        report
    }

    /// Aggregate, score and annotate a snapshot
    fn build_report(&self, goal: &Goal, now: DateTime<Utc>) -> (HealthReport, f64) {
        let aggregate = aggregate_goal(goal, now);
        let risk = RiskBreakdown::from_metrics(&aggregate.metrics);
        let insights = generate_insights(&aggregate.metrics, &risk);

        let score = health_score(risk.total());
        let health = classify_score(score);

        debug!(
            goal.id = %goal.id,
            risk.total = risk.total(),
            health.score = score,
            "Goal snapshot scored"
        );

        let report = HealthReport {
            health,
            score,
            narrative: None,
            insights,
            metrics: aggregate.metrics,
        };
        (report, aggregate.avg_key_result_progress)
    }

    /// Run the single narrative attempt, degrading to placeholders
    async fn generate_narrative(
        &self,
        goal: &Goal,
        report: &HealthReport,
        avg_progress: f64,
    ) -> String {
        let Some(provider) = self.provider.as_ref() else {
            warn!(goal.id = %goal.id, "No narrative provider configured, using placeholder");
            return NARRATIVE_UNCONFIGURED.to_owned();
        };

        let prompt = prompts::narrative_prompt(
            &goal.title,
            report.health,
            report.score,
            &report.metrics,
            avg_progress,
            &report.insights,
        );

        let mut request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        if let Some(model) = &self.narrative.model {
            request = request.with_model(model.clone());
        }
        if let Some(temperature) = self.narrative.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.narrative.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        match provider.complete(&request).await {
            Ok(response) => {
                AppLogger::log_narrative_outcome(&goal.id.to_string(), provider.name(), true);
                response.content
            }
            Err(error) => {
                warn!(goal.id = %goal.id, error = %error, "Narrative generation failed");
                AppLogger::log_narrative_outcome(&goal.id.to_string(), provider.name(), false);
                NARRATIVE_UNAVAILABLE.to_owned()
            }
        }
    }
}
