// ABOUTME: Integration tests for the narrative generation boundary
// ABOUTME: Ensures provider failures never alter the scoring result
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pulso OKR Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serial_test::serial;

use pulso_okr_engine::errors::{AppError, ErrorCode};
use pulso_okr_engine::intelligence::{
    GoalHealthAnalyzer, NARRATIVE_UNAVAILABLE, NARRATIVE_UNCONFIGURED,
};
use pulso_okr_engine::llm::{ChatRequest, ChatResponse, GeminiProvider, LlmProvider};
use pulso_okr_engine::models::{TaskPriority, TaskStatus};
use pulso_okr_engine::test_utils::{goal_with_tasks, task_with};

/// Stub provider that always succeeds with a fixed paragraph
struct EchoProvider;

#[async_trait]
impl LlmProvider for EchoProvider {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn display_name(&self) -> &'static str {
        "Echo"
    }

    fn default_model(&self) -> &str {
        "echo-1"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["echo-1"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Ok(ChatResponse {
            content: format!("Diagnóstico basado en {} mensaje(s).", request.messages.len()),
            model: "echo-1".into(),
            usage: None,
            finish_reason: Some("stop".into()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Stub provider that always fails
struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn display_name(&self) -> &'static str {
        "Failing"
    }

    fn default_model(&self) -> &str {
        "none"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &[]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("stub", "service exploded"))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(false)
    }
}

#[tokio::test]
async fn successful_narrative_is_attached_verbatim() {
    let goal = goal_with_tasks(vec![task_with(TaskStatus::Done, TaskPriority::Low, None)]);
    let analyzer = GoalHealthAnalyzer::new().with_provider(Arc::new(EchoProvider));

    let report = analyzer.evaluate_with_narrative(&goal, Utc::now()).await;

    assert_eq!(
        report.narrative.as_deref(),
        Some("Diagnóstico basado en 1 mensaje(s).")
    );
    assert_eq!(report.score, 100);
}

#[tokio::test]
async fn provider_failure_degrades_to_placeholder_without_touching_scores() {
    let now = Utc::now();
    let goal = goal_with_tasks(vec![
        task_with(TaskStatus::Todo, TaskPriority::Urgent, Some(now - Duration::days(1))),
        task_with(TaskStatus::Done, TaskPriority::Low, None),
    ]);

    let pure = GoalHealthAnalyzer::new().evaluate(&goal, now);
    let failing = GoalHealthAnalyzer::new()
        .with_provider(Arc::new(FailingProvider))
        .evaluate_with_narrative(&goal, now)
        .await;

    assert_eq!(failing.narrative.as_deref(), Some(NARRATIVE_UNAVAILABLE));
    assert_eq!(failing.score, pure.score);
    assert_eq!(failing.health, pure.health);
    assert_eq!(failing.insights, pure.insights);
    assert_eq!(failing.metrics, pure.metrics);
}

#[tokio::test]
async fn missing_provider_uses_the_unconfigured_placeholder() {
    let goal = goal_with_tasks(vec![]);
    let report = GoalHealthAnalyzer::new()
        .evaluate_with_narrative(&goal, Utc::now())
        .await;

    assert_eq!(report.narrative.as_deref(), Some(NARRATIVE_UNCONFIGURED));
    assert_eq!(report.score, 100);
}

#[test]
#[serial]
fn gemini_from_env_requires_the_api_key() {
    let saved = std::env::var("GEMINI_API_KEY").ok();
    std::env::remove_var("GEMINI_API_KEY");

    let result = GeminiProvider::from_env();

    if let Some(value) = saved {
        std::env::set_var("GEMINI_API_KEY", value);
    }

    let error = result.err().unwrap();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
}

#[test]
#[serial]
fn gemini_from_env_reads_the_api_key() {
    let saved = std::env::var("GEMINI_API_KEY").ok();
    std::env::set_var("GEMINI_API_KEY", "test-key");

    let provider = GeminiProvider::from_env().unwrap();
    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.default_model(), "gemini-2.5-flash");

    match saved {
        Some(value) => std::env::set_var("GEMINI_API_KEY", value),
        None => std::env::remove_var("GEMINI_API_KEY"),
    }
}
