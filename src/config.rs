// ABOUTME: Environment-driven configuration for the Pulso OKR engine
// ABOUTME: Aggregates logging and narrative settings into one startup struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! # Configuration
//!
//! Environment-only configuration. There is no config file: every knob is an
//! environment variable, read once at startup.
//!
//! | Variable | Purpose |
//! |---|---|
//! | `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT` | logging (see [`crate::logging`]) |
//! | `GEMINI_API_KEY` | narrative provider credential |
//! | `PULSO_NARRATIVE_MODEL` | override the provider's default model |
//! | `PULSO_NARRATIVE_TEMPERATURE` | sampling temperature for the narrative |
//! | `PULSO_NARRATIVE_MAX_TOKENS` | output budget for the narrative |

use std::env;

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Settings applied to narrative chat requests
#[derive(Debug, Clone, Default)]
pub struct NarrativeConfig {
    /// Model override; the provider's default is used when unset
    pub model: Option<String>,
    /// Sampling temperature override
    pub temperature: Option<f32>,
    /// Output token budget override
    pub max_tokens: Option<u32>,
}

impl NarrativeConfig {
    /// Read narrative settings from the environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a set variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let temperature = match env::var("PULSO_NARRATIVE_TEMPERATURE") {
            Ok(raw) => Some(raw.parse::<f32>().map_err(|e| {
                AppError::config(format!("PULSO_NARRATIVE_TEMPERATURE is not a number: {e}"))
            })?),
            Err(_) => None,
        };

        let max_tokens = match env::var("PULSO_NARRATIVE_MAX_TOKENS") {
            Ok(raw) => Some(raw.parse::<u32>().map_err(|e| {
                AppError::config(format!("PULSO_NARRATIVE_MAX_TOKENS is not an integer: {e}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            model: env::var("PULSO_NARRATIVE_MODEL").ok(),
            temperature,
            max_tokens,
        })
    }
}

/// Engine configuration assembled at startup
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Narrative request settings
    pub narrative: NarrativeConfig,
}

impl EngineConfig {
    /// Load the full engine configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a set variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            logging: LoggingConfig::from_env(),
            narrative: NarrativeConfig::from_env()?,
        })
    }
}
