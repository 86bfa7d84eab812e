// ABOUTME: Risk scoring and health classification for goal snapshots
// ABOUTME: Caps each risk factor, derives the 0-100 score and its status band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulso OKR Intelligence

//! Risk scoring over aggregated goal metrics.
//!
//! Each factor contributes `count x weight`, individually capped before
//! summation. The health score is `100 - risk`, floored at zero, and the
//! classification is a deterministic function of the score.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::constants::{health_thresholds, risk_caps, risk_weights};
use crate::intelligence::GoalMetrics;

/// Three-level health classification of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OkrHealth {
    /// Score >= 80
    OnTrack,
    /// 50 <= score < 80
    AtRisk,
    /// Score < 50
    OffTrack,
}

impl Display for OkrHealth {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let value = match self {
            Self::OnTrack => "ON_TRACK",
            Self::AtRisk => "AT_RISK",
            Self::OffTrack => "OFF_TRACK",
        };
        write!(f, "{value}")
    }
}

/// Capped per-factor risk contributions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    /// Contribution from overdue tasks
    pub overdue: u32,
    /// Contribution from critical (overdue HIGH/URGENT) tasks
    pub critical: u32,
    /// Contribution from stuck tasks
    pub stuck: u32,
    /// Contribution from stressed check-ins
    pub stressed: u32,
    /// Contribution from reported blockers
    pub blockers: u32,
}

impl RiskBreakdown {
    /// Compute the capped contributions from aggregated metrics
    #[must_use]
    pub fn from_metrics(metrics: &GoalMetrics) -> Self {
        Self {
            overdue: capped(
                metrics.overdue_tasks,
                risk_weights::OVERDUE_TASK,
                risk_caps::OVERDUE_TASKS,
            ),
            critical: capped(
                metrics.critical_tasks,
                risk_weights::CRITICAL_TASK,
                risk_caps::CRITICAL_TASKS,
            ),
            stuck: capped(
                metrics.stuck_tasks,
                risk_weights::STUCK_TASK,
                risk_caps::STUCK_TASKS,
            ),
            stressed: capped(
                metrics.negative_morale_count,
                risk_weights::STRESSED_CHECKIN,
                risk_caps::STRESSED_CHECKINS,
            ),
            blockers: capped(
                metrics.blocker_count,
                risk_weights::REPORTED_BLOCKER,
                risk_caps::REPORTED_BLOCKERS,
            ),
        }
    }

    /// Total accumulated risk
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.overdue + self.critical + self.stuck + self.stressed + self.blockers
    }
}

/// One factor's contribution: `count x weight`, bounded by its cap
const fn capped(count: u32, weight: u32, cap: u32) -> u32 {
    let raw = count.saturating_mul(weight);
    if raw > cap {
        cap
    } else {
        raw
    }
}

/// Derive the 0-100 health score from the accumulated risk
#[allow(clippy::cast_possible_truncation)] // Safe: result is bounded to 0..=100
#[must_use]
pub const fn health_score(risk_score: u32) -> u8 {
    100_u32.saturating_sub(risk_score) as u8
}

/// Classify a health score into its status band
#[must_use]
pub const fn classify_score(score: u8) -> OkrHealth {
    if score < health_thresholds::OFF_TRACK_BELOW {
        OkrHealth::OffTrack
    } else if score < health_thresholds::ON_TRACK_FROM {
        OkrHealth::AtRisk
    } else {
        OkrHealth::OnTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_with(
        overdue: u32,
        critical: u32,
        stuck: u32,
        stressed: u32,
        blockers: u32,
    ) -> GoalMetrics {
        GoalMetrics {
            total_tasks: overdue + stuck + 1,
            completed_tasks: 0,
            overdue_tasks: overdue,
            stuck_tasks: stuck,
            critical_tasks: critical,
            recent_check_ins: stressed + blockers,
            negative_morale_count: stressed,
            blocker_count: blockers,
        }
    }

    #[test]
    fn each_factor_is_individually_capped() {
        let breakdown = RiskBreakdown::from_metrics(&metrics_with(10, 10, 10, 10, 10));
        assert_eq!(breakdown.overdue, 30);
        assert_eq!(breakdown.critical, 40);
        assert_eq!(breakdown.stuck, 25);
        assert_eq!(breakdown.stressed, 20);
        assert_eq!(breakdown.blockers, 20);
        assert_eq!(breakdown.total(), 135);
    }

    #[test]
    fn below_cap_contributions_scale_linearly() {
        let breakdown = RiskBreakdown::from_metrics(&metrics_with(2, 1, 1, 1, 2));
        assert_eq!(breakdown.overdue, 10);
        assert_eq!(breakdown.critical, 15);
        assert_eq!(breakdown.stuck, 10);
        assert_eq!(breakdown.stressed, 10);
        assert_eq!(breakdown.blockers, 10);
    }

    #[test]
    fn score_floors_at_zero() {
        assert_eq!(health_score(0), 100);
        assert_eq!(health_score(40), 60);
        assert_eq!(health_score(100), 0);
        assert_eq!(health_score(135), 0);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify_score(0), OkrHealth::OffTrack);
        assert_eq!(classify_score(49), OkrHealth::OffTrack);
        assert_eq!(classify_score(50), OkrHealth::AtRisk);
        assert_eq!(classify_score(79), OkrHealth::AtRisk);
        assert_eq!(classify_score(80), OkrHealth::OnTrack);
        assert_eq!(classify_score(100), OkrHealth::OnTrack);
    }

    #[test]
    fn health_serializes_to_wire_values() {
        assert_eq!(
            serde_json::to_string(&OkrHealth::OffTrack).unwrap(),
            "\"OFF_TRACK\""
        );
        assert_eq!(OkrHealth::AtRisk.to_string(), "AT_RISK");
    }
}
