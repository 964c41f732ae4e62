use std::fmt;
use serde::{Deserialize, Serialize};

use crate::training_engine::models::{ActionType, FrequencyDistribution};

/// Qualitative grade for a chosen action, from its strategy frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    /// Frequency of at least 40%.
    Excellent,
    /// At least 20%.
    Good,
    /// Played at some non-zero frequency.
    Acceptable,
    /// Never played by the strategy.
    OffStrategy,
}

impl FeedbackTier {
    pub fn from_frequency(frequency: f64) -> Self {
        if frequency >= 0.4 {
            FeedbackTier::Excellent
        } else if frequency >= 0.2 {
            FeedbackTier::Good
        } else if frequency > 0.0 {
            FeedbackTier::Acceptable
        } else {
            FeedbackTier::OffStrategy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackTier::Excellent   => "excellent",
            FeedbackTier::Good        => "good",
            FeedbackTier::Acceptable  => "acceptable",
            FeedbackTier::OffStrategy => "off-strategy",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one action against a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub action: ActionType,
    /// `round(frequency * 100)`, 0..=100.
    pub score: u8,
    pub is_optimal: bool,
    pub tier: FeedbackTier,
    /// Every action sharing the highest frequency, in canonical order.
    pub optimal_actions: Vec<ActionType>,
}

/// Actions tied at the distribution's maximum frequency.
pub fn optimal_actions(distribution: &FrequencyDistribution) -> Vec<ActionType> {
    let max = distribution.max_frequency();
    distribution
        .iter()
        .filter(|&(_, freq)| freq == max)
        .map(|(action, _)| action)
        .collect()
}

/// Score `action` against `distribution`.
///
/// An all-zero distribution makes every action optimal with a score of 0;
/// that falls out of the tie rule rather than being special-cased.
pub fn evaluate(distribution: &FrequencyDistribution, action: ActionType) -> Evaluation {
    let frequency = distribution.get(action);
    let score = (frequency * 100.0).round().clamp(0.0, 100.0) as u8;
    let optimal = optimal_actions(distribution);
    let is_optimal = optimal.contains(&action);
    let tier = FeedbackTier::from_frequency(frequency);

    log::debug!("evaluated {action}: freq={frequency} score={score} tier={tier} optimal={is_optimal}");

    Evaluation { action, score, is_optimal, tier, optimal_actions: optimal }
}

/// Rough EV proxy for an action. Uses the strategy frequency directly.
pub fn ev_estimate(distribution: &FrequencyDistribution, action: ActionType) -> f64 {
    distribution.get(action)
}
