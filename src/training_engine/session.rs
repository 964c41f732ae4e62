//! A practice session: deal a hand, accept one action, keep score.

use std::collections::VecDeque;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    config::TrainerConfig,
    error::TrainerError,
    evaluator::{evaluate, Evaluation},
    feedback::feedback_message,
    generator::{make_rng, new_round},
    models::{ActionType, PracticeRound},
};

/// Running totals over every scored hand in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_hands: u32,
    pub total_score: u32,
    pub recent_scores: VecDeque<u8>,
    recent_window: usize,
}

impl SessionStats {
    pub fn new(recent_window: usize) -> Self {
        SessionStats {
            total_hands: 0,
            total_score: 0,
            recent_scores: VecDeque::with_capacity(recent_window),
            recent_window,
        }
    }

    pub fn record(&mut self, score: u8) {
        self.total_hands += 1;
        self.total_score += u32::from(score);
        self.recent_scores.push_back(score);
        while self.recent_scores.len() > self.recent_window {
            self.recent_scores.pop_front();
        }
    }

    /// Mean score over all hands; 0 before the first hand.
    pub fn average_score(&self) -> f64 {
        if self.total_hands == 0 {
            return 0.0;
        }
        f64::from(self.total_score) / f64::from(self.total_hands)
    }

    /// Mean over the recent window; 0 when empty.
    pub fn recent_average(&self) -> f64 {
        if self.recent_scores.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.recent_scores.iter().map(|&s| u32::from(s)).sum();
        f64::from(sum) / self.recent_scores.len() as f64
    }
}

pub struct PracticeSession {
    config: TrainerConfig,
    rng: StdRng,
    round: PracticeRound,
    evaluation: Option<Evaluation>,
    stats: SessionStats,
}

impl PracticeSession {
    /// Start a session and deal its first hand.
    pub fn new(config: TrainerConfig) -> Self {
        let mut rng = make_rng(config.rng_seed);
        let round = new_round(&mut rng, &config);
        let stats = SessionStats::new(config.recent_window);
        log::info!(
            "session started: {} {} {}{}",
            config.scenario_id, round.scenario.street, round.hand[0], round.hand[1]
        );
        PracticeSession { config, rng, round, evaluation: None, stats }
    }

    /// Discard the current hand (acted on or not) and deal a fresh one.
    pub fn new_hand(&mut self) -> &PracticeRound {
        self.round = new_round(&mut self.rng, &self.config);
        self.evaluation = None;
        log::info!(
            "new hand: {}{} board=[{}] category={:?}",
            self.round.hand[0],
            self.round.hand[1],
            self.round.board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
            self.round.category,
        );
        &self.round
    }

    /// Replace the current hand with one built elsewhere, e.g. from
    /// [`round_from_cards`](crate::training_engine::generator::round_from_cards).
    pub fn load_round(&mut self, round: PracticeRound) {
        self.round = round;
        self.evaluation = None;
    }

    /// Score the player's action for the current hand.
    ///
    /// Only one action is accepted per hand, and only when strategy data
    /// exists for it.
    pub fn act(&mut self, action: ActionType) -> Result<&Evaluation, TrainerError> {
        if self.evaluation.is_some() {
            log::warn!("ignoring {action}: hand already scored");
            return Err(TrainerError::AlreadyActed);
        }
        let Some(strategy) = self.round.strategy.as_ref() else {
            log::warn!("ignoring {action}: no strategy for {}", self.round.scenario.street);
            return Err(TrainerError::NoStrategy);
        };

        let evaluation = evaluate(strategy, action);
        self.stats.record(evaluation.score);
        Ok(&*self.evaluation.insert(evaluation))
    }

    pub fn round(&self) -> &PracticeRound {
        &self.round
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Feedback text for the scored hand in the configured locale.
    pub fn feedback(&self) -> Option<String> {
        self.evaluation
            .as_ref()
            .map(|e| feedback_message(e, self.config.locale))
    }

    pub fn has_acted(&self) -> bool {
        self.evaluation.is_some()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}
