//! # gto_trainer
//!
//! Core logic of a poker strategy trainer.
//!
//! The trainer deals a hand, asks the player to pick one of six actions, and
//! scores that choice against a small fixed table of recommended action
//! frequencies. Everything here is pure and synchronous; rendering is left to
//! the UI, which talks to the engine through [`ui_adapter`].
//!
//! ## How it works
//!
//! 1. [`classify`] buckets the hole cards into a preflop [`HandCategory`]
//!    (postflop rounds use a fixed placeholder key).
//! 2. [`lookup`] finds the [`FrequencyDistribution`] for the scenario,
//!    street and category, or `None` when the table has no data.
//! 3. [`evaluate`] turns the chosen [`ActionType`] into a score (0-100), an
//!    optimality flag, and a [`FeedbackTier`].
//!
//! [`PracticeSession`] strings these together with dealing and running
//! statistics.
//!
//! ## Quick start
//!
//! ```rust
//! use gto_trainer::{
//!     classify, evaluate, lookup, ActionType, HandCategory, Rank, Street, HU_BTN_VS_BB,
//! };
//!
//! let category = classify(Rank::ACE, Rank::KING, false);
//! assert_eq!(category, HandCategory::Premium);
//!
//! let strategy = lookup(HU_BTN_VS_BB, Street::Preflop, category, None).unwrap();
//! let result = evaluate(strategy, ActionType::Raise1_2);
//! assert_eq!(result.score, 50);
//! assert!(result.is_optimal);
//!
//! assert!(lookup(HU_BTN_VS_BB, Street::Turn, category, None).is_none());
//! ```

pub mod training_engine;
pub mod ui_adapter;

pub use training_engine::{
    classify, evaluate, lookup, new_round, ActionType, BoardTexture, Card, Evaluation,
    FeedbackTier, FrequencyDistribution, HandCategory, Locale, PracticeRound,
    PracticeSession, Rank, Scenario, SessionStats, Street, Suit, TrainerConfig,
    TrainerError, HU_BTN_VS_BB,
};

#[cfg(test)]
mod tests;
