//! Core trainer engine — classification, strategy lookup, and scoring.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: cards, streets, actions, categories, distributions |
//! | `classifier` | Ordered first-match rules mapping hole cards to a preflop category |
//! | `texture`    | Board texture and the postflop placeholder category |
//! | `strategy`   | Static strategy table and `lookup()` |
//! | `evaluator`  | `evaluate()` — score, optimality, feedback tier |
//! | `feedback`   | Action names and feedback wording (English, Chinese) |
//! | `deck`       | 52-card deck with Fisher-Yates shuffle and card exclusion |
//! | `generator`  | Scenario context and dealing of practice rounds |
//! | `session`    | One-action-per-hand practice loop and running stats |
//! | `config`     | `TrainerConfig`, loadable from JSON |
//! | `error`      | `TrainerError` |

pub mod classifier;
pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod generator;
pub mod models;
pub mod session;
pub mod strategy;
pub mod texture;

pub use classifier::classify;
pub use config::TrainerConfig;
pub use error::TrainerError;
pub use evaluator::{evaluate, Evaluation, FeedbackTier};
pub use feedback::Locale;
pub use generator::new_round;
pub use models::{
    ActionType, Card, FrequencyDistribution, HandCategory, PracticeRound, Rank,
    Scenario, Street, Suit,
};
pub use session::{PracticeSession, SessionStats};
pub use strategy::{lookup, HU_BTN_VS_BB};
pub use texture::BoardTexture;
