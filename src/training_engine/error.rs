use thiserror::Error;

use crate::training_engine::models::Card;

/// Failures reported by the trainer.
///
/// A strategy table miss is not listed here: `lookup` reports it as `None`.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("invalid rank '{0}'")]
    InvalidRank(char),

    #[error("invalid suit '{0}'")]
    InvalidSuit(char),

    #[error("invalid card \"{0}\"")]
    InvalidCard(String),

    #[error("unknown action \"{0}\"")]
    UnknownAction(String),

    #[error("unknown street \"{0}\"")]
    UnknownStreet(String),

    #[error("unknown hand category \"{0}\"")]
    UnknownCategory(String),

    #[error("card {0} is already in use")]
    DuplicateCard(Card),

    #[error("a board cannot hold {0} cards")]
    InvalidBoardSize(usize),

    /// The current hand has already been scored.
    #[error("an action was already recorded for this hand")]
    AlreadyActed,

    /// The current hand has no strategy data to score against.
    #[error("no strategy data for this situation")]
    NoStrategy,

    #[error("invalid trainer config: {0}")]
    Config(#[from] serde_json::Error),
}
