use std::fmt;
use serde::{Deserialize, Serialize};

use crate::training_engine::models::{Card, HandCategory, Suit};

/// Coarse description of the community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardTexture {
    /// Fewer than three board cards.
    None,
    /// No three-flush and no two ranks within two of each other.
    Dry,
    /// Three or more cards of one suit, or connected ranks.
    Wet,
}

impl BoardTexture {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardTexture::None => "none",
            BoardTexture::Dry  => "dry",
            BoardTexture::Wet  => "wet",
        }
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the texture of up to 5 board cards.
pub fn board_texture(board: &[Card]) -> BoardTexture {
    if board.len() < 3 {
        return BoardTexture::None;
    }
    if has_three_flush(board) || has_connected_ranks(board) {
        BoardTexture::Wet
    } else {
        BoardTexture::Dry
    }
}

/// True if 3+ cards share a suit.
pub fn has_three_flush(board: &[Card]) -> bool {
    Suit::ALL
        .iter()
        .any(|&suit| board.iter().filter(|c| c.suit == suit).count() >= 3)
}

/// True if any two neighbouring ranks (sorted, duplicates kept) are within 2.
pub fn has_connected_ranks(board: &[Card]) -> bool {
    let mut ranks: Vec<u8> = board.iter().map(|c| c.rank.0).collect();
    ranks.sort_unstable();
    ranks.windows(2).any(|w| w[1] - w[0] <= 2)
}

/// Category key used for postflop lookups.
///
/// Postflop hands are not evaluated. Without a texture label the key is
/// `top_pair_plus`; with one, the label itself is used as the key, so a
/// texture such as `"dry"` yields no category and the lookup comes back
/// empty.
pub fn postflop_category(texture: Option<&str>) -> Option<HandCategory> {
    match texture {
        None => Some(HandCategory::TopPairPlus),
        Some(label) => label.parse().ok(),
    }
}
