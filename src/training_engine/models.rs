use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Glyph used by card renderers.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs    => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts   => "♥",
            Suit::Spades   => "♠",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn from_char(c: char) -> Result<Self, TrainerError> {
        match c {
            'c' | 'C' | '♣' => Ok(Suit::Clubs),
            'd' | 'D' | '♦' => Ok(Suit::Diamonds),
            'h' | 'H' | '♥' => Ok(Suit::Hearts),
            's' | 'S' | '♠' => Ok(Suit::Spades),
            other => Err(TrainerError::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (2u8..=14).map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    pub fn from_char(c: char) -> Result<Self, TrainerError> {
        let value = match c.to_ascii_uppercase() {
            d @ '2'..='9' => d as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            other => return Err(TrainerError::InvalidRank(other)),
        };
        Ok(Rank(value))
    }
}

impl FromStr for Rank {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10" {
            return Ok(Rank::TEN);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            (Some(c), Some(_)) => Err(TrainerError::InvalidRank(c)),
            (None, _) => Err(TrainerError::InvalidRank(' ')),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card. Equality is structural over rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = TrainerError;

    /// Parses `"As"`, `"Td"`, `"10h"` or `"K♠"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| TrainerError::InvalidCard(s.to_string()))?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        if rank_part.is_empty() {
            return Err(TrainerError::InvalidCard(s.to_string()));
        }
        Ok(Card {
            rank: rank_part.parse()?,
            suit: Suit::from_char(suit_char)?,
        })
    }
}

/// Both hole cards share a suit.
pub fn is_suited(a: Card, b: Card) -> bool {
    a.suit == b.suit
}

// ---------------------------------------------------------------------------
// Streets, actions, categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards visible on this street.
    pub fn board_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop    => 3,
            Street::Turn    => 4,
            Street::River   => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop    => "flop",
            Street::Turn    => "turn",
            Street::River   => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Street {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Street::ALL
            .into_iter()
            .find(|street| street.as_str() == s)
            .ok_or_else(|| TrainerError::UnknownStreet(s.to_string()))
    }
}

/// The six betting options offered to the player. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Fold,
    Call,
    #[serde(rename = "raise_1_3")]
    Raise1_3,
    #[serde(rename = "raise_1_2")]
    Raise1_2,
    #[serde(rename = "raise_2_3")]
    Raise2_3,
    AllIn,
}

impl ActionType {
    /// Canonical order, matching the control panel layout.
    pub const ALL: [ActionType; 6] = [
        ActionType::Fold,
        ActionType::Call,
        ActionType::Raise1_3,
        ActionType::Raise1_2,
        ActionType::Raise2_3,
        ActionType::AllIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Fold     => "fold",
            ActionType::Call     => "call",
            ActionType::Raise1_3 => "raise_1_3",
            ActionType::Raise1_2 => "raise_1_2",
            ActionType::Raise2_3 => "raise_2_3",
            ActionType::AllIn    => "all_in",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| TrainerError::UnknownAction(s.to_string()))
    }
}

/// Strength bucket used as the strategy table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    // preflop
    Premium,
    Strong,
    Medium,
    Weak,
    Trash,
    // postflop
    TopPairPlus,
    Draw,
    WeakPair,
    Air,
}

impl HandCategory {
    pub const PREFLOP: [HandCategory; 5] = [
        HandCategory::Premium,
        HandCategory::Strong,
        HandCategory::Medium,
        HandCategory::Weak,
        HandCategory::Trash,
    ];

    pub const POSTFLOP: [HandCategory; 4] = [
        HandCategory::TopPairPlus,
        HandCategory::Draw,
        HandCategory::WeakPair,
        HandCategory::Air,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HandCategory::Premium     => "premium",
            HandCategory::Strong      => "strong",
            HandCategory::Medium      => "medium",
            HandCategory::Weak        => "weak",
            HandCategory::Trash       => "trash",
            HandCategory::TopPairPlus => "top_pair_plus",
            HandCategory::Draw        => "draw",
            HandCategory::WeakPair    => "weak_pair",
            HandCategory::Air         => "air",
        }
    }

    pub fn is_preflop(self) -> bool {
        HandCategory::PREFLOP.contains(&self)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandCategory {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::PREFLOP
            .into_iter()
            .chain(HandCategory::POSTFLOP)
            .find(|cat| cat.as_str() == s)
            .ok_or_else(|| TrainerError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Strategy data
// ---------------------------------------------------------------------------

/// Recommended mix over the six actions.
///
/// The values are expected to sum to 1.0. That is a data-entry contract on
/// the static table and is not checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    pub fold: f64,
    pub call: f64,
    pub raise_1_3: f64,
    pub raise_1_2: f64,
    pub raise_2_3: f64,
    pub all_in: f64,
}

impl FrequencyDistribution {
    pub const fn new(
        fold: f64, call: f64, raise_1_3: f64,
        raise_1_2: f64, raise_2_3: f64, all_in: f64,
    ) -> Self {
        FrequencyDistribution { fold, call, raise_1_3, raise_1_2, raise_2_3, all_in }
    }

    pub fn get(&self, action: ActionType) -> f64 {
        match action {
            ActionType::Fold     => self.fold,
            ActionType::Call     => self.call,
            ActionType::Raise1_3 => self.raise_1_3,
            ActionType::Raise1_2 => self.raise_1_2,
            ActionType::Raise2_3 => self.raise_2_3,
            ActionType::AllIn    => self.all_in,
        }
    }

    /// `(action, frequency)` pairs in canonical action order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionType, f64)> + '_ {
        ActionType::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    pub fn max_frequency(&self) -> f64 {
        self.iter().map(|(_, f)| f).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, f)| f).sum()
    }
}

// ---------------------------------------------------------------------------
// Per-hand context
// ---------------------------------------------------------------------------

/// Table context for one practice hand. Rebuilt for every new hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub position: String,
    pub pot_size: u32,
    pub effective_stack: u32,
    pub street: Street,
}

/// Everything dealt for one practice hand plus the strategy resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRound {
    pub scenario_id: String,
    pub scenario: Scenario,
    pub hand: [Card; 2],
    pub board: Vec<Card>,
    /// `None` when the postflop placeholder produced no usable key.
    pub category: Option<HandCategory>,
    /// `None` when the table has no entry for this situation.
    pub strategy: Option<FrequencyDistribution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cards_in_letter_and_glyph_form() {
        let a: Card = "As".parse().unwrap();
        assert_eq!(a, Card::new(Rank::ACE, Suit::Spades));
        let t: Card = "10h".parse().unwrap();
        assert_eq!(t, Card::new(Rank::TEN, Suit::Hearts));
        let k: Card = "K♦".parse().unwrap();
        assert_eq!(k, Card::new(Rank::KING, Suit::Diamonds));
        assert_eq!(a.to_string(), "As");
    }

    #[test]
    fn rejects_malformed_cards() {
        assert!(matches!("Xs".parse::<Card>(), Err(TrainerError::InvalidRank('X'))));
        assert!(matches!("Ax".parse::<Card>(), Err(TrainerError::InvalidSuit('x'))));
        assert!(matches!("s".parse::<Card>(), Err(TrainerError::InvalidCard(_))));
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn action_names_round_trip_through_serde() {
        for action in ActionType::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            assert_eq!(action.as_str().parse::<ActionType>().unwrap(), action);
        }
        assert!("check".parse::<ActionType>().is_err());
    }

    #[test]
    fn category_keys_match_table_names() {
        assert_eq!("top_pair_plus".parse::<HandCategory>().unwrap(), HandCategory::TopPairPlus);
        assert_eq!(
            serde_json::to_string(&HandCategory::WeakPair).unwrap(),
            "\"weak_pair\""
        );
        assert!("dry".parse::<HandCategory>().is_err());
    }

    #[test]
    fn street_board_sizes() {
        let sizes: Vec<usize> = Street::ALL.iter().map(|s| s.board_cards()).collect();
        assert_eq!(sizes, vec![0, 3, 4, 5]);
        assert_eq!("turn".parse::<Street>().unwrap(), Street::Turn);
    }

    #[test]
    fn suit_colours() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }
}
