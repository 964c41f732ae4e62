//! Preflop hand classification.
//!
//! Hole cards are bucketed into one of five categories by walking an ordered
//! rule list; the first rule that matches wins. The buckets overlap (a pair
//! of jacks is also "any remaining pair"), so the order of [`RULES`] is part
//! of the behaviour.

use crate::training_engine::models::{Card, HandCategory, Rank};

/// Ranks of a two-card hand, normalised so `high >= low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleRanks {
    pub high: u8,
    pub low: u8,
    pub suited: bool,
}

impl HoleRanks {
    pub fn new(a: Rank, b: Rank, suited: bool) -> Self {
        let (high, low) = if a >= b { (a.0, b.0) } else { (b.0, a.0) };
        HoleRanks { high, low, suited }
    }

    fn is_pair(self) -> bool {
        self.high == self.low
    }

    fn gap(self) -> u8 {
        self.high - self.low
    }
}

type Rule = (fn(HoleRanks) -> bool, HandCategory);

/// Evaluated top to bottom.
const RULES: &[Rule] = &[
    // QQ+, AK
    (|h: HoleRanks| h.is_pair() && h.high >= 12, HandCategory::Premium),
    (|h: HoleRanks| h.high == 14 && h.low == 13, HandCategory::Premium),
    // TT-JJ, AQ, AJ, KQs
    (|h: HoleRanks| h.is_pair() && h.high >= 10, HandCategory::Strong),
    (|h: HoleRanks| h.high == 14 && (h.low == 12 || h.low == 11), HandCategory::Strong),
    (|h: HoleRanks| h.suited && h.high == 13 && h.low == 12, HandCategory::Strong),
    // 77-99, Axs, K9s+
    (|h: HoleRanks| h.is_pair() && h.high >= 7, HandCategory::Medium),
    (|h: HoleRanks| h.suited && h.high == 14, HandCategory::Medium),
    (|h: HoleRanks| h.suited && h.high == 13 && h.low >= 9, HandCategory::Medium),
    // suited connectors and one-gappers 8-high or better, small pairs
    (|h: HoleRanks| h.suited && h.gap() <= 2 && h.high >= 8, HandCategory::Weak),
    (|h: HoleRanks| h.is_pair(), HandCategory::Weak),
];

/// Classify a hole hand from its two ranks (in any order) and suitedness.
///
/// Total over all rank pairs; anything no rule claims is [`HandCategory::Trash`].
pub fn classify(rank1: Rank, rank2: Rank, suited: bool) -> HandCategory {
    let ranks = HoleRanks::new(rank1, rank2, suited);
    RULES
        .iter()
        .find(|(matches, _)| matches(ranks))
        .map(|&(_, category)| category)
        .unwrap_or(HandCategory::Trash)
}

/// Convenience wrapper over [`classify`] for dealt hole cards.
pub fn classify_hand(hand: [Card; 2]) -> HandCategory {
    classify(hand[0].rank, hand[1].rank, hand[0].suit == hand[1].suit)
}

/// Short hand notation, e.g. `"AKs"`, `"T9o"`, `"77"`.
pub fn hand_label(hand: [Card; 2]) -> String {
    let ranks = HoleRanks::new(hand[0].rank, hand[1].rank, hand[0].suit == hand[1].suit);
    let (hi, lo) = (Rank(ranks.high), Rank(ranks.low));
    if ranks.is_pair() {
        format!("{hi}{lo}")
    } else if ranks.suited {
        format!("{hi}{lo}s")
    } else {
        format!("{hi}{lo}o")
    }
}
