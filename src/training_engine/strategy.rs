//! Static strategy table and lookups.
//!
//! The table is a compile-time constant. It covers a single heads-up spot
//! (`HU_BTN_vs_BB`) on the preflop and flop streets; every other situation
//! is simply absent and [`lookup`] returns `None` for it.

use serde::Serialize;

use crate::training_engine::{
    classifier::classify_hand,
    models::{Card, FrequencyDistribution, HandCategory, Street},
    texture::{postflop_category, BoardTexture},
};

/// Heads-up, button versus big blind.
pub const HU_BTN_VS_BB: &str = "HU_BTN_vs_BB";

/// One row of the strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyEntry {
    pub scenario: &'static str,
    pub street: Street,
    pub hand_category: HandCategory,
    pub board_texture: Option<BoardTexture>,
    pub strategy: FrequencyDistribution,
}

const fn entry(
    street: Street,
    hand_category: HandCategory,
    board_texture: Option<BoardTexture>,
    strategy: FrequencyDistribution,
) -> StrategyEntry {
    StrategyEntry { scenario: HU_BTN_VS_BB, street, hand_category, board_texture, strategy }
}

type F = FrequencyDistribution;

//                                        fold  call  r1/3  r1/2  r2/3  allin
pub static STRATEGY_TABLE: [StrategyEntry; 9] = [
    // preflop
    entry(Street::Preflop, HandCategory::Premium, None, F::new(0.0, 0.0, 0.3, 0.5, 0.2, 0.0)),
    entry(Street::Preflop, HandCategory::Strong,  None, F::new(0.0, 0.2, 0.4, 0.3, 0.1, 0.0)),
    entry(Street::Preflop, HandCategory::Medium,  None, F::new(0.1, 0.5, 0.3, 0.1, 0.0, 0.0)),
    entry(Street::Preflop, HandCategory::Weak,    None, F::new(0.4, 0.4, 0.2, 0.0, 0.0, 0.0)),
    entry(Street::Preflop, HandCategory::Trash,   None, F::new(0.8, 0.1, 0.1, 0.0, 0.0, 0.0)),
    // flop
    entry(Street::Flop, HandCategory::TopPairPlus, Some(BoardTexture::Dry), F::new(0.0, 0.2, 0.4, 0.3, 0.1, 0.0)),
    entry(Street::Flop, HandCategory::Draw,        Some(BoardTexture::Wet), F::new(0.1, 0.5, 0.2, 0.2, 0.0, 0.0)),
    entry(Street::Flop, HandCategory::WeakPair,    Some(BoardTexture::Dry), F::new(0.3, 0.5, 0.2, 0.0, 0.0, 0.0)),
    entry(Street::Flop, HandCategory::Air,         Some(BoardTexture::Dry), F::new(0.7, 0.2, 0.1, 0.0, 0.0, 0.0)),
];

/// Exact-match lookup on every supplied field.
///
/// `board_texture` only filters when it is `Some`. A miss is a normal
/// outcome meaning "no strategy data for this situation".
pub fn lookup(
    scenario_id: &str,
    street: Street,
    category: HandCategory,
    board_texture: Option<BoardTexture>,
) -> Option<&'static FrequencyDistribution> {
    let found = STRATEGY_TABLE
        .iter()
        .find(|e| {
            e.scenario == scenario_id
                && e.street == street
                && e.hand_category == category
                && board_texture.map_or(true, |t| e.board_texture == Some(t))
        })
        .map(|e| &e.strategy);

    match found {
        Some(_) => log::debug!("strategy hit: {scenario_id}/{street}/{category}"),
        None => log::debug!("strategy miss: {scenario_id}/{street}/{category} texture={board_texture:?}"),
    }
    found
}

/// Resolve the category for a dealt hand and look up its strategy.
///
/// Preflop hands are classified from the hole cards. Postflop hands use the
/// texture placeholder from [`postflop_category`]: the texture label stands
/// in for the category key and is not used as a texture filter.
pub fn strategy_for_hand(
    scenario_id: &str,
    street: Street,
    hand: [Card; 2],
    texture_label: Option<&str>,
) -> (Option<HandCategory>, Option<&'static FrequencyDistribution>) {
    let category = match street {
        Street::Preflop => Some(classify_hand(hand)),
        _ => postflop_category(texture_label),
    };
    let strategy = category.and_then(|cat| lookup(scenario_id, street, cat, None));
    (category, strategy)
}
