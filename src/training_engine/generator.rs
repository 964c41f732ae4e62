use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    config::TrainerConfig,
    deck::Deck,
    error::TrainerError,
    models::{Card, PracticeRound, Scenario, Street},
    strategy::strategy_for_hand,
};

/// Seeded RNG when a seed is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Per-hand table context from the session settings.
pub fn generate_scenario(config: &TrainerConfig) -> Scenario {
    config.scenario()
}

/// Deal hero hand (2 cards) + the street's board cards.
///
/// The board is drawn from a second shuffle with the hole cards removed, so
/// hand and board are always disjoint.
pub fn deal_round<R: Rng>(rng: &mut R, street: Street) -> ([Card; 2], Vec<Card>) {
    let mut deck = Deck::new_shuffled(rng);
    let hand = match (deck.deal(), deck.deal()) {
        (Some(a), Some(b)) => [a, b],
        _ => unreachable!("a fresh deck holds 52 cards"),
    };
    let board = deal_board(rng, street, &hand);
    (hand, board)
}

/// Street-sized board that avoids every card in `used`.
pub fn deal_board<R: Rng>(rng: &mut R, street: Street, used: &[Card]) -> Vec<Card> {
    Deck::new_shuffled_excluding(rng, used).deal_n(street.board_cards())
}

/// Deal a new practice round and resolve its strategy.
pub fn new_round<R: Rng>(rng: &mut R, config: &TrainerConfig) -> PracticeRound {
    let scenario = generate_scenario(config);
    let (hand, board) = deal_round(rng, scenario.street);
    resolve(config, scenario, hand, board)
}

/// Build a round from caller-supplied cards.
///
/// The street follows from the board size. Fails on a duplicated card or a
/// board that no street has.
pub fn round_from_cards(
    config: &TrainerConfig,
    hand: [Card; 2],
    board: Vec<Card>,
) -> Result<PracticeRound, TrainerError> {
    let street = Street::ALL
        .into_iter()
        .find(|s| s.board_cards() == board.len())
        .ok_or(TrainerError::InvalidBoardSize(board.len()))?;

    let mut seen: Vec<Card> = Vec::with_capacity(2 + board.len());
    for &card in hand.iter().chain(board.iter()) {
        if seen.contains(&card) {
            return Err(TrainerError::DuplicateCard(card));
        }
        seen.push(card);
    }

    let scenario = Scenario { street, ..generate_scenario(config) };
    Ok(resolve(config, scenario, hand, board))
}

fn resolve(
    config: &TrainerConfig,
    scenario: Scenario,
    hand: [Card; 2],
    board: Vec<Card>,
) -> PracticeRound {
    // Postflop rounds take the default placeholder key (no texture label).
    let (category, strategy) = strategy_for_hand(&config.scenario_id, scenario.street, hand, None);
    PracticeRound {
        scenario_id: config.scenario_id.clone(),
        scenario,
        hand,
        board,
        category,
        strategy: strategy.copied(),
    }
}
