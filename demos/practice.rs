//! A few hands of practice from the terminal.
//!
//! Run with: `RUST_LOG=debug cargo run --example practice`
//!
//! Each hand is answered once with the strategy's top action and once with a
//! random action (on a copy of the same hand), and the JSON views the browser
//! UI would receive are printed along the way.

use gto_trainer::training_engine::{
    classifier::hand_label,
    evaluator::optimal_actions,
    feedback::{action_name, feedback_message},
    generator::round_from_cards,
};
use gto_trainer::ui_adapter::{session_view, stats_view};
use gto_trainer::{ActionType, Locale, PracticeSession, Street, TrainerConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn play(session: &mut PracticeSession, action: ActionType, locale: Locale) {
    match session.act(action) {
        Ok(e) => {
            println!(
                "  {:<14} score {:>3}  {}",
                action_name(action, locale),
                e.score,
                feedback_message(e, locale)
            );
        }
        Err(err) => println!("  {:<14} not scored: {err}", action_name(action, locale)),
    }
}

fn main() {
    env_logger::init();

    let mut picker = StdRng::seed_from_u64(2024);
    for (street, locale) in [(Street::Preflop, Locale::En), (Street::Flop, Locale::Zh)] {
        let mut session = PracticeSession::new(TrainerConfig {
            street,
            rng_seed: Some(7),
            locale,
            ..TrainerConfig::default()
        });

        println!("══ {street} ══");
        for hand_no in 0..4 {
            if hand_no > 0 {
                session.new_hand();
            }
            let round = session.round().clone();
            let board: Vec<String> = round.board.iter().map(|c| c.to_string()).collect();
            println!(
                "Hand {}: {} [{}] category={:?}",
                hand_no + 1,
                hand_label(round.hand),
                board.join(" "),
                round.category,
            );

            let best = round
                .strategy
                .as_ref()
                .and_then(|d| optimal_actions(d).first().copied())
                .unwrap_or(ActionType::Fold);
            play(&mut session, best, locale);

            // replay the same cards with a random pick
            if let Ok(copy) = round_from_cards(session.config(), round.hand, round.board.clone()) {
                session.load_round(copy);
                let random = ActionType::ALL[picker.gen_range(0..ActionType::ALL.len())];
                play(&mut session, random, locale);
            }
        }

        println!("{}", serde_json::to_string_pretty(&session_view(&session)).unwrap_or_default());
        println!("stats: {}", stats_view(session.stats()));
        println!();
    }
}
