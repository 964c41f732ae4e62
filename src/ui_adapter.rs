//! JSON views for the browser UI.
//!
//! The table, control panel and info panel render whatever these functions
//! return; they never reach into the engine types directly.

use serde_json::{json, Value};

use crate::training_engine::{
    evaluator::Evaluation,
    feedback::{action_name, feedback_message, street_name, Locale},
    models::{Card, FrequencyDistribution, PracticeRound},
    session::{PracticeSession, SessionStats},
};

/// One card as the card component expects it.
pub fn card_view(card: &Card) -> Value {
    let color = if card.suit.is_red() { "red" } else { "black" };
    json!({
        "rank": card.rank.symbol(),
        "suit": card.suit.symbol(),
        "color": color,
        "label": format!("{}{}", card.rank, card.suit.symbol()),
    })
}

fn cards_view(cards: &[Card]) -> Value {
    Value::Array(cards.iter().map(card_view).collect())
}

/// Bars for the strategy chart. Actions the strategy never takes are left out.
pub fn strategy_chart(distribution: &FrequencyDistribution, locale: Locale) -> Value {
    let bars: Vec<Value> = distribution
        .iter()
        .filter(|&(_, freq)| freq > 0.0)
        .map(|(action, freq)| {
            json!({
                "action": action,
                "label": action_name(action, locale),
                "percent": (freq * 100.0).round() as u8,
            })
        })
        .collect();
    Value::Array(bars)
}

pub fn round_view(round: &PracticeRound, locale: Locale) -> Value {
    let s = &round.scenario;
    json!({
        "scenario_id": round.scenario_id,
        "position": s.position,
        "street": s.street,
        "street_label": street_name(s.street, locale),
        "pot_size": s.pot_size,
        "effective_stack": s.effective_stack,
        "hand": cards_view(&round.hand),
        "board": cards_view(&round.board),
        "category": round.category,
        "strategy": round.strategy.as_ref().map(|d| strategy_chart(d, locale)),
    })
}

pub fn feedback_view(evaluation: &Evaluation, locale: Locale) -> Value {
    json!({
        "action": evaluation.action,
        "score": evaluation.score,
        "is_optimal": evaluation.is_optimal,
        "tier": evaluation.tier,
        "optimal_actions": evaluation.optimal_actions,
        "comment": feedback_message(evaluation, locale),
    })
}

pub fn stats_view(stats: &SessionStats) -> Value {
    json!({
        "total_hands": stats.total_hands,
        "average_score": stats.average_score(),
        "recent_average": stats.recent_average(),
    })
}

/// Everything the page needs after any state change.
pub fn session_view(session: &PracticeSession) -> Value {
    let locale = session.config().locale;
    json!({
        "round": round_view(session.round(), locale),
        "feedback": session.evaluation().map(|e| feedback_view(e, locale)),
        "action_made": session.has_acted(),
        "stats": stats_view(session.stats()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::{
        config::TrainerConfig,
        generator::round_from_cards,
        models::ActionType,
    };

    #[test]
    fn card_colours_and_labels() {
        let v = card_view(&"Th".parse().unwrap());
        assert_eq!(v["label"], "T♥");
        assert_eq!(v["color"], "red");
        assert_eq!(card_view(&"2c".parse().unwrap())["color"], "black");
    }

    #[test]
    fn chart_skips_zero_frequencies() {
        let d = FrequencyDistribution::new(0.0, 0.0, 0.3, 0.5, 0.2, 0.0);
        let chart = strategy_chart(&d, Locale::En);
        let bars = chart.as_array().unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0]["action"], "raise_1_3");
        assert_eq!(bars[0]["percent"], 30);
        assert_eq!(bars[1]["percent"], 50);
    }

    #[test]
    fn session_view_tracks_feedback() {
        let cfg = TrainerConfig { rng_seed: Some(8), ..TrainerConfig::default() };
        let mut session = PracticeSession::new(cfg);
        let round = round_from_cards(
            session.config(),
            ["Jd".parse().unwrap(), "Jc".parse().unwrap()],
            vec![],
        )
        .unwrap();
        session.load_round(round);

        let before = session_view(&session);
        assert_eq!(before["round"]["category"], "strong");
        assert_eq!(before["round"]["street"], "preflop");
        assert!(before["feedback"].is_null());
        assert_eq!(before["action_made"], false);

        session.act(ActionType::Raise1_3).unwrap();
        let after = session_view(&session);
        assert_eq!(after["feedback"]["score"], 40);
        assert_eq!(after["feedback"]["tier"], "excellent");
        assert_eq!(after["feedback"]["is_optimal"], true);
        assert_eq!(after["stats"]["total_hands"], 1);
        assert_eq!(after["action_made"], true);
    }

    #[test]
    fn missing_strategy_renders_as_null() {
        let cfg = TrainerConfig::default();
        let hand = ["9s".parse().unwrap(), "8s".parse().unwrap()];
        let board = ["2c", "7d", "Js", "Qh"].iter().map(|s| s.parse().unwrap()).collect();
        let round = round_from_cards(&cfg, hand, board).unwrap();
        assert!(round_view(&round, Locale::En)["strategy"].is_null());
    }
}
