//! Crate-level tests for `gto_trainer`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Classification | Reference hands land in the documented buckets; totality |
//! | Lookup | Reference distribution values; misses for unmodelled spots |
//! | Scoring | Score/optimality/tier on table rows, tie handling, all-zero rows |
//! | Determinism | Same inputs or seed → identical outputs |
//! | Session flow | Deal → act → stats across many seeded hands |

use crate::training_engine::{
    classifier::classify_hand,
    evaluator::optimal_actions,
    generator::{make_rng, new_round},
    strategy::STRATEGY_TABLE,
};
use crate::{
    classify, evaluate, lookup, ActionType, FeedbackTier, FrequencyDistribution, HandCategory,
    PracticeSession, Rank, Street, TrainerConfig, TrainerError, HU_BTN_VS_BB,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn rank(c: char) -> Rank {
    Rank::from_char(c).unwrap()
}

fn premium() -> &'static FrequencyDistribution {
    lookup(HU_BTN_VS_BB, Street::Preflop, HandCategory::Premium, None).unwrap()
}

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── classification ───────────────────────────────────────────────────────────

#[test]
fn reference_hands_classify_as_documented() {
    let cases = [
        ('A', 'A', false, HandCategory::Premium),
        ('A', 'A', true,  HandCategory::Premium),
        ('A', 'K', false, HandCategory::Premium),
        ('J', 'J', false, HandCategory::Strong),
        ('K', 'Q', true,  HandCategory::Strong),
        ('8', '8', false, HandCategory::Medium),
        ('7', '5', true,  HandCategory::Trash),
        ('7', '2', false, HandCategory::Trash),
    ];
    for (a, b, suited, expected) in cases {
        assert_eq!(classify(rank(a), rank(b), suited), expected, "{a}{b} suited={suited}");
    }
}

#[test]
fn classification_is_total_over_preflop_buckets() {
    let mut seen = std::collections::HashSet::new();
    for a in Rank::all() {
        for b in Rank::all() {
            for suited in [false, true] {
                let cat = classify(a, b, suited);
                assert!(cat.is_preflop(), "{a}{b} gave {cat}");
                assert_eq!(cat, classify(a, b, suited));
                seen.insert(cat);
            }
        }
    }
    assert_eq!(seen.len(), HandCategory::PREFLOP.len(), "every bucket is reachable");
}

// ── lookup ───────────────────────────────────────────────────────────────────

#[test]
fn premium_preflop_distribution() {
    let d = premium();
    assert_eq!(
        *d,
        FrequencyDistribution::new(0.0, 0.0, 0.3, 0.5, 0.2, 0.0)
    );
}

#[test]
fn table_covers_exactly_one_scenario_on_two_streets() {
    assert_eq!(STRATEGY_TABLE.len(), 9);
    assert!(STRATEGY_TABLE.iter().all(|e| e.scenario == HU_BTN_VS_BB));
    let preflop = STRATEGY_TABLE.iter().filter(|e| e.street == Street::Preflop).count();
    let flop = STRATEGY_TABLE.iter().filter(|e| e.street == Street::Flop).count();
    assert_eq!((preflop, flop), (5, 4));
}

#[test]
fn turn_and_river_are_not_found() {
    for street in [Street::Turn, Street::River] {
        for cat in HandCategory::PREFLOP.into_iter().chain(HandCategory::POSTFLOP) {
            assert!(lookup(HU_BTN_VS_BB, street, cat, None).is_none(), "{street}/{cat}");
        }
    }
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn premium_best_and_worst_choices() {
    let best = evaluate(premium(), ActionType::Raise1_2);
    assert_eq!((best.score, best.is_optimal), (50, true));

    let fold = evaluate(premium(), ActionType::Fold);
    assert_eq!((fold.score, fold.is_optimal, fold.tier), (0, false, FeedbackTier::OffStrategy));
}

#[test]
fn every_table_row_scores_consistently() {
    for entry in STRATEGY_TABLE.iter() {
        let d = &entry.strategy;
        let best = optimal_actions(d);
        assert!(!best.is_empty());
        for action in ActionType::ALL {
            let e = evaluate(d, action);
            assert_eq!(e.score, (d.get(action) * 100.0).round() as u8);
            assert!(e.score <= 100);
            assert_eq!(e.is_optimal, best.contains(&action));
            assert_eq!(e.tier, FeedbackTier::from_frequency(d.get(action)));
        }
    }
}

#[test]
fn degenerate_all_zero_distribution() {
    let zero = FrequencyDistribution::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(optimal_actions(&zero), ActionType::ALL.to_vec());
    for action in ActionType::ALL {
        let e = evaluate(&zero, action);
        assert_eq!(e.score, 0);
        assert!(e.is_optimal);
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_rounds() {
    for street in Street::ALL {
        let cfg = TrainerConfig { street, ..TrainerConfig::default() };
        for seed in SEEDS {
            let a = new_round(&mut make_rng(Some(seed)), &cfg);
            let b = new_round(&mut make_rng(Some(seed)), &cfg);
            assert_eq!(a, b, "round mismatch for {street} seed={seed}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_hands() {
    let cfg = TrainerConfig::default();
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = new_round(&mut make_rng(Some(seed)), &cfg);
        let b = new_round(&mut make_rng(Some(seed + 500)), &cfg);
        if a.hand == b.hand {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical hands ({same}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_round() {
    let round = new_round(&mut make_rng(None), &TrainerConfig::default());
    assert_ne!(round.hand[0], round.hand[1]);
    assert_eq!(round.category, Some(classify_hand(round.hand)));
    assert!(round.strategy.is_some());
}

// ── session flow ─────────────────────────────────────────────────────────────

#[test]
fn preflop_session_scores_every_hand() {
    for seed in SEEDS {
        let mut session = PracticeSession::new(TrainerConfig {
            rng_seed: Some(seed),
            ..TrainerConfig::default()
        });
        let mut expected_total = 0u32;
        for (i, action) in ActionType::ALL.into_iter().cycle().take(12).enumerate() {
            if i > 0 {
                session.new_hand();
            }
            let strategy = session.round().strategy.expect("preflop is always modelled");
            let score = session.act(action).unwrap().score;
            assert_eq!(score, evaluate(&strategy, action).score);
            expected_total += u32::from(score);
        }
        let stats = session.stats();
        assert_eq!(stats.total_hands, 12);
        assert_eq!(stats.total_score, expected_total);
        assert_eq!(stats.recent_scores.len(), 5);
    }
}

#[test]
fn flop_session_uses_placeholder_category() {
    let mut session = PracticeSession::new(TrainerConfig {
        street: Street::Flop,
        rng_seed: Some(3),
        ..TrainerConfig::default()
    });
    assert_eq!(session.round().board.len(), 3);
    assert_eq!(session.round().category, Some(HandCategory::TopPairPlus));
    let e = session.act(ActionType::Raise1_3).unwrap();
    assert_eq!(e.score, 40);
    assert!(e.is_optimal);
    assert!(matches!(session.act(ActionType::Call), Err(TrainerError::AlreadyActed)));
}
