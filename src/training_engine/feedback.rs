//! Human-readable wording for actions and evaluations.
//!
//! Only presentation lives here; the reproducible result of scoring is the
//! [`Evaluation`] itself.

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    evaluator::{Evaluation, FeedbackTier},
    models::{ActionType, Street},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Pick the string for the active locale.
fn localized(locale: Locale, en: &'static str, zh: &'static str) -> &'static str {
    match locale {
        Locale::En => en,
        Locale::Zh => zh,
    }
}

pub fn action_name(action: ActionType, locale: Locale) -> &'static str {
    match action {
        ActionType::Fold     => localized(locale, "Fold", "弃牌"),
        ActionType::Call     => localized(locale, "Call", "跟注"),
        ActionType::Raise1_3 => localized(locale, "Raise 1/3 pot", "加注 1/3 底池"),
        ActionType::Raise1_2 => localized(locale, "Raise 1/2 pot", "加注 1/2 底池"),
        ActionType::Raise2_3 => localized(locale, "Raise 2/3 pot", "加注 2/3 底池"),
        ActionType::AllIn    => localized(locale, "All-in", "全下"),
    }
}

pub fn street_name(street: Street, locale: Locale) -> &'static str {
    match street {
        Street::Preflop => localized(locale, "Preflop", "翻牌前"),
        Street::Flop    => localized(locale, "Flop", "翻牌"),
        Street::Turn    => localized(locale, "Turn", "转牌"),
        Street::River   => localized(locale, "River", "河牌"),
    }
}

fn tier_sentence(tier: FeedbackTier, locale: Locale) -> &'static str {
    match tier {
        FeedbackTier::Excellent => localized(
            locale,
            "Excellent! This is a high-frequency GTO play.",
            "非常好！这是一个高频率的GTO决策。",
        ),
        FeedbackTier::Good => localized(
            locale,
            "Good, this play is within the GTO range.",
            "不错，这个决策在GTO范围内。",
        ),
        FeedbackTier::Acceptable => localized(
            locale,
            "Acceptable, but not the most common GTO play.",
            "可接受，但这不是最常见的GTO决策。",
        ),
        FeedbackTier::OffStrategy => localized(
            locale,
            "GTO never takes this line here; it is likely too aggressive or too passive.",
            "这个决策在GTO策略中频率为零，可能太激进或太保守。",
        ),
    }
}

/// Full feedback text: the tier sentence followed by how the choice compares
/// with the optimal action set.
pub fn feedback_message(evaluation: &Evaluation, locale: Locale) -> String {
    let mut message = tier_sentence(evaluation.tier, locale).to_string();
    if evaluation.is_optimal {
        message.push(' ');
        message.push_str(localized(locale, "This is one of the best plays!", "这是最优决策之一！"));
    } else {
        let names: Vec<&str> = evaluation
            .optimal_actions
            .iter()
            .map(|&a| action_name(a, locale))
            .collect();
        match locale {
            Locale::En => message.push_str(&format!(" GTO most often plays: {}.", names.join(" or "))),
            Locale::Zh => message.push_str(&format!(" GTO最常建议: {}。", names.join("或"))),
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::{evaluator::evaluate, models::FrequencyDistribution};

    #[test]
    fn optimal_choice_message() {
        let d = FrequencyDistribution::new(0.0, 0.0, 0.3, 0.5, 0.2, 0.0);
        let msg = feedback_message(&evaluate(&d, ActionType::Raise1_2), Locale::En);
        assert!(msg.starts_with("Excellent!"));
        assert!(msg.ends_with("This is one of the best plays!"));
    }

    #[test]
    fn suboptimal_choice_lists_every_tied_best_action() {
        let d = FrequencyDistribution::new(0.4, 0.4, 0.2, 0.0, 0.0, 0.0);
        let msg = feedback_message(&evaluate(&d, ActionType::AllIn), Locale::En);
        assert!(msg.contains("Fold or Call"), "{msg}");

        let zh = feedback_message(&evaluate(&d, ActionType::AllIn), Locale::Zh);
        assert!(zh.contains("弃牌或跟注"), "{zh}");
        assert!(zh.starts_with("这个决策在GTO策略中频率为零"));
    }

    #[test]
    fn every_action_has_a_name_in_both_locales() {
        for action in ActionType::ALL {
            assert!(!action_name(action, Locale::En).is_empty());
            assert!(!action_name(action, Locale::Zh).is_empty());
        }
        assert_eq!(street_name(Street::Flop, Locale::Zh), "翻牌");
    }
}
