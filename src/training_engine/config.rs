use serde::{Deserialize, Serialize};

use crate::training_engine::{
    error::TrainerError,
    feedback::Locale,
    models::{Scenario, Street},
    strategy::HU_BTN_VS_BB,
};

/// Settings for a practice session.
///
/// Every field has a default, so a partial (or empty) JSON object is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Strategy table key for the spot being drilled.
    pub scenario_id: String,
    pub position: String,
    pub pot_size: u32,
    pub effective_stack: u32,
    pub street: Street,
    /// `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    /// How many of the latest scores feed the recent average.
    pub recent_window: usize,
    pub locale: Locale,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            scenario_id: HU_BTN_VS_BB.to_string(),
            position: "BTN vs BB".to_string(),
            pot_size: 100,
            effective_stack: 1000,
            street: Street::Preflop,
            rng_seed: None,
            recent_window: 5,
            locale: Locale::En,
        }
    }
}

impl TrainerConfig {
    pub fn from_json(json: &str) -> Result<Self, TrainerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fresh per-hand context built from these settings.
    pub fn scenario(&self) -> Scenario {
        Scenario {
            position: self.position.clone(),
            pot_size: self.pot_size,
            effective_stack: self.effective_stack,
            street: self.street,
        }
    }
}
