//! Side effects declared by the reducer.
//!
//! Effects are descriptions of work, not the work itself. The reducer stays
//! pure; the main loop hands effects to [`crate::runtime::handle_effect`].

use crate::cities::City;

/// Side effects that actions can trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch current weather for the given city.
    FetchWeather { city: City },
}

/// Result of one dispatch: whether state changed, plus effects to run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchResult {
    /// Whether the UI should re-render.
    pub changed: bool,
    /// Effects to process after this dispatch.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change, no effects.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    /// State changed with a single effect.
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
