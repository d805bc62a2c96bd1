//! Application state - single source of truth.
//!
//! Components receive `&AppState` through props; only the reducer mutates it.

use crate::cities::City;

/// Period of the animation tick driving the spinner and the fade-in.
pub const ANIM_TICK_MS: u64 = 80;

/// Number of ticks it takes a freshly loaded reading to fade in fully.
pub const FADE_STEPS: u8 = 4;

/// Hard cap on the number of rendered suggestions.
pub const SUGGESTION_LIMIT: usize = 7;

/// One fetched weather observation.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: f32,
    /// WMO weather code as reported by the provider.
    pub weather_code: u8,
    pub description: String,
}

/// What the result region currently shows.
///
/// `Loaded` and `Error` are terminal until the next fetch resets to
/// `Loading`; at most one reading or error is live at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Loaded(WeatherReading),
    Error(String),
}

impl DisplayState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Current input field value.
    pub query: String,
    /// Suggestions derived from the query, in directory order.
    pub suggestions: Vec<City>,
    /// Highlighted suggestion index.
    pub selected: usize,
    /// The result region.
    pub display: DisplayState,
    /// Fade-in progress of the current reading, 0..=FADE_STEPS.
    pub fade: u8,
    /// Animation frame counter.
    pub tick_count: u32,
}
