//! Actions dispatched through the reducer.
//!
//! Naming convention: intent actions name the operation (`QuerySubmit`),
//! async results carry a `Did` prefix (`WeatherDidLoad`).

use crate::state::WeatherReading;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Input field value changed (every keystroke).
    QueryChange(String),
    /// Field value submitted via Enter or the search control.
    QuerySubmit(String),
    /// Suggestion highlight moved.
    SuggestionNav(usize),
    /// Suggestion activated (pointer click or Enter on the highlight).
    SuggestionPick(usize),
    /// Suggestion surface dismissed without changing the query.
    SuggestionsDismiss,
    /// Result: fetch completed.
    WeatherDidLoad(WeatherReading),
    /// Result: fetch failed; the message is shown to the user.
    WeatherDidError(String),
    /// Periodic animation tick.
    Tick,
    /// Exit the application.
    Quit,
}

impl Action {
    /// Action name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::QuerySubmit(_) => "QuerySubmit",
            Action::SuggestionNav(_) => "SuggestionNav",
            Action::SuggestionPick(_) => "SuggestionPick",
            Action::SuggestionsDismiss => "SuggestionsDismiss",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
