//! Reducer - pure function `(state, action) -> DispatchResult`.
//!
//! All state mutations happen here; no side effects beyond the returned
//! effect descriptions.

use crate::action::Action;
use crate::cities::{self, City};
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, DisplayState, FADE_STEPS, SUGGESTION_LIMIT};

/// Fixed message shown when a submitted name matches no known city.
pub const CITY_NOT_FOUND: &str = "City not found in suggestions";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::QueryChange(value) => {
            state.suggestions = cities::prefix_search(&value, SUGGESTION_LIMIT);
            state.selected = 0;
            state.query = value;
            DispatchResult::changed()
        }

        Action::QuerySubmit(value) => {
            state.suggestions.clear();
            state.selected = 0;
            match cities::lookup(value.trim()) {
                Some(city) => start_fetch(state, city),
                None => {
                    // The query is left as typed.
                    state.display = DisplayState::Error(CITY_NOT_FOUND.to_string());
                    DispatchResult::changed()
                }
            }
        }

        Action::SuggestionNav(index) => {
            if state.suggestions.is_empty() {
                return DispatchResult::unchanged();
            }
            let clamped = index.min(state.suggestions.len() - 1);
            if clamped == state.selected {
                return DispatchResult::unchanged();
            }
            state.selected = clamped;
            DispatchResult::changed()
        }

        Action::SuggestionPick(index) => {
            let Some(city) = state.suggestions.get(index).copied() else {
                return DispatchResult::unchanged();
            };
            state.query = city.name.to_string();
            state.suggestions.clear();
            state.selected = 0;
            start_fetch(state, city)
        }

        Action::SuggestionsDismiss => {
            if state.suggestions.is_empty() {
                return DispatchResult::unchanged();
            }
            state.suggestions.clear();
            state.selected = 0;
            DispatchResult::changed()
        }

        Action::WeatherDidLoad(reading) => {
            state.display = DisplayState::Loaded(reading);
            state.fade = 0;
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.display = DisplayState::Error(format!("Error: {message}"));
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.display.is_loading() {
                return DispatchResult::changed();
            }
            if matches!(state.display, DisplayState::Loaded(_)) && state.fade < FADE_STEPS {
                state.fade += 1;
                return DispatchResult::changed();
            }
            DispatchResult::unchanged()
        }

        // Quit is handled in the main loop, not here.
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Any prior reading or error is gone before the request is issued.
fn start_fetch(state: &mut AppState, city: City) -> DispatchResult {
    state.display = DisplayState::Loading;
    DispatchResult::changed_with(Effect::FetchWeather { city })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherReading;

    fn reading() -> WeatherReading {
        WeatherReading {
            city: "Mumbai".into(),
            temperature: 28.5,
            weather_code: 2,
            description: "Partly cloudy".into(),
        }
    }

    #[test]
    fn query_change_derives_suggestions() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::QueryChange("Mum".into()));

        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.query, "Mum");
        assert_eq!(
            state.suggestions.iter().map(|c| c.name).collect::<Vec<_>>(),
            vec!["Mumbai"]
        );
    }

    #[test]
    fn empty_query_clears_suggestions() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("M".into()));
        assert!(!state.suggestions.is_empty());

        reducer(&mut state, Action::QueryChange(String::new()));
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn pick_sets_query_clears_suggestions_and_fetches_once() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("Mum".into()));

        let result = reducer(&mut state, Action::SuggestionPick(0));

        assert_eq!(state.query, "Mumbai");
        assert!(state.suggestions.is_empty());
        assert_eq!(state.display, DisplayState::Loading);
        assert_eq!(result.effects.len(), 1);
        let Effect::FetchWeather { city } = &result.effects[0];
        assert_eq!(city.name, "Mumbai");
        assert_eq!(city.lat, 19.0760);
        assert_eq!(city.lon, 72.8777);
    }

    #[test]
    fn pick_out_of_range_is_a_noop() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("Mum".into()));

        let result = reducer(&mut state, Action::SuggestionPick(5));

        assert!(!result.changed);
        assert!(!result.has_effects());
    }

    #[test]
    fn submit_exact_match_is_case_insensitive() {
        let mut state = AppState::default();
        state.query = "mumbai".into();

        let result = reducer(&mut state, Action::QuerySubmit("  mumbai ".into()));

        assert_eq!(state.display, DisplayState::Loading);
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn submit_unknown_city_reports_miss_without_fetching() {
        let mut state = AppState::default();
        state.query = "Nonexistent".into();

        let result = reducer(&mut state, Action::QuerySubmit("Nonexistent".into()));

        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.display, DisplayState::Error(CITY_NOT_FOUND.to_string()));
        // Input is not cleared on a miss.
        assert_eq!(state.query, "Nonexistent");
    }

    #[test]
    fn submit_clears_suggestion_surface() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("D".into()));
        assert!(!state.suggestions.is_empty());

        reducer(&mut state, Action::QuerySubmit("Delhi".into()));
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn nav_clamps_to_bounds() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("Mum".into()));

        let result = reducer(&mut state, Action::SuggestionNav(10));
        assert_eq!(state.selected, 0);
        assert!(!result.changed);

        // No suggestions -> noop.
        reducer(&mut state, Action::QueryChange(String::new()));
        assert!(!reducer(&mut state, Action::SuggestionNav(1)).changed);
    }

    #[test]
    fn dismiss_keeps_query() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QueryChange("Mum".into()));

        let result = reducer(&mut state, Action::SuggestionsDismiss);

        assert!(result.changed);
        assert!(state.suggestions.is_empty());
        assert_eq!(state.query, "Mum");
    }

    #[test]
    fn did_load_enters_loaded_and_restarts_fade() {
        let mut state = AppState::default();
        state.display = DisplayState::Loading;
        state.fade = FADE_STEPS;

        let result = reducer(&mut state, Action::WeatherDidLoad(reading()));

        assert!(result.changed);
        assert_eq!(state.display, DisplayState::Loaded(reading()));
        assert_eq!(state.fade, 0);
    }

    #[test]
    fn did_error_prefixes_message() {
        let mut state = AppState::default();
        state.display = DisplayState::Loading;

        reducer(
            &mut state,
            Action::WeatherDidError("Weather data not found".into()),
        );

        assert_eq!(
            state.display,
            DisplayState::Error("Error: Weather data not found".to_string())
        );
    }

    #[test]
    fn fetch_resets_previous_result() {
        // Loaded and Error are terminal only until the next fetch.
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherDidLoad(reading()));

        let result = reducer(&mut state, Action::QuerySubmit("Delhi".into()));

        assert_eq!(state.display, DisplayState::Loading);
        assert!(result.has_effects());
    }

    #[test]
    fn tick_rerenders_only_while_animating() {
        let mut state = AppState::default();

        // Idle: counter advances, no re-render.
        assert!(!reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);

        // Loading: spinner needs frames.
        state.display = DisplayState::Loading;
        assert!(reducer(&mut state, Action::Tick).changed);

        // Loaded: fade advances to its cap, then ticks go quiet.
        reducer(&mut state, Action::WeatherDidLoad(reading()));
        for expected in 1..=FADE_STEPS {
            assert!(reducer(&mut state, Action::Tick).changed);
            assert_eq!(state.fade, expected);
        }
        assert!(!reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.fade, FADE_STEPS);
    }
}
