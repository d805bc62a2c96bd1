//! City weather lookup TUI.
//!
//! A text input with autocomplete suggestions over a static city table.
//! Picking a suggestion (or submitting an exact name) fetches current
//! weather from Open-Meteo and fades the result into the display.
//!
//! The app follows a dispatch loop:
//!
//! 1. Terminal event -> [`runtime::EventKind`] -> component `handle_event` -> actions
//! 2. Actions run through the pure [`reducer::reducer`]
//! 3. The reducer returns a changed flag plus declarative [`effect::Effect`]s
//! 4. Effects spawn async tasks that send `Did*` result actions back
//! 5. Re-render when state changed

pub mod action;
pub mod api;
pub mod cities;
pub mod components;
pub mod effect;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod testing;
