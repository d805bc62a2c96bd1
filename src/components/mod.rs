//! UI components.
//!
//! Components are pure views: props carry all read-only data (state slices
//! plus action constructors), `handle_event` returns actions and never
//! mutates application state. Internal UI state such as a cursor position or
//! the last rendered area may live in `&mut self`.

pub mod help_bar;
pub mod result_panel;
pub mod search_panel;
pub mod suggestion_list;
pub mod text_input;

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::runtime::EventKind;

pub use help_bar::{HelpBar, HelpBarProps};
pub use result_panel::{ResultPanel, ResultPanelProps};
pub use search_panel::{SearchPanel, SearchPanelProps};
pub use suggestion_list::{SuggestionList, SuggestionListProps};
pub use text_input::{TextInput, TextInputProps};

/// A UI element that renders from props and emits actions.
pub trait Component {
    /// Read-only data required to render.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
