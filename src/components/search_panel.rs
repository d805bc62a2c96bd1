//! Input field, search control and suggestion dropdown wired together.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, SuggestionList, SuggestionListProps, TextInput, TextInputProps};
use crate::action::Action;
use crate::cities::City;
use crate::runtime::EventKind;

const PLACEHOLDER: &str = "Type a city name...";
const BUTTON_WIDTH: u16 = 12;

pub struct SearchPanelProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [City],
    pub selected: usize,
    pub is_focused: bool,
}

/// Enter picks the highlighted suggestion while any are visible, otherwise
/// it submits the raw query. Clicking the search control always submits.
pub struct SearchPanel {
    input: TextInput,
    list: SuggestionList,
    /// Area of the search control from the last render.
    button_area: Rect,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SuggestionList::new(),
            button_area: Rect::default(),
        }
    }
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_props<'a>(props: &SearchPanelProps<'a>) -> SuggestionListProps<'a> {
        SuggestionListProps {
            items: props.suggestions,
            selected: props.selected,
            is_focused: true,
            on_nav: Action::SuggestionNav,
            on_pick: Action::SuggestionPick,
        }
    }
}

impl Component for SearchPanel {
    type Props<'a> = SearchPanelProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match event {
            EventKind::Key(key) => {
                match key.code {
                    KeyCode::Enter => {
                        if !props.suggestions.is_empty() {
                            return vec![Action::SuggestionPick(props.selected)];
                        }
                        return vec![Action::QuerySubmit(props.query.to_string())];
                    }
                    KeyCode::Down | KeyCode::Up => {
                        return self.list.handle_event(event, Self::list_props(&props));
                    }
                    _ => {}
                }
                self.input.handle_event(
                    event,
                    TextInputProps {
                        value: props.query,
                        placeholder: PLACEHOLDER,
                        is_focused: true,
                        on_change: Action::QueryChange,
                        on_submit: Action::QuerySubmit,
                    },
                )
            }
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if self
                    .button_area
                    .contains(Position::new(mouse.column, mouse.row))
                {
                    return vec![Action::QuerySubmit(props.query.to_string())];
                }
                self.list.handle_event(event, Self::list_props(&props))
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

        let row = Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(chunks[0]);

        self.input.render(
            frame,
            row[0],
            TextInputProps {
                value: props.query,
                placeholder: PLACEHOLDER,
                is_focused: props.is_focused,
                on_change: Action::QueryChange,
                on_submit: Action::QuerySubmit,
            },
        );

        self.button_area = row[1];
        let button = Paragraph::new(Line::from("Search").centered())
            .style(Style::default().fg(Color::Cyan).bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, row[1]);

        if !props.suggestions.is_empty() && chunks[1].height > 0 {
            self.list.render(frame, chunks[1], Self::list_props(&props));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CITIES;
    use crate::testing::{click, key, RenderHarness};

    fn props<'a>(query: &'a str, suggestions: &'a [City]) -> SearchPanelProps<'a> {
        SearchPanelProps {
            query,
            suggestions,
            selected: 0,
            is_focused: true,
        }
    }

    #[test]
    fn enter_picks_highlight_when_suggestions_visible() {
        let mut panel = SearchPanel::new();
        let actions =
            panel.handle_event(&EventKind::Key(key("enter")), props("Mum", &CITIES[..1]));
        assert_eq!(actions, vec![Action::SuggestionPick(0)]);
    }

    #[test]
    fn enter_submits_when_no_suggestions() {
        let mut panel = SearchPanel::new();
        let actions =
            panel.handle_event(&EventKind::Key(key("enter")), props("Nonexistent", &[]));
        assert_eq!(actions, vec![Action::QuerySubmit("Nonexistent".into())]);
    }

    #[test]
    fn arrows_navigate_the_list() {
        let mut panel = SearchPanel::new();
        let actions = panel.handle_event(&EventKind::Key(key("down")), props("a", &CITIES[..3]));
        assert_eq!(actions, vec![Action::SuggestionNav(1)]);
    }

    #[test]
    fn typing_reaches_the_input() {
        let mut panel = SearchPanel::new();
        let actions = panel.handle_event(&EventKind::Key(key("m")), props("", &[]));
        assert_eq!(actions, vec![Action::QueryChange("m".into())]);
    }

    #[test]
    fn click_on_search_control_submits() {
        let mut panel = SearchPanel::new();
        let mut harness = RenderHarness::new(40, 12);
        harness.render_to_string_plain(|frame| {
            let area = frame.area();
            panel.render(frame, area, props("Delhi", &[]));
        });

        // The control occupies the rightmost BUTTON_WIDTH columns of row 1.
        let actions = panel.handle_event(&EventKind::Mouse(click(32, 1)), props("Delhi", &[]));
        assert_eq!(actions, vec![Action::QuerySubmit("Delhi".into())]);
    }

    #[test]
    fn click_on_suggestion_row_picks_it() {
        let mut panel = SearchPanel::new();
        let suggestions = &CITIES[..2];
        let mut harness = RenderHarness::new(40, 12);
        harness.render_to_string_plain(|frame| {
            let area = frame.area();
            panel.render(frame, area, props("Mum", suggestions));
        });

        // The list starts under the 3-row input; its first row is at y=4.
        let actions = panel.handle_event(&EventKind::Mouse(click(5, 4)), props("Mum", suggestions));
        assert_eq!(actions, vec![Action::SuggestionPick(0)]);
    }

    #[test]
    fn renders_placeholder_and_control() {
        let mut panel = SearchPanel::new();
        let mut harness = RenderHarness::new(40, 12);
        let output = harness.render_to_string_plain(|frame| {
            let area = frame.area();
            panel.render(frame, area, props("", &[]));
        });

        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains("Search"));
    }
}
