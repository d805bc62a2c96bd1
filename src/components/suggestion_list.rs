//! Suggestion dropdown with keyboard navigation and pointer activation.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::cities::City;
use crate::runtime::EventKind;

pub struct SuggestionListProps<'a> {
    pub items: &'a [City],
    pub selected: usize,
    pub is_focused: bool,
    /// Constructor for the action moving the highlight.
    pub on_nav: fn(usize) -> Action,
    /// Constructor for the action activating an item.
    pub on_pick: fn(usize) -> Action,
}

/// Up/Down move the highlight (clamped); a left click on a row picks it.
#[derive(Default)]
pub struct SuggestionList {
    /// Area of the last render, for pointer hit-testing.
    area: Rect,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a click position to the index of the row under it.
    fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        // First row sits below the top border.
        let index = row.checked_sub(self.area.y + 1)? as usize;
        (index < len).then_some(index)
    }
}

impl Component for SuggestionList {
    type Props<'a> = SuggestionListProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused || props.items.is_empty() {
            return Vec::new();
        }
        let len = props.items.len();

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Down => {
                    let next = (props.selected + 1).min(len - 1);
                    if next != props.selected {
                        vec![(props.on_nav)(next)]
                    } else {
                        Vec::new()
                    }
                }
                KeyCode::Up => {
                    let next = props.selected.saturating_sub(1);
                    if next != props.selected {
                        vec![(props.on_nav)(next)]
                    } else {
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.row_at(mouse.column, mouse.row, len)
                    .map(|index| vec![(props.on_pick)(index)])
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        let items: Vec<ListItem> = props
            .items
            .iter()
            .map(|city| ListItem::new(Line::raw(city.name)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default().with_selected(Some(props.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
