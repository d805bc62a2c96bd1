//! Single-line text input with cursor.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::runtime::EventKind;

pub struct TextInputProps<'a> {
    pub value: &'a str,
    /// Shown dimmed while the value is empty.
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Constructor for the action emitted on every edit.
    pub on_change: fn(String) -> Action,
    /// Constructor for the action emitted on Enter.
    pub on_submit: fn(String) -> Action,
}

/// Handles typing, backspace, delete and cursor movement; emits `on_change`
/// per edit and `on_submit` for Enter.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position as a byte index into the value.
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor - 1;
        while pos > 0 && !value.is_char_boundary(pos) {
            pos -= 1;
        }
        self.cursor = pos;
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor >= value.len() {
            return;
        }
        let mut pos = self.cursor + 1;
        while pos < value.len() && !value.is_char_boundary(pos) {
            pos += 1;
        }
        self.cursor = pos;
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            next.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(next)
    }
}

impl Component for TextInput {
    type Props<'a> = TextInputProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    Vec::new()
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    Vec::new()
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    vec![(props.on_change)(String::new())]
                }
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Char(c) => vec![(props.on_change)(self.insert_char(props.value, c))],
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| vec![(props.on_change)(v)])
                .unwrap_or_default(),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| vec![(props.on_change)(v)])
                .unwrap_or_default(),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                Vec::new()
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                Vec::new()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Vec::new()
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                Vec::new()
            }
            KeyCode::Enter => vec![(props.on_submit)(props.value.to_string())],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(paragraph, area);

        if props.is_focused && area.width > 2 {
            let cursor_x = (area.x + 1 + self.cursor as u16).min(area.x + area.width - 2);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::key;

    fn props(value: &str) -> TextInputProps<'_> {
        TextInputProps {
            value,
            placeholder: "Type a city name...",
            is_focused: true,
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }

    #[test]
    fn typing_emits_change() {
        let mut input = TextInput::new();
        let actions = input.handle_event(&EventKind::Key(key("m")), props(""));
        assert_eq!(actions, vec![Action::QueryChange("m".into())]);
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new();
        input.cursor = 3;
        let actions = input.handle_event(&EventKind::Key(key("!")), props("Mum"));
        assert_eq!(actions, vec![Action::QueryChange("Mum!".into())]);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new();
        input.cursor = 3;
        let actions = input.handle_event(&EventKind::Key(key("backspace")), props("Mum"));
        assert_eq!(actions, vec![Action::QueryChange("Mu".into())]);
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_silent() {
        let mut input = TextInput::new();
        let actions = input.handle_event(&EventKind::Key(key("backspace")), props("Mum"));
        assert!(actions.is_empty());
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = TextInput::new();
        let actions = input.handle_event(&EventKind::Key(key("enter")), props("Mumbai"));
        assert_eq!(actions, vec![Action::QuerySubmit("Mumbai".into())]);
    }

    #[test]
    fn ctrl_u_clears() {
        let mut input = TextInput::new();
        input.cursor = 3;
        let actions = input.handle_event(&EventKind::Key(key("ctrl+u")), props("Mum"));
        assert_eq!(actions, vec![Action::QueryChange(String::new())]);
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut input = TextInput::new();
        let mut p = props("");
        p.is_focused = false;
        let actions = input.handle_event(&EventKind::Key(key("m")), p);
        assert!(actions.is_empty());
    }
}
