//! Test utilities: event builders and a buffer-snapshot render harness.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

/// Build a `KeyEvent` from a string like `"m"`, `"enter"` or `"ctrl+u"`.
///
/// # Panics
///
/// Panics on an unrecognized key string; this is a test helper.
pub fn key(s: &str) -> KeyEvent {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;
    for part in s.split('+') {
        match part {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => code = Some(parse_code(part, s)),
        }
    }
    KeyEvent {
        code: code.unwrap_or_else(|| panic!("key string {s:?} names no key")),
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn parse_code(part: &str, full: &str) -> KeyCode {
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return KeyCode::Char(c);
    }
    match part {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => panic!("invalid key string {full:?}"),
    }
}

/// Build a left-button press at the given buffer position.
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Renders into a test backend and exposes the buffer as plain text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).expect("test terminal"),
        }
    }

    /// Run a render closure and return the resulting buffer, styles dropped.
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render_to_string_plain(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw to test backend");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Concatenate every cell symbol, one line per buffer row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
