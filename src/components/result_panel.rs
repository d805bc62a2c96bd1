//! Result region: idle hint, loading spinner, faded-in reading, error.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::state::{AppState, DisplayState, WeatherReading, FADE_STEPS};

pub const LOCATION_ICON: &str = "📍 ";
pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ResultPanelProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct ResultPanel;

/// The thermometer line exactly as it is displayed.
pub fn temperature_line(celsius: f32) -> String {
    format!("🌡️ {celsius} °C")
}

/// Foreground color scaled by fade progress; fully faded-in returns `color`.
fn faded(color: Color, fade: u8) -> Color {
    if fade >= FADE_STEPS {
        return color;
    }
    let scale = |c: u8| (u16::from(c) * (u16::from(fade) + 1) / (u16::from(FADE_STEPS) + 1)) as u8;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        other => other,
    }
}

fn temp_color(celsius: f32) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}

fn reading_lines(reading: &WeatherReading, fade: u8) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(
                reading.city.clone(),
                Style::default().fg(faded(Color::Rgb(235, 235, 235), fade)).bold(),
            ),
        ])
        .centered(),
        Line::from(Span::styled(
            temperature_line(reading.temperature),
            Style::default()
                .fg(faded(temp_color(reading.temperature), fade))
                .bold(),
        ))
        .centered(),
        Line::from(Span::styled(
            reading.description.clone(),
            Style::default().fg(faded(Color::Rgb(160, 160, 160), fade)),
        ))
        .centered(),
    ]
}

fn lines_for_state(state: &AppState) -> Vec<Line<'static>> {
    match &state.display {
        DisplayState::Idle => vec![Line::from(Span::styled(
            "Type a city name to look up the weather",
            Style::default().fg(Color::DarkGray),
        ))
        .centered()],
        DisplayState::Loading => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);
            vec![Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" Fetching weather{dots:<3}"),
                    Style::default().fg(Color::Gray),
                ),
            ])
            .centered()]
        }
        DisplayState::Loaded(reading) => reading_lines(reading, state.fade),
        DisplayState::Error(message) => vec![
            Line::from(ERROR_ICON).centered(),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Rgb(220, 100, 100)),
            ))
            .centered(),
        ],
    }
}

impl Component for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" ☁ Weather ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = lines_for_state(props.state);
        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines), centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_line_keeps_unit_suffix() {
        assert_eq!(temperature_line(28.5), "🌡️ 28.5 °C");
        assert_eq!(temperature_line(-3.5), "🌡️ -3.5 °C");
    }

    #[test]
    fn fade_scales_up_to_full_color() {
        let target = Color::Rgb(200, 100, 50);
        assert_eq!(faded(target, FADE_STEPS), target);
        let Color::Rgb(r, g, b) = faded(target, 0) else {
            panic!("faded rgb stays rgb");
        };
        assert!(r < 200 && g < 100 && b < 50);
    }

    #[test]
    fn fade_is_monotonic() {
        let target = Color::Rgb(250, 250, 250);
        let mut last = 0u8;
        for fade in 0..=FADE_STEPS {
            let Color::Rgb(r, _, _) = faded(target, fade) else {
                panic!("faded rgb stays rgb");
            };
            assert!(r >= last);
            last = r;
        }
        assert_eq!(last, 250);
    }
}
