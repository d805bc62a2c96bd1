//! Weather lookup TUI.
//!
//! Event loop wiring:
//! 1. Terminal events -> `Ui::map_event` -> actions
//! 2. Actions run through the reducer; effects spawn fetch tasks
//! 3. Fetch tasks send `WeatherDid*` result actions back over the channel
//! 4. Re-render whenever state changed
//!
//! ```sh
//! # Interactive
//! weather-lookup
//!
//! # Pre-fill and submit a city on startup
//! weather-lookup Mumbai
//!
//! # Tracing output (the terminal is busy rendering)
//! RUST_LOG=debug weather-lookup --log-file /tmp/weather-lookup.log
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use weather_lookup::action::Action;
use weather_lookup::api::WeatherClient;
use weather_lookup::components::{
    Component, HelpBar, HelpBarProps, ResultPanel, ResultPanelProps, SearchPanel, SearchPanelProps,
};
use weather_lookup::reducer::reducer;
use weather_lookup::runtime::{handle_effect, spawn_event_poller, spawn_tick, EventKind, Tasks};
use weather_lookup::state::{AppState, ANIM_TICK_MS};

/// City weather lookup with autocomplete suggestions.
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "Look up current weather for a known city")]
struct Args {
    /// City to look up immediately on startup
    city: Option<String>,

    /// Write tracing output to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args.city).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct Ui {
    search: SearchPanel,
    result: ResultPanel,
    help: HelpBar,
}

impl Ui {
    fn new() -> Self {
        Self {
            search: SearchPanel::new(),
            result: ResultPanel,
            help: HelpBar,
        }
    }

    fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let suggestion_rows = if state.suggestions.is_empty() {
            0
        } else {
            state.suggestions.len() as u16 + 2
        };
        let chunks = Layout::vertical([
            Constraint::Length(3 + suggestion_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.search.render(
            frame,
            chunks[0],
            SearchPanelProps {
                query: &state.query,
                suggestions: &state.suggestions,
                selected: state.selected,
                is_focused: true,
            },
        );
        self.result
            .render(frame, chunks[1], ResultPanelProps { state });
        self.help.render(frame, chunks[2], HelpBarProps);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            {
                return vec![Action::Quit];
            }
            if key.code == KeyCode::Esc {
                return if state.suggestions.is_empty() {
                    vec![Action::Quit]
                } else {
                    vec![Action::SuggestionsDismiss]
                };
            }
        }
        self.search.handle_event(
            event,
            SearchPanelProps {
                query: &state.query,
                suggestions: &state.suggestions,
                selected: state.selected,
                is_focused: true,
            },
        )
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    startup_city: Option<String>,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let _poller = spawn_event_poller(event_tx, cancel.clone());
    let ticker = spawn_tick(action_tx.clone(), Duration::from_millis(ANIM_TICK_MS));

    let client = WeatherClient::new();
    let mut tasks = Tasks::new(action_tx.clone());
    let mut state = AppState::default();
    let mut ui = Ui::new();
    let mut should_render = true;

    if let Some(city) = startup_city {
        state.query = city.clone();
        let _ = action_tx.send(Action::QuerySubmit(city));
    }

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, &state))?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                if matches!(event, EventKind::Resize(_, _)) {
                    should_render = true;
                }
                for action in ui.map_event(&event, &state) {
                    let _ = action_tx.send(action);
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                tracing::debug!(action = action.name(), "dispatch");
                let result = reducer(&mut state, action);
                for effect in result.effects {
                    handle_effect(effect, &client, &mut tasks);
                }
                should_render |= result.changed;
            }

            else => break,
        }
    }

    cancel.cancel();
    ticker.abort();
    tasks.cancel_all();
    Ok(())
}
