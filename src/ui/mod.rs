//! Terminal UI module
//!
//! Owns the terminal for the lifetime of the app: draws the clock, turns
//! mouse and key events into timer commands, and redraws whenever the
//! refresh task publishes new clock text.

pub mod digits;
pub mod input;
pub mod render;

use std::{
    io::{self, Write},
    sync::Arc,
};
use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::{state::AppState, utils::shutdown_signal};
pub use input::Command;
pub use render::TapSurface;

const TITLE: &str = "Stopwatch";

/// UI-side view of the application
pub struct App {
    state: Arc<AppState>,
    display: watch::Receiver<String>,
    /// Area the tap surface covered on the last draw
    surface: Rect,
}

impl App {
    pub fn new(state: Arc<AppState>) -> Self {
        let display = state.subscribe();
        Self {
            state,
            display,
            surface: Rect::default(),
        }
    }

    /// Draw one frame. Marks the current clock text as seen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let text = self.display.borrow_and_update().clone();
        let running = match self.state.snapshot() {
            Ok(snapshot) => snapshot.running,
            Err(e) => {
                error!("Failed to read timer for drawing: {}", e);
                false
            }
        };
        let status = self
            .state
            .last_action()
            .map(|(action, at)| format!("last: {} at {}", action, at.format("%H:%M:%S")));

        self.surface = frame.area();
        frame.render_widget(
            TapSurface {
                text: &text,
                running,
                fullscreen: self.state.is_fullscreen(),
                status,
            },
            self.surface,
        );
    }

    /// Apply a terminal event. Returns `false` when the app should quit.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let Some(command) = input::map_event(event, self.surface) else {
            return true;
        };
        debug!("Input {:?} -> {:?}", event, command);

        match command {
            Command::Toggle => {
                if let Err(e) = self.state.toggle() {
                    error!("Failed to toggle timer: {}", e);
                }
            }
            Command::Reset => {
                if let Err(e) = self.state.reset() {
                    error!("Failed to reset timer: {}", e);
                }
            }
            Command::ToggleFullscreen => {
                self.state.toggle_fullscreen();
            }
            Command::Quit => {
                info!("Quit requested");
                return false;
            }
        }
        true
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Take over the terminal, run the UI until quit, then restore the terminal
pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let mut app = App::new(state);
    let res = run_app(&mut terminal, &mut app).await;

    restore_terminal().context("Failed to restore terminal")?;
    res
}

/// Restore the terminal before the default hook prints the panic message.
/// Runs under `panic = "abort"` too, since hooks fire before the abort.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn setup_terminal() -> anyhow::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let terminal = enter_or_leave(&mut io::stdout(), |_| {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        Ok(terminal)
    });
    if terminal.is_err() {
        let _ = disable_raw_mode();
    }
    Ok(terminal?)
}

/// Switch `out` to the alternate screen with mouse capture, then run
/// `build`. If either step fails, the screen changes are undone before the
/// error is returned.
fn enter_or_leave<W, T, F>(out: &mut W, build: F) -> io::Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<T>,
{
    let result = match execute!(out, EnterAlternateScreen, EnableMouseCapture, SetTitle(TITLE)) {
        Ok(()) => build(out),
        Err(e) => Err(e),
    };
    if result.is_err() {
        let _ = leave_screen(out);
    }
    result
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    leave_screen(&mut io::stdout())?;
    Ok(())
}

async fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        terminal.draw(|f| app.draw(f))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if !app.handle_event(&event) {
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => {
                    info!("Terminal event stream closed");
                    return Ok(());
                }
            },
            changed = app.display.changed() => {
                if changed.is_err() {
                    info!("Display channel closed");
                    return Ok(());
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                return Ok(());
            }
        }
    }
}
