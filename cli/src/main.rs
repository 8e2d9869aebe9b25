//! Peaky CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`peaky_engine`] (application state) and [`peaky_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new(mode) -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence drives everything:
//!
//! 1. Wait for frame tick
//! 2. Advance the app clock by the measured elapsed time
//! 3. Drain input queue (non-blocking via [`peaky_tui::InputPump`]), hit-testing
//!    mouse presses against the regions of the previous frame
//! 4. Render frame and keep its hit regions

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{TerminalOptions, Viewport, prelude::*};
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use peaky_engine::{App, PeakyConfig};
use peaky_tui::{HitRegions, InputPump, draw, handle_events};

/// Height of the inline viewport.
const INLINE_VIEWPORT_HEIGHT: u16 = 30;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_peaky_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_peaky_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in peaky_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn peaky_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.peaky/logs/peaky.log
    if let Some(config_path) = PeakyConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("peaky.log"));
    }

    // Fallback: ./.peaky/logs/peaky.log
    candidates.push(PathBuf::from(".peaky").join("logs").join("peaky.log"));

    candidates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiMode {
    Full,
    Inline,
}

impl UiMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(UiMode::Inline),
            "full" | "fullscreen" => Some(UiMode::Full),
            _ => None,
        }
    }

    fn from_config(config: Option<&PeakyConfig>) -> Option<Self> {
        let raw = config
            .and_then(|cfg| cfg.app.as_ref())
            .and_then(|app| app.tui.as_deref())?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown tui mode in config: {}", raw);
        }
        mode
    }

    fn from_env() -> Option<Self> {
        env::var("PEAKY_TUI").ok().and_then(|value| Self::parse(&value))
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, mouse capture (for swipe gestures) and, in full mode,
/// the alternate screen. On drop, all terminal state is restored so the
/// terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    use_alternate_screen: bool,
}

impl TerminalSession {
    fn new(mode: UiMode) -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let use_alternate_screen = matches!(mode, UiMode::Full);
        if use_alternate_screen && let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match mode {
            UiMode::Full => Terminal::new(backend),
            UiMode::Inline => Terminal::with_options(
                backend,
                TerminalOptions {
                    viewport: Viewport::Inline(INLINE_VIEWPORT_HEIGHT),
                },
            ),
        };
        let terminal = match terminal {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                if use_alternate_screen {
                    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                } else {
                    let _ = execute!(out, DisableMouseCapture);
                }
                return Err(err.into());
            }
        };

        Ok(Self {
            terminal,
            use_alternate_screen,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.use_alternate_screen {
            let _ = execute!(
                self.terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            );
        } else {
            let _ = self.terminal.clear();
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match PeakyConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %e.path().display(), "Ignoring config: {e}");
            None
        }
    };
    let ui_mode = UiMode::from_config(config.as_ref())
        .or_else(UiMode::from_env)
        .unwrap_or(UiMode::Full);
    let mut app = App::new(config.as_ref())?;

    let result = {
        let mut session = TerminalSession::new(ui_mode)?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();
    let mut hits = HitRegions::default();

    let result: Result<()> = loop {
        frames.tick().await;

        let now = Instant::now();
        let delta = now.duration_since(last_tick);
        last_tick = now;

        // Clock first, then queued input (drain only)
        let quit_now = match handle_events(app, &mut input, delta, &hits) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        if let Err(e) = terminal.draw(|frame| hits = draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
