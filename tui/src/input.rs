//! Input handling for the Peaky TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use peaky_engine::{App, CarouselKey, Route, ShowcaseInput};

use crate::hit::{HitRegions, HitTarget};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Approximate width of a terminal cell in pixels.
///
/// Gesture thresholds are expressed in pixels, terminal mouse events in cells.
pub const CELL_WIDTH_PX: i32 = 8;

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the reader unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Run one frame of input: advance the app clock by `delta`, then drain
/// queued input (up to a per-frame budget) into the app.
///
/// `hits` are the regions of the last drawn frame. Returns `true` when the
/// app should quit.
pub fn handle_events(
    app: &mut App,
    input: &mut InputPump,
    delta: Duration,
    hits: &HitRegions,
) -> Result<bool> {
    let mut events = Vec::new();
    while events.len() < MAX_EVENTS_PER_FRAME {
        match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => events.push(ev),
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        }
    }
    Ok(apply_frame(app, delta, events, hits))
}

/// Advance the clock first so input arms its timers at the current time,
/// then apply `events` in order. Returns `true` when the app should quit.
pub fn apply_frame(
    app: &mut App,
    delta: Duration,
    events: impl IntoIterator<Item = Event>,
    hits: &HitRegions,
) -> bool {
    let fired = app.tick(delta);
    if !fired.is_empty() {
        debug!(count = fired.len(), "Autoplay advanced");
    }
    for event in events {
        if apply_event(app, event, hits) {
            return true;
        }
    }
    app.should_quit()
}

/// Apply a single terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event, hits: &HitRegions) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }
            handle_key(app, key);
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse, hits),
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Left => {
            app.showcase_input(ShowcaseInput::Key(CarouselKey::ArrowLeft));
        }
        KeyCode::Right => {
            app.showcase_input(ShowcaseInput::Key(CarouselKey::ArrowRight));
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.showcase_input(ShowcaseInput::GoTo(index));
        }
        KeyCode::Char('h') => {
            app.navigate_to(Route::Home);
        }
        KeyCode::Char('p') => {
            app.navigate_to(Route::Privacy);
        }
        KeyCode::Char('a') => {
            app.navigate_to(Route::DeleteAccount);
        }
        KeyCode::Char('d') => {
            app.navigate_to(Route::DeleteData);
        }
        KeyCode::Char('b') | KeyCode::Backspace => {
            app.go_back();
        }
        KeyCode::Char('m') => {
            app.toggle_reduced_motion();
            debug!(reduced_motion = app.ui_options().reduced_motion, "Motion toggled");
        }
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

/// Presses only count where the last frame drew something clickable; drags
/// and releases only reach the showcase while a gesture it accepted is open.
fn handle_mouse(app: &mut App, mouse: MouseEvent, hits: &HitRegions) {
    let x = i32::from(mouse.column) * CELL_WIDTH_PX;
    let gesture_open = app
        .showcase()
        .is_some_and(|showcase| showcase.state().gesture.start.is_some());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let input = match hits.target(mouse.column, mouse.row) {
                Some(HitTarget::Previous) => ShowcaseInput::Previous,
                Some(HitTarget::Next) => ShowcaseInput::Next,
                Some(HitTarget::Slide(index)) => ShowcaseInput::GoTo(index),
                Some(HitTarget::Showcase) => ShowcaseInput::GestureStart(x),
                None => return,
            };
            app.showcase_input(input);
        }
        MouseEventKind::Drag(MouseButton::Left) if gesture_open => {
            app.showcase_input(ShowcaseInput::GestureMove(x));
        }
        MouseEventKind::Up(MouseButton::Left) if gesture_open => {
            app.showcase_input(ShowcaseInput::GestureEnd);
        }
        _ => {}
    }
}
