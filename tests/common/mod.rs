//! Shared test utilities and fixtures

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use peaky_engine::{App, CarouselTimings, product_mockups};
use peaky_tui::{HitRegions, apply_event, draw};
use peaky_types::ui::UiOptions;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

pub const SCREEN_WIDTH: u16 = 100;
pub const SCREEN_HEIGHT: u16 = 40;

/// App on the built-in deck with default timings and ASCII glyphs.
pub fn app_at(path: &str) -> App {
    app_with_options(
        path,
        UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
    )
}

pub fn app_with_options(path: &str, options: UiOptions) -> App {
    let deck = product_mockups().expect("built-in deck is valid");
    App::with_deck(deck, CarouselTimings::default(), options, path)
}

/// An app plus the hit regions of its last drawn frame, driven the way the
/// frame loop drives it: every event is followed by a redraw.
pub struct Harness {
    pub app: App,
    pub hits: HitRegions,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    pub fn new(app: App) -> Self {
        let terminal = Terminal::new(TestBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .expect("failed to create terminal");
        let mut harness = Self {
            app,
            hits: HitRegions::default(),
            terminal,
        };
        harness.redraw();
        harness
    }

    pub fn at(path: &str) -> Self {
        Self::new(app_at(path))
    }

    pub fn redraw(&mut self) {
        let app = &self.app;
        let hits = &mut self.hits;
        self.terminal
            .draw(|frame| *hits = draw(frame, app))
            .expect("failed to draw");
    }

    /// Apply one event and redraw. Returns `true` when the app wants to quit.
    pub fn send(&mut self, event: Event) -> bool {
        let quit = apply_event(&mut self.app, event, &self.hits);
        self.redraw();
        quit
    }

    pub fn showcase_area(&self) -> Rect {
        self.hits.showcase().expect("showcase is drawn")
    }

    pub fn index(&self) -> usize {
        self.app
            .showcase()
            .map_or(usize::MAX, |showcase| showcase.current_index())
    }

    pub fn auto_playing(&self) -> bool {
        self.app
            .showcase()
            .is_some_and(|showcase| showcase.is_auto_playing())
    }
}

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn released(c: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(c),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn press(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn release(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Center of a region, where a click surely lands on it.
pub fn center(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y + area.height / 2)
}
