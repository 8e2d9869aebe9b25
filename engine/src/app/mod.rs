//! Application state: current page, the mounted showcase and UI options.

use std::time::Duration;

use peaky_types::ui::UiOptions;
use peaky_types::{CarouselError, CarouselKey, Route, SlideDeck, Transition};

use crate::carousel::{CarouselController, CarouselTimings};
use crate::catalog;
use crate::config::{PeakyConfig, resolve_ui_options};
use crate::router::{Location, Navigator, RouteChange};


const DEFAULT_START_PATH: &str = "/";

/// Input addressed to the product showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseInput {
    Next,
    Previous,
    GoTo(usize),
    Key(CarouselKey),
    GestureStart(i32),
    GestureMove(i32),
    GestureEnd,
}

#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    deck: SlideDeck,
    timings: CarouselTimings,
    ui_options: UiOptions,
    /// Mounted only while the current page hosts it.
    showcase: Option<CarouselController>,
    last_transition: Option<Transition>,
    should_quit: bool,
}

impl App {
    /// Build the app from an optional config file and the environment.
    pub fn new(config: Option<&PeakyConfig>) -> Result<Self, CarouselError> {
        let deck = catalog::product_mockups()?;
        let timings = config
            .map(PeakyConfig::carousel_timings)
            .unwrap_or_default();
        let ui_options = resolve_ui_options(config);
        let start_path = config
            .and_then(PeakyConfig::start_path)
            .unwrap_or(DEFAULT_START_PATH);
        tracing::info!(flags = ?ui_options.flags(), start_path, "Starting app");
        Ok(Self::with_deck(deck, timings, ui_options, start_path))
    }

    #[must_use]
    pub fn with_deck(
        deck: SlideDeck,
        timings: CarouselTimings,
        ui_options: UiOptions,
        start_path: &str,
    ) -> Self {
        let mut app = Self {
            navigator: Navigator::new(start_path),
            deck,
            timings,
            ui_options,
            showcase: None,
            last_transition: None,
            should_quit: false,
        };
        app.sync_showcase();
        app
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn route(&self) -> Route {
        self.navigator.route()
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        self.navigator.current()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    #[must_use]
    pub fn showcase(&self) -> Option<&CarouselController> {
        self.showcase.as_ref()
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Most recent slide change, for renderers that animate on change.
    #[must_use]
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    pub fn navigate(&mut self, path: &str) -> RouteChange {
        let change = self.navigator.push(path);
        self.after_route_change(change)
    }

    pub fn navigate_to(&mut self, route: Route) -> RouteChange {
        let change = self.navigator.push_route(route);
        self.after_route_change(change)
    }

    pub fn go_back(&mut self) -> RouteChange {
        let change = self.navigator.back();
        self.after_route_change(change)
    }

    fn after_route_change(&mut self, change: RouteChange) -> RouteChange {
        if let RouteChange::Changed { .. } = change {
            self.sync_showcase();
        }
        change
    }

    /// Mount or unmount the showcase to match the current route.
    fn sync_showcase(&mut self) {
        let wanted = self.route().hosts_showcase();
        match (wanted, self.showcase.is_some()) {
            (true, false) => {
                self.showcase = Some(CarouselController::mount(
                    self.deck.clone(),
                    self.timings,
                    self.ui_options.reduced_motion,
                ));
                self.last_transition = None;
            }
            (false, true) => {
                if let Some(showcase) = self.showcase.take() {
                    showcase.unmount();
                }
                self.last_transition = None;
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Showcase
    // ------------------------------------------------------------------

    /// Forward input to the showcase. Ignored when no showcase is mounted.
    pub fn showcase_input(&mut self, input: ShowcaseInput) -> Option<Transition> {
        let showcase = self.showcase.as_mut()?;
        let transition = match input {
            ShowcaseInput::Next => Some(showcase.next()),
            ShowcaseInput::Previous => Some(showcase.previous()),
            ShowcaseInput::GoTo(index) => match showcase.go_to(index) {
                Ok(transition) => Some(transition),
                Err(err) => {
                    tracing::warn!("Ignoring showcase jump: {err}");
                    None
                }
            },
            ShowcaseInput::Key(key) => Some(showcase.on_key(key)),
            ShowcaseInput::GestureStart(x) => {
                showcase.on_gesture_start(x);
                None
            }
            ShowcaseInput::GestureMove(x) => {
                showcase.on_gesture_move(x);
                None
            }
            ShowcaseInput::GestureEnd => showcase.on_gesture_end(),
        };
        if transition.is_some() {
            self.last_transition = transition;
        }
        transition
    }

    /// Advance time by `delta`. Returns the autoplay transitions that fired.
    pub fn tick(&mut self, delta: Duration) -> Vec<Transition> {
        let Some(showcase) = self.showcase.as_mut() else {
            return Vec::new();
        };
        let fired = showcase.advance(delta);
        if let Some(last) = fired.last() {
            self.last_transition = Some(*last);
        }
        fired
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.ui_options.reduced_motion = reduced_motion;
        if let Some(showcase) = self.showcase.as_mut() {
            showcase.set_reduced_motion(reduced_motion);
        }
    }

    pub fn toggle_reduced_motion(&mut self) {
        self.set_reduced_motion(!self.ui_options.reduced_motion);
    }
}
