//! Product showcase carousel: slide index, autoplay and swipe handling.
//!
//! # State machine
//!
//! ```text
//!   mount ──▶ Auto ──next/previous/go_to/swipe──▶ Cooling ──cooldown──▶ Auto
//!              │                                     ▲
//!              └──── on_gesture_start ──▶ Held ──────┘ on_gesture_end
//! ```
//!
//! With reduced motion on, `Auto` is never entered.
//!
//! Exactly two timers exist, each in a single `Option` slot: the autoplay
//! interval (owned by [`CarouselController::set_auto_playing`]) and the
//! cooldown one-shot (armed only by `register_manual_navigation`). Re-arming
//! replaces the slot, so timers never stack.
//!
//! Time is the controller's own monotonic clock, advanced by the host through
//! [`CarouselController::advance`].

use std::mem;
use std::time::Duration;

use peaky_types::{
    CarouselError, CarouselKey, Direction, NavCause, Slide, SlideDeck, Transition,
};

use crate::timer::{Interval, OneShot, sanitize_period};


pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);
/// Horizontal travel, in pixels, a gesture must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

/// Timing and gesture tuning for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub autoplay_interval: Duration,
    pub cooldown: Duration,
    pub swipe_threshold: i32,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            cooldown: DEFAULT_COOLDOWN,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Horizontal samples of an in-progress touch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSamples {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

/// Observable carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_auto_playing: bool,
    pub gesture: GestureSamples,
}

/// Due instants of the pending timers, on the controller's clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingTimers {
    pub autoplay: Option<Duration>,
    pub cooldown: Option<Duration>,
}

impl PendingTimers {
    #[must_use]
    pub fn count(self) -> usize {
        usize::from(self.autoplay.is_some()) + usize::from(self.cooldown.is_some())
    }
}

/// What was left when a controller was unmounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmounted {
    pub final_index: usize,
    pub cancelled_timers: usize,
}

enum Due {
    Cooldown(Duration),
    Autoplay(Duration),
}

#[derive(Debug)]
pub struct CarouselController {
    deck: SlideDeck,
    timings: CarouselTimings,
    state: CarouselState,
    reduced_motion: bool,
    /// Time since mount.
    clock: Duration,
    autoplay_timer: Option<Interval>,
    cooldown_timer: Option<OneShot>,
}

impl CarouselController {
    /// Mount a controller at slide 0.
    ///
    /// Autoplay starts immediately unless `reduced_motion` is set.
    #[must_use]
    pub fn mount(deck: SlideDeck, timings: CarouselTimings, reduced_motion: bool) -> Self {
        let timings = CarouselTimings {
            autoplay_interval: sanitize_period(timings.autoplay_interval),
            ..timings
        };
        let mut controller = Self {
            deck,
            timings,
            state: CarouselState {
                current_index: 0,
                is_auto_playing: false,
                gesture: GestureSamples::default(),
            },
            reduced_motion,
            clock: Duration::ZERO,
            autoplay_timer: None,
            cooldown_timer: None,
        };
        controller.set_auto_playing(true);
        tracing::info!(
            slides = controller.deck.len(),
            reduced_motion,
            "Carousel mounted"
        );
        controller
    }

    /// Cancel every pending timer and give up the deck.
    pub fn unmount(mut self) -> Unmounted {
        let cancelled_timers = self.pending_timers().count();
        self.autoplay_timer = None;
        self.cooldown_timer = None;
        tracing::info!(
            final_index = self.state.current_index,
            cancelled_timers,
            "Carousel unmounted"
        );
        Unmounted {
            final_index: self.state.current_index,
            cancelled_timers,
        }
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.state.is_auto_playing
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn timings(&self) -> CarouselTimings {
        self.timings
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        // current_index is kept in bounds by every transition
        &self.deck.as_slice()[self.state.current_index]
    }

    /// Time since mount.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn pending_timers(&self) -> PendingTimers {
        PendingTimers {
            autoplay: self.autoplay_timer.map(Interval::due_at),
            cooldown: self.cooldown_timer.map(OneShot::due_at),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> Transition {
        self.navigate(Direction::Forward, NavCause::Manual)
    }

    pub fn previous(&mut self) -> Transition {
        self.navigate(Direction::Backward, NavCause::Manual)
    }

    /// Jump to `index`. Out-of-range input is rejected and leaves state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<Transition, CarouselError> {
        let len = self.deck.len();
        if index >= len {
            tracing::warn!(index, len, "Rejected out-of-range slide jump");
            return Err(CarouselError::InvalidIndex { index, len });
        }
        let transition = self.set_index(index, NavCause::Manual);
        self.register_manual_navigation();
        Ok(transition)
    }

    pub fn on_key(&mut self, key: CarouselKey) -> Transition {
        match key {
            CarouselKey::ArrowLeft => self.previous(),
            CarouselKey::ArrowRight => self.next(),
        }
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    pub fn on_gesture_start(&mut self, x: i32) {
        self.state.gesture = GestureSamples {
            start: Some(x),
            end: None,
        };
        // A pending cooldown must not resume autoplay under the user's finger.
        self.cooldown_timer = None;
        self.set_auto_playing(false);
    }

    pub fn on_gesture_move(&mut self, x: i32) {
        self.state.gesture.end = Some(x);
    }

    /// Finish a gesture, navigating if it travelled past the swipe threshold.
    ///
    /// The cooldown is re-armed even for sub-threshold gestures. An end with
    /// no recorded start is a stray release and is ignored.
    pub fn on_gesture_end(&mut self) -> Option<Transition> {
        let GestureSamples { start, end } = mem::take(&mut self.state.gesture);
        let start = start?;

        let transition = end.and_then(|end| {
            let distance = start.saturating_sub(end);
            if distance > self.timings.swipe_threshold {
                Some(self.navigate(Direction::Forward, NavCause::Swipe))
            } else if distance < -self.timings.swipe_threshold {
                Some(self.navigate(Direction::Backward, NavCause::Swipe))
            } else {
                tracing::debug!(distance, "Gesture below swipe threshold");
                None
            }
        });

        if transition.is_none() {
            self.register_manual_navigation();
        }
        transition
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance the clock by `delta`, firing due timers in chronological order.
    ///
    /// Returns the autoplay transitions that happened along the way.
    pub fn advance(&mut self, delta: Duration) -> Vec<Transition> {
        let target = self.clock.saturating_add(delta);
        let mut fired = Vec::new();

        while let Some(due) = self.next_due(target) {
            match due {
                Due::Cooldown(at) => {
                    self.clock = at;
                    self.cooldown_timer = None;
                    tracing::debug!(at_ms = at.as_millis(), "Interaction cooldown elapsed");
                    self.set_auto_playing(true);
                }
                Due::Autoplay(at) => {
                    self.clock = at;
                    if let Some(timer) = self.autoplay_timer.as_mut() {
                        timer.reschedule();
                    }
                    fired.push(self.step(Direction::Forward, NavCause::Autoplay));
                }
            }
        }

        self.clock = target;
        fired
    }

    /// Follow a live change of the reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.reduced_motion == reduced_motion {
            return;
        }
        self.reduced_motion = reduced_motion;
        tracing::info!(reduced_motion, "Carousel motion preference changed");

        if reduced_motion {
            self.cooldown_timer = None;
            self.set_auto_playing(false);
        } else if self.cooldown_timer.is_none() && self.state.gesture.start.is_none() {
            self.set_auto_playing(true);
        }
    }

    /// The single owner of the autoplay interval.
    ///
    /// Turning autoplay on is refused while reduced motion is requested. Every
    /// effective toggle drops the old interval and, when on, arms a fresh one.
    pub fn set_auto_playing(&mut self, on: bool) {
        let on = on && !self.reduced_motion;
        if on == self.state.is_auto_playing {
            return;
        }
        self.state.is_auto_playing = on;
        self.autoplay_timer =
            on.then(|| Interval::starting_at(self.clock, self.timings.autoplay_interval));
        tracing::debug!(auto_playing = on, "Carousel autoplay toggled");
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn navigate(&mut self, direction: Direction, cause: NavCause) -> Transition {
        let transition = self.step(direction, cause);
        self.register_manual_navigation();
        transition
    }

    /// Suspend autoplay and (re)arm the single cooldown timer.
    fn register_manual_navigation(&mut self) {
        self.set_auto_playing(false);
        self.cooldown_timer = Some(OneShot::after(self.clock, self.timings.cooldown));
    }

    fn step(&mut self, direction: Direction, cause: NavCause) -> Transition {
        let len = self.deck.len();
        let current = self.state.current_index;
        let to = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
        };
        self.set_index(to, cause)
    }

    fn set_index(&mut self, to: usize, cause: NavCause) -> Transition {
        let from = self.state.current_index;
        self.state.current_index = to;
        tracing::debug!(from, to, cause = cause.as_str(), "Carousel moved");
        Transition { from, to, cause }
    }

    fn next_due(&self, target: Duration) -> Option<Due> {
        let cooldown = self
            .cooldown_timer
            .map(OneShot::due_at)
            .filter(|at| *at <= target);
        let autoplay = self
            .autoplay_timer
            .map(Interval::due_at)
            .filter(|at| *at <= target);

        match (cooldown, autoplay) {
            (Some(c), Some(a)) if a < c => Some(Due::Autoplay(a)),
            (Some(c), _) => Some(Due::Cooldown(c)),
            (None, Some(a)) => Some(Due::Autoplay(a)),
            (None, None) => None,
        }
    }
}
