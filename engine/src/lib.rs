//! Core engine for the Peaky showcase - state machines and orchestration.
//!
//! This crate contains the App state, router and carousel without TUI dependencies.

mod app;
pub mod carousel;
mod catalog;
mod config;
mod router;
mod timer;

pub use app::{App, ShowcaseInput};
pub use carousel::{
    CarouselController, CarouselState, CarouselTimings, GestureSamples, PendingTimers, Unmounted,
};
pub use catalog::product_mockups;
pub use config::{AppConfig, CarouselConfig, ConfigError, PeakyConfig, parse_flag};
pub use router::{Location, Navigator, RouteChange};

pub use peaky_types::{
    CarouselError, CarouselKey, Direction, NavCause, PageLayout, Route, ScreenLayout, Slide,
    SlideDeck, SlideId, Transition,
};
