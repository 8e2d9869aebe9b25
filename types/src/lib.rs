//! Core domain types for the Peaky showcase.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod mockup;
mod route;
pub mod ui;

pub use mockup::{MockupFrame, MockupSpec, ViewportClass};
pub use route::{PageLayout, Route, normalize_path};

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Slide Types
// ============================================================================

/// Stable identifier of a slide, unique within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(String);

impl SlideId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the showcase.
///
/// Everything except `id` is display payload: the carousel never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub secondary_image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// How many phone screens a slide is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenLayout {
    Single,
    Paired,
}

impl Slide {
    #[must_use]
    pub fn screen_layout(&self) -> ScreenLayout {
        if self.secondary_image.is_some() {
            ScreenLayout::Paired
        } else {
            ScreenLayout::Single
        }
    }

    /// Image for the second screen; falls back to the primary image.
    #[must_use]
    pub fn secondary_or_primary(&self) -> &str {
        self.secondary_image.as_deref().unwrap_or(&self.image)
    }
}

/// A fixed, ordered, non-empty sequence of slides with unique ids.
///
/// Immutable once built; the carousel indexes into it for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(CarouselError::DuplicateSlideId(slide.id.clone()));
            }
        }
        Ok(Self { slides })
    }

    /// Number of slides. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn position(&self, id: &SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| &slide.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

// ============================================================================
// Carousel Navigation
// ============================================================================

/// Direction of a relative move through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What caused an index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCause {
    /// Button, key or dot selection.
    Manual,
    /// A completed horizontal swipe past the threshold.
    Swipe,
    /// The recurring autoplay timer.
    Autoplay,
}

impl NavCause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NavCause::Manual => "manual",
            NavCause::Swipe => "swipe",
            NavCause::Autoplay => "autoplay",
        }
    }
}

/// Record of a single index change handed to the slide renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub cause: NavCause,
}

/// Keys the carousel listens to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for a deck of {len} slides")]
    InvalidIndex { index: usize, len: usize },
    #[error("a carousel needs at least one slide")]
    EmptyDeck,
    #[error("duplicate slide id: {0}")]
    DuplicateSlideId(SlideId),
}
