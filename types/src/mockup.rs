//! Responsive sizing of the phone frame that hosts slide screenshots.
//!
//! All values are in CSS-style pixels; the TUI converts them to cells.

const SMALL_BREAKPOINT: f32 = 640.0;
const MEDIUM_BREAKPOINT: f32 = 768.0;
const SMALL_MAX_HEIGHT: f32 = 480.0;
const SMALL_HEIGHT_RATIO: f32 = 0.8;
const SMALL_ASPECT: f32 = 0.45;
const MEDIUM_SCALE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Small,
    Medium,
    Large,
}

impl ViewportClass {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width < SMALL_BREAKPOINT {
            ViewportClass::Small
        } else if width < MEDIUM_BREAKPOINT {
            ViewportClass::Medium
        } else {
            ViewportClass::Large
        }
    }
}

/// Requested frame size before responsive adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockupSpec {
    pub outer_height: f32,
    pub screen_width: f32,
}

impl Default for MockupSpec {
    fn default() -> Self {
        Self {
            outer_height: 640.0,
            screen_width: 280.0,
        }
    }
}

/// Resolved frame geometry for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockupFrame {
    pub height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub padding: f32,
    pub border: f32,
}

impl MockupSpec {
    #[must_use]
    pub fn resolve(self, viewport_width: f32) -> MockupFrame {
        let (height, screen_width, padding, border) = match ViewportClass::from_width(viewport_width)
        {
            ViewportClass::Small => {
                let height = SMALL_MAX_HEIGHT.min(viewport_width * SMALL_HEIGHT_RATIO);
                (height, height * SMALL_ASPECT, 8.0, 3.0)
            }
            ViewportClass::Medium => (
                self.outer_height * MEDIUM_SCALE,
                self.screen_width * MEDIUM_SCALE,
                10.0,
                3.0,
            ),
            ViewportClass::Large => (self.outer_height, self.screen_width, 12.0, 4.0),
        };

        let chrome = padding * 2.0 + border * 2.0;
        MockupFrame {
            height,
            screen_width,
            screen_height: (height - chrome).max(0.0),
            padding,
            border,
        }
    }
}
