//! Clickable regions recorded while drawing, consulted by mouse input.

use ratatui::layout::{Position, Rect};

/// What a mouse press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Previous,
    Next,
    Slide(usize),
    /// Anywhere else on the showcase body: the start of a swipe.
    Showcase,
}

/// Screen regions of the last drawn frame.
///
/// Empty on pages without a showcase. Controls that are presented as
/// disabled are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    showcase: Option<Rect>,
    previous: Option<Rect>,
    next: Option<Rect>,
    slides: Vec<(usize, Rect)>,
}

impl HitRegions {
    #[must_use]
    pub fn showcase(&self) -> Option<Rect> {
        self.showcase
    }

    #[must_use]
    pub fn previous(&self) -> Option<Rect> {
        self.previous
    }

    #[must_use]
    pub fn next(&self) -> Option<Rect> {
        self.next
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<Rect> {
        self.slides
            .iter()
            .find_map(|(i, rect)| (*i == index).then_some(*rect))
    }

    /// Resolve a press. Controls take precedence over the swipe surface.
    #[must_use]
    pub fn target(&self, column: u16, row: u16) -> Option<HitTarget> {
        let at = Position::new(column, row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(at));

        if inside(self.previous) {
            return Some(HitTarget::Previous);
        }
        if inside(self.next) {
            return Some(HitTarget::Next);
        }
        if let Some((index, _)) = self.slides.iter().find(|(_, r)| r.contains(at)) {
            return Some(HitTarget::Slide(*index));
        }
        inside(self.showcase).then_some(HitTarget::Showcase)
    }

    pub(crate) fn set_showcase(&mut self, area: Rect) {
        self.showcase = Some(area);
    }

    pub(crate) fn set_controls(&mut self, previous: Rect, next: Rect) {
        self.previous = Some(previous);
        self.next = Some(next);
    }

    pub(crate) fn push_slide(&mut self, index: usize, area: Rect) {
        self.slides.push((index, area));
    }
}
