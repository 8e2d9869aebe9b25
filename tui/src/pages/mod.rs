//! Page bodies, one per route.

mod home;
mod legal;
mod not_found;
mod showcase;

use ratatui::{Frame, layout::Rect};

use peaky_engine::{App, Route};

use crate::hit::HitRegions;
use crate::theme::{Glyphs, Palette};

pub(crate) fn draw(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    match app.route() {
        Route::Home => home::draw(frame, app, area, palette, glyphs, hits),
        Route::Privacy => legal::draw(frame, &legal::PRIVACY, area, palette, glyphs),
        Route::DeleteAccount => legal::draw(frame, &legal::DELETE_ACCOUNT, area, palette, glyphs),
        Route::DeleteData => legal::draw(frame, &legal::DELETE_DATA, area, palette, glyphs),
        Route::NotFound => not_found::draw(frame, app, area, palette),
    }
}
