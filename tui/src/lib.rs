//! TUI rendering for the Peaky showcase using ratatui.

mod chrome;
mod hit;
mod input;
mod pages;
mod theme;

pub use hit::{HitRegions, HitTarget};
pub use input::{CELL_WIDTH_PX, InputPump, apply_event, apply_frame, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, pulse_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use peaky_engine::{App, PageLayout};

/// Height of the navigation bar.
const NAV_HEIGHT: u16 = 1;
/// Height of the footer (call to action + key hints).
const FOOTER_HEIGHT: u16 = 2;

/// Main draw function.
///
/// Returns the clickable regions of the frame for mouse input.
pub fn draw(frame: &mut Frame, app: &App) -> HitRegions {
    let mut hits = HitRegions::default();
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    match app.route().layout() {
        PageLayout::Chrome => {
            let [nav, body, footer] = Layout::vertical([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .areas(frame.area());

            chrome::draw_nav(frame, app, nav, &palette);
            pages::draw(frame, app, inset(body), &palette, &glyphs, &mut hits);
            chrome::draw_footer(frame, app, footer, &palette);
        }
        PageLayout::Bare => {
            let area = frame.area();
            pages::draw(frame, app, area, &palette, &glyphs, &mut hits);
        }
    }
    hits
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}
