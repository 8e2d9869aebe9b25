//! Navigation bar and footer shared by every chrome page.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use unicode_width::UnicodeWidthStr;

use peaky_engine::{App, Route};

use crate::theme::{Palette, styles};

const BRAND: &str = " Peaky ";
const CTA_TEXT: &str = " ¡Probá Peaky gratis! ";

/// Shortcut shown next to each navigable route.
fn shortcut(route: Route) -> char {
    match route {
        Route::Home => 'h',
        Route::Privacy => 'p',
        Route::DeleteAccount => 'a',
        Route::DeleteData | Route::NotFound => 'd',
    }
}

pub(crate) fn draw_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = vec![Span::styled(BRAND, styles::nav_active(palette)), Span::raw(" ")];
    let mut used = BRAND.width() + 1;

    for route in Route::NAVIGABLE {
        let label = format!(" {} {} ", shortcut(route), route.title());
        // Drop trailing routes rather than wrapping the bar.
        used += label.width();
        if used > usize::from(area.width) {
            break;
        }
        let style = if app.route() == route {
            Style::default().fg(palette.text_primary).bg(palette.bg_highlight)
        } else {
            styles::key_hint(palette)
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

pub(crate) fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut hints = vec![
        Span::styled("←/→", styles::key_highlight(palette)),
        Span::styled(" slides  ", styles::key_hint(palette)),
        Span::styled("m", styles::key_highlight(palette)),
        Span::styled(" movimiento  ", styles::key_hint(palette)),
    ];
    if app.can_go_back() {
        hints.push(Span::styled("b", styles::key_highlight(palette)));
        hints.push(Span::styled(" volver  ", styles::key_hint(palette)));
    }
    hints.push(Span::styled("q", styles::key_highlight(palette)));
    hints.push(Span::styled(" salir", styles::key_hint(palette)));

    let lines = vec![
        Line::from(Span::styled(CTA_TEXT, styles::cta(palette))).alignment(Alignment::Center),
        Line::from(hints).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
