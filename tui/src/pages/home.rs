use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use peaky_engine::App;

use crate::hit::HitRegions;
use crate::theme::{Glyphs, Palette, styles};

use super::showcase;

const HERO_HEIGHT: u16 = 4;

pub(super) fn draw(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    let [hero, body] =
        Layout::vertical([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)]).areas(area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Conocé a ", styles::heading(palette)),
            Span::styled("Peaky", styles::brand(palette)),
        ]),
        Line::from(vec![
            Span::styled(
                "Nuestro perezoso que representa al alumno que nunca tiene ganas de ",
                styles::body(palette),
            ),
            Span::styled("estudiar.", Style::default().fg(palette.primary)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        hero,
    );

    // The showcase is mounted whenever Home is active.
    if let Some(carousel) = app.showcase() {
        showcase::draw(frame, carousel, app.ui_options(), body, palette, glyphs, hits);
    }
}
