//! Bare 404 page: no navigation bar and no footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use peaky_engine::App;

use crate::theme::{Palette, styles};

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut actions = vec![
        Span::styled(" Volver al Lobby ", styles::nav_active(palette)),
        Span::styled(" (h)", styles::key_hint(palette)),
    ];
    if app.can_go_back() {
        actions.push(Span::raw("   "));
        actions.push(Span::styled(" Regresar ", styles::key_highlight(palette)));
        actions.push(Span::styled(" (b)", styles::key_hint(palette)));
    }

    let lines = vec![
        Line::from(Span::styled(" Error 404 ", Style::default().fg(palette.error))),
        Line::from(""),
        Line::from(vec![
            Span::styled("¡Ups! Este nivel ", styles::heading(palette)),
            Span::styled("está bloqueado", styles::brand(palette)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Parece que te has salido del mapa. La página que buscas no existe.",
            styles::body(palette),
        )),
        Line::from(""),
        Line::from(actions),
    ];

    let height = lines.len() as u16;
    let [content] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content,
    );
}
