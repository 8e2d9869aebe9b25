//! "Producto en acción": the slide renderer for the product carousel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use peaky_engine::{CarouselController, ScreenLayout, Slide};
use peaky_types::ui::UiOptions;
use peaky_types::{MockupSpec, ViewportClass};

use crate::hit::HitRegions;
use crate::input::CELL_WIDTH_PX;
use crate::theme::{Glyphs, Palette, pulse_frame, styles};

const SECTION_TITLE: &str = "Producto en acción";
/// Approximate height of a terminal cell in pixels.
const CELL_HEIGHT_PX: f32 = 16.0;
const PULSE_PERIOD_MS: u128 = 250;

pub(crate) fn draw(
    frame: &mut Frame,
    carousel: &CarouselController,
    options: UiOptions,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let [header, body, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(frame, carousel, options, header, palette, glyphs, hits);
    hits.set_showcase(body);

    let slide = carousel.current_slide();
    let viewport_px = f32::from(frame.area().width) * CELL_WIDTH_PX as f32;
    let [screens, card] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);
    draw_screens(frame, slide, viewport_px, screens, palette);
    draw_card(frame, carousel, card, palette, glyphs, hits);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(glyphs.swipe_hint, styles::key_hint(palette)),
            Span::styled(
                format!("   1-{} ir a slide", carousel.deck().len()),
                styles::key_hint(palette),
            ),
        ]))
        .alignment(Alignment::Center),
        hint,
    );
}

fn draw_header(
    frame: &mut Frame,
    carousel: &CarouselController,
    options: UiOptions,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    let (indicator, label, indicator_style) = if carousel.is_auto_playing() {
        let tick = (carousel.elapsed().as_millis() / PULSE_PERIOD_MS) as usize;
        (
            pulse_frame(tick, options),
            "Auto",
            Style::default().fg(palette.success),
        )
    } else {
        (
            glyphs.status_off,
            "Manual",
            Style::default().fg(palette.text_disabled),
        )
    };
    let status = Line::from(vec![
        Span::styled(indicator, indicator_style),
        Span::styled(format!(" {label}  "), styles::key_hint(palette)),
    ]);
    let suffix = if options.reduced_motion {
        " (movimiento reducido)"
    } else {
        ""
    };

    let left_width = glyphs.chevron_left.width() as u16;
    let right_width = glyphs.chevron_right.width() as u16;
    let [title, status_area, previous, gap, next, suffix_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(status.width() as u16),
        Constraint::Length(left_width),
        Constraint::Length(1),
        Constraint::Length(right_width),
        Constraint::Length(suffix.width() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(SECTION_TITLE, styles::heading(palette))),
        title,
    );
    frame.render_widget(Paragraph::new(status), status_area);

    // Manual controls are presented as disabled under reduced motion.
    let controls_style = if options.reduced_motion {
        Style::default()
            .fg(palette.text_disabled)
            .add_modifier(Modifier::DIM)
    } else {
        hits.set_controls(previous, next);
        styles::key_highlight(palette)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(glyphs.chevron_left, controls_style)),
        previous,
    );
    frame.render_widget(Paragraph::new(" "), gap);
    frame.render_widget(
        Paragraph::new(Span::styled(glyphs.chevron_right, controls_style)),
        next,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(suffix, styles::key_hint(palette))),
        suffix_area,
    );
}

fn draw_screens(frame: &mut Frame, slide: &Slide, viewport_px: f32, area: Rect, palette: &Palette) {
    let mockup = MockupSpec::default().resolve(viewport_px);
    let chrome_px = 2.0 * (mockup.padding + mockup.border);
    let phone_cols = ((mockup.screen_width + chrome_px) / CELL_WIDTH_PX as f32).round() as u16;
    let phone_rows = (mockup.height / CELL_HEIGHT_PX).round() as u16;

    // Small viewports only ever show the primary screen.
    let paired = slide.screen_layout() == ScreenLayout::Paired
        && ViewportClass::from_width(viewport_px) != ViewportClass::Small;

    let mut screens = vec![(slide.image.as_str(), "Vista principal")];
    if paired {
        screens.push((slide.secondary_or_primary(), "Vista secundaria"));
    }

    let width = phone_cols.min(area.width / screens.len() as u16).max(1);
    let height = phone_rows.min(area.height);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let columns = Layout::horizontal(screens.iter().map(|_| Constraint::Length(width)))
        .flex(Flex::SpaceAround)
        .split(row);

    for ((image, alt), column) in screens.into_iter().zip(columns.iter()) {
        let phone = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border));
        let inner = phone.inner(*column);
        frame.render_widget(phone, *column);

        let file_name = image.rsplit('/').next().unwrap_or(image);
        let lines = vec![
            Line::from(Span::styled(
                file_name.to_string(),
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(alt, styles::key_hint(palette))),
        ];
        let [content] = Layout::vertical([Constraint::Length(2)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            content,
        );
    }
}

fn draw_card(
    frame: &mut Frame,
    carousel: &CarouselController,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    let slide = carousel.current_slide();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(slide.title.clone(), styles::heading(palette))),
        Line::from(""),
        Line::from(Span::styled(slide.description.clone(), styles::body(palette))),
        Line::from(""),
    ];
    for feature in &slide.features {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.accent)),
            Span::styled(feature.clone(), Style::default().fg(palette.text_primary)),
        ]));
    }

    let [text, dots] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text);
    draw_dot_row(frame, carousel, dots, palette, glyphs, hits);
}

/// One clickable dot per slide, centered, followed by a "n/len" counter.
fn draw_dot_row(
    frame: &mut Frame,
    carousel: &CarouselController,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitRegions,
) {
    let current = carousel.current_index();
    let len = carousel.deck().len();
    let counter = format!("  {}/{len}", current + 1);

    let dots: Vec<(&str, Style)> = (0..len)
        .map(|index| {
            if index == current {
                (glyphs.dot_active, Style::default().fg(palette.secondary))
            } else {
                (glyphs.dot_inactive, Style::default().fg(palette.text_disabled))
            }
        })
        .collect();
    let total = dots.iter().map(|(glyph, _)| glyph.width()).sum::<usize>()
        + len.saturating_sub(1)
        + counter.width();

    let right = area.x.saturating_add(area.width);
    let mut x = area.x + (area.width.saturating_sub(total as u16)) / 2;
    for (index, (glyph, style)) in dots.into_iter().enumerate() {
        if index > 0 {
            x = x.saturating_add(1);
        }
        let width = glyph.width() as u16;
        if x.saturating_add(width) > right {
            return;
        }
        let cell = Rect::new(x, area.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(glyph, style)), cell);
        hits.push_slide(index, cell);
        x = x.saturating_add(width);
    }

    let counter_area = Rect::new(x, area.y, right.saturating_sub(x), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(counter, styles::key_hint(palette))),
        counter_area,
    );
}
