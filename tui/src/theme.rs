//! Color theme and glyphs for the Peaky TUI.
//!
//! Violet/indigo brand palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use peaky_types::ui::UiOptions;

/// Brand palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(17, 16, 29);
    pub const BG_PANEL: Color = Color::Rgb(28, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(46, 40, 79);
    pub const BG_BORDER: Color = Color::Rgb(76, 68, 120);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246); // gray-100
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219); // gray-300
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175); // gray-400
    pub const TEXT_DISABLED: Color = Color::Rgb(107, 114, 128); // gray-500

    // === Brand ===
    pub const VIOLET: Color = Color::Rgb(124, 58, 237); // violet-600
    pub const INDIGO: Color = Color::Rgb(79, 70, 229); // indigo-600
    pub const INDIGO_SOFT: Color = Color::Rgb(99, 102, 241); // indigo-500

    // === Accent Colors ===
    pub const GREEN: Color = Color::Rgb(34, 197, 94); // green-500
    pub const RED: Color = Color::Rgb(239, 68, 68); // red-500
    pub const YELLOW: Color = Color::Rgb(234, 179, 8); // yellow-500
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::VIOLET,
            secondary: colors::INDIGO,
            accent: colors::INDIGO_SOFT,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::LightMagenta,
            secondary: Color::LightBlue,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and indicators.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub chevron_left: &'static str,
    pub chevron_right: &'static str,
    pub status_on: &'static str,
    pub status_off: &'static str,
    pub swipe_hint: &'static str,
    pub pulse_frames: &'static [&'static str],
}

const PULSE_FRAMES: &[&str] = &["●", "◉", "○", "◉"];
const PULSE_FRAMES_ASCII: &[&str] = &["*", "o", ".", "o"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            dot_active: "==",
            dot_inactive: "-",
            chevron_left: "<",
            chevron_right: ">",
            status_on: "*",
            status_off: "o",
            swipe_hint: "<- arrastra para navegar ->",
            pulse_frames: PULSE_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            bullet: "•",
            dot_active: "━━",
            dot_inactive: "•",
            chevron_left: "‹",
            chevron_right: "›",
            status_on: "●",
            status_off: "○",
            swipe_hint: "👈 Deslizá para navegar 👉",
            pulse_frames: PULSE_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn pulse_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).pulse_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn cta(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.secondary)
            .add_modifier(Modifier::BOLD)
    }
}
