//! Virtual terminal backend for rendering tests.
//!
//! Frames are encoded as ANSI escape sequences and fed into a `vt100::Parser`,
//! so assertions see the screen the way a real terminal would show it.

use std::fmt;
use std::io::{self, Write};

use crossterm::{Command, cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    /// Full screen contents, one line per row with trailing blanks dropped.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// Text of a single row.
    pub fn row(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.width)
            .nth(usize::from(row))
            .unwrap_or_default()
    }

    /// Position (row, column) of the first cell where `needle` starts.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.height).find_map(|row| {
            let text = self.row(row);
            let byte = text.find(needle)?;
            let column = text[..byte].chars().count();
            Some((row, column as u16))
        })
    }

    fn process(&mut self, command: impl Command) {
        let mut buf = String::new();
        let _ = command.write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
    }
}

impl Write for VT100Backend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contents())
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        use std::fmt::Write as _;

        let mut buf = String::new();
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut current_style: Option<Style> = None;

        for (x, y, cell) in content {
            if cursor_at != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut buf);
            }

            let cell_style = cell.style();
            if current_style != Some(cell_style) {
                let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(&mut buf);
                if let Some(fg) = to_crossterm_color(cell_style.fg) {
                    let _ = style::SetForegroundColor(fg).write_ansi(&mut buf);
                }
                if let Some(bg) = to_crossterm_color(cell_style.bg) {
                    let _ = style::SetBackgroundColor(bg).write_ansi(&mut buf);
                }
                current_style = Some(cell_style);
            }

            let _ = write!(buf, "{}", cell.symbol());
            cursor_at = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, column) = self.parser.screen().cursor_position();
        Ok(Position::new(column, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let position = position.into();
        self.process(cursor::MoveTo(position.x, position.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.process(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm_color(color: Option<Color>) -> Option<style::Color> {
    use crossterm::style::Color as C;

    match color? {
        Color::Reset => None,
        Color::Black => Some(C::Black),
        Color::Red => Some(C::DarkRed),
        Color::Green => Some(C::DarkGreen),
        Color::Yellow => Some(C::DarkYellow),
        Color::Blue => Some(C::DarkBlue),
        Color::Magenta => Some(C::DarkMagenta),
        Color::Cyan => Some(C::DarkCyan),
        Color::Gray => Some(C::Grey),
        Color::DarkGray => Some(C::DarkGrey),
        Color::LightRed => Some(C::Red),
        Color::LightGreen => Some(C::Green),
        Color::LightYellow => Some(C::Yellow),
        Color::LightBlue => Some(C::Blue),
        Color::LightMagenta => Some(C::Magenta),
        Color::LightCyan => Some(C::Cyan),
        Color::White => Some(C::White),
        Color::Rgb(r, g, b) => Some(C::Rgb { r, g, b }),
        Color::Indexed(i) => Some(C::AnsiValue(i)),
    }
}
