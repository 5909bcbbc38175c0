//! Drawing the stopwatch

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::digits;

/// Largest font scale used for the big clock
const MAX_SCALE: u16 = 8;

const HELP: &str = "click/space start·stop   F5/r reset   Esc/f fullscreen   q quit";

/// Full-window widget that paints the clock and receives clicks.
///
/// It covers the whole area it is rendered into; [`TapSurface::hit_test`]
/// answers whether a click belongs to it.
#[derive(Debug, Clone)]
pub struct TapSurface<'a> {
    pub text: &'a str,
    pub running: bool,
    pub fullscreen: bool,
    /// Status line shown in windowed mode
    pub status: Option<String>,
}

impl TapSurface<'_> {
    /// Whether a click at `column`, `row` lands on a surface drawn in `area`
    pub fn hit_test(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }

    /// Area left for the clock once chrome is laid out
    pub fn clock_area(&self, area: Rect) -> Rect {
        if self.fullscreen {
            return area;
        }

        let inner = Block::default().borders(Borders::ALL).inner(area);
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(inner)[0]
    }

    fn clock_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.running {
            style.fg(Color::White)
        } else {
            style.fg(Color::Gray)
        }
    }

    fn render_clock(&self, area: Rect, buf: &mut Buffer) {
        let scale = digits::fit_scale(self.text, area.width, area.height, MAX_SCALE);
        let lines: Vec<Line> = if scale == 0 {
            vec![Line::from(self.text)]
        } else {
            digits::render(self.text, scale)
                .into_iter()
                .map(Line::from)
                .collect()
        };

        let height = (lines.len() as u16).min(area.height);
        let top = area.y + (area.height - height) / 2;
        let centered = Rect::new(area.x, top, area.width, height);

        Paragraph::new(lines)
            .style(self.clock_style())
            .alignment(Alignment::Center)
            .render(centered, buf);
    }

    fn render_chrome(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Stopwatch ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let (indicator, color) = if self.running {
            ("● running", Color::LightGreen)
        } else {
            ("■ stopped", Color::LightRed)
        };
        let mut spans = vec![Span::styled(indicator, Style::default().fg(color))];
        if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("   {}", status),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(rows[1], buf);

        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(rows[2], buf);
    }
}

impl Widget for TapSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if !self.fullscreen {
            self.render_chrome(area, buf);
        }
        let clock = self.clock_area(area);
        self.render_clock(clock, buf);
    }
}
