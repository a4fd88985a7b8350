//! Rendering.
//!
//! Immediate mode: every frame is drawn from `&App` alone. [`draw`] returns
//! the rectangles of the clickable controls so mouse input can be hit-tested
//! against exactly what is on screen.
//!
//! ```text
//!  Braille
//! ┌──────────────────────────────┐┌───┐
//! │ha o▌                         ││ b │
//! └──────────────────────────────┘└───┘
//!            ┌1────┐  ┌2────┐
//!            │  ●  │  │  ○  │
//!            └─────┘  └─────┘
//!              ... three rows ...
//! ┌Backspace─┐┌────Space─────┐┌──Enter───┐
//! ```

use braille_app::{App, AppEvent, Phase};
use braille_core::CELL_DOTS;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

const CURSOR: &str = "▌";
const DOT_ON: &str = "●";
const DOT_OFF: &str = "○";
const DOT_WIDTH: u16 = 7;
const DOT_HEIGHT: u16 = 3;
const PREVIEW_WIDTH: u16 = 5;
const HELP: &str = "1-6 toggle · Enter commit · Backspace delete · Space space · Esc quit";

/// Screen rectangles of the clickable controls from the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    dots: [Rect; CELL_DOTS],
    backspace: Rect,
    space: Rect,
    enter: Rect,
}

impl HitMap {
    /// Event for a click at terminal cell `(column, row)`, if it lands on a
    /// control.
    pub fn hit(&self, column: u16, row: u16) -> Option<AppEvent> {
        let position = Position::new(column, row);

        if let Some(index) = self.dots.iter().position(|rect| rect.contains(position)) {
            return Some(AppEvent::ToggleDot { index });
        }

        [
            (self.backspace, AppEvent::Backspace),
            (self.space, AppEvent::Space),
            (self.enter, AppEvent::Commit),
        ]
        .into_iter()
        .find_map(|(rect, event)| rect.contains(position).then_some(event))
    }

    /// Rectangle of the dot at grid `index`.
    pub fn dot(&self, index: usize) -> Option<Rect> {
        self.dots.get(index).copied()
    }

    /// Rectangles of the backspace, space and enter buttons.
    pub fn buttons(&self) -> [Rect; 3] {
        [self.backspace, self.space, self.enter]
    }
}

/// Draw the whole composer and report where its controls ended up.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> HitMap {
    let [title, display, cell, buttons, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(DOT_HEIGHT * 3 + 1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(" Braille", Style::new().add_modifier(Modifier::BOLD))),
        title,
    );
    draw_display(frame, app, display);
    let dots = draw_cell(frame, app, cell);
    let [backspace, space, enter] = draw_buttons(frame, app, buttons);
    frame.render_widget(
        Paragraph::new(Span::styled(HELP, Style::new().fg(Color::DarkGray))),
        help,
    );

    HitMap { dots, backspace, space, enter }
}

fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let [text_area, preview_area] =
        Layout::horizontal([Constraint::Min(3), Constraint::Length(PREVIEW_WIDTH)]).areas(area);

    // Keep the cursor visible: show only the tail that fits.
    let room = text_area.width.saturating_sub(3) as usize;
    let text = visible_tail(app.line().as_str(), room);
    let line = Line::from(vec![
        Span::raw(text),
        Span::styled(CURSOR, Style::new().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line).block(Block::bordered()), text_area);

    if let Some(glyph) = app.preview().glyph() {
        let style = match app.phase() {
            Phase::Ready => Style::new().add_modifier(Modifier::BOLD),
            Phase::Composing | Phase::Idle => Style::new().fg(Color::DarkGray),
        };
        let preview = Paragraph::new(Span::styled(glyph.to_string(), style))
            .centered()
            .block(Block::bordered());
        frame.render_widget(preview, preview_area);
    }
}

fn draw_cell(frame: &mut Frame<'_>, app: &App, area: Rect) -> [Rect; CELL_DOTS] {
    let rows: [Rect; 3] = Layout::vertical([Constraint::Length(DOT_HEIGHT); 3])
        .flex(Flex::Center)
        .areas(area);

    let mut rects = [Rect::default(); CELL_DOTS];
    for (row, row_area) in rows.into_iter().enumerate() {
        let columns: [Rect; 2] = Layout::horizontal([Constraint::Length(DOT_WIDTH); 2])
            .flex(Flex::Center)
            .spacing(2)
            .areas(row_area);

        for (column, rect) in columns.into_iter().enumerate() {
            let index = row * 2 + column;
            let on = app.dots().is_on(index);
            let (symbol, style) = if on {
                (DOT_ON, Style::new().fg(Color::White).add_modifier(Modifier::BOLD))
            } else {
                (DOT_OFF, Style::new().fg(Color::DarkGray))
            };

            let dot = Paragraph::new(Span::styled(symbol, style))
                .centered()
                .block(Block::bordered().title(format!("{}", index + 1)));
            frame.render_widget(dot, rect);

            if let Some(slot) = rects.get_mut(index) {
                *slot = rect;
            }
        }
    }
    rects
}

fn draw_buttons(frame: &mut Frame<'_>, app: &App, area: Rect) -> [Rect; 3] {
    let rects: [Rect; 3] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(4), Constraint::Fill(3)])
            .spacing(1)
            .areas(area);

    let enter_style = if app.can_commit() {
        Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    let buttons = [
        ("Backspace", Style::new().fg(Color::Red)),
        ("Space", Style::new()),
        ("Enter", enter_style),
    ];

    for ((label, style), rect) in buttons.into_iter().zip(rects) {
        let button = Paragraph::new(Span::styled(label, style))
            .centered()
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, rect);
    }
    rects
}

/// Last `width` characters of `text`.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    match text.char_indices().nth(count - width) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fits() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello", 5), "hello");
    }

    #[test]
    fn tail_truncates_from_the_left() {
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn empty_hit_map_hits_nothing() {
        assert_eq!(HitMap::default().hit(0, 0), None);
    }

    #[test]
    fn hit_dot_and_buttons() {
        let mut hits = HitMap::default();
        hits.dots[4] = Rect::new(10, 10, 7, 3);
        hits.enter = Rect::new(30, 20, 10, 3);

        assert_eq!(hits.hit(12, 11), Some(AppEvent::ToggleDot { index: 4 }));
        assert_eq!(hits.hit(39, 22), Some(AppEvent::Commit));
        assert_eq!(hits.hit(40, 22), None);
        assert_eq!(hits.hit(17, 11), None);
    }
}
