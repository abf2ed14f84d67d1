//! # ProductList Component
//!
//! Scrollable list of catalog rows. Every row is [`ROW_HEIGHT`] lines tall.
//! Rows that have never been scrolled at least half into view render a
//! placeholder block of identical dimensions; once a row is latched in the
//! [`VisibilityLatch`] it always renders its full content, even after
//! scrolling away and back.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProductListState` lives in `TuiState`
//! - `ProductList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Product;
use crate::core::visibility::VisibilityLatch;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Fixed height of one list row, in terminal lines.
pub const ROW_HEIGHT: u16 = 3;

/// Loading spinner frames (shared with the status bar).
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// High-level events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListEvent {
    /// Enter on a row — open the detail screen for this index.
    Open(usize),
}

/// Persistent scroll and selection state for the product list.
pub struct ProductListState {
    pub selected: Option<usize>,
    /// Index of the first (possibly fully) visible row.
    pub scroll_row: usize,
    /// Row capacity of the viewport, cached during the last render pass so
    /// event handling can clamp scrolling without a frame reference.
    last_viewport_rows: usize,
    /// Item count as of the last render, for the same reason.
    last_len: usize,
}

impl ProductListState {
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_row: 0,
            last_viewport_rows: 0,
            last_len: 0,
        }
    }

    /// Clamp selection and scroll after the derived list changed size.
    /// Called whenever a filter input changes the rendered sequence.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            self.scroll_row = 0;
        } else {
            self.selected = self.selected.map(|i| i.min(len - 1));
            self.scroll_row = self.scroll_row.min(len - 1);
        }
        self.last_len = len;
    }

    pub fn select_prev(&mut self) {
        if self.last_len == 0 {
            return;
        }
        let idx = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(idx);
        self.scroll_to_selected();
    }

    pub fn select_next(&mut self) {
        if self.last_len == 0 {
            return;
        }
        let idx = match self.selected {
            Some(i) => (i + 1).min(self.last_len - 1),
            None => 0,
        };
        self.selected = Some(idx);
        self.scroll_to_selected();
    }

    fn scroll_to_selected(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let rows = self.last_viewport_rows.max(1);
        if selected < self.scroll_row {
            self.scroll_row = selected;
        } else if selected >= self.scroll_row + rows {
            self.scroll_row = selected + 1 - rows;
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max_scroll = self
            .last_len
            .saturating_sub(self.last_viewport_rows.max(1));
        let next = self.scroll_row as isize + delta;
        self.scroll_row = next.clamp(0, max_scroll as isize) as usize;
    }

    /// Ids of the rows currently at least 50% on screen, given the viewport.
    /// Fully visible rows always qualify; a partially clipped bottom row
    /// qualifies only when at least half its lines fit.
    pub fn viewable_ids(&self, area: Rect, items: &[Product]) -> Vec<u64> {
        let full_rows = (area.height / ROW_HEIGHT) as usize;
        let partial_lines = area.height % ROW_HEIGHT;
        let mut count = full_rows;
        if partial_lines * 2 >= ROW_HEIGHT {
            count += 1;
        }

        items
            .iter()
            .skip(self.scroll_row)
            .take(count)
            .map(|p| p.id)
            .collect()
    }
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ProductListState {
    type Event = ProductListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.select_prev();
                None
            }
            TuiEvent::CursorDown => {
                self.select_next();
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_by(-1);
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_by(-(self.last_viewport_rows.max(1) as isize));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(self.last_viewport_rows.max(1) as isize);
                None
            }
            TuiEvent::Submit => self.selected.map(ProductListEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the product list.
pub struct ProductList<'a> {
    state: &'a mut ProductListState,
    items: &'a [Product],
    latch: &'a VisibilityLatch,
    currency: &'a str,
    loading: bool,
    spinner_frame: usize,
}

impl<'a> ProductList<'a> {
    pub fn new(
        state: &'a mut ProductListState,
        items: &'a [Product],
        latch: &'a VisibilityLatch,
        currency: &'a str,
        loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            items,
            latch,
            currency,
            loading,
            spinner_frame,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_viewport_rows = (area.height / ROW_HEIGHT).max(1) as usize;
        self.state.last_len = self.items.len();

        if self.items.is_empty() {
            let text = if self.loading {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                format!("{} Loading products...", spinner)
            } else {
                // Covers both "filters matched nothing" and "fetch failed";
                // the two are indistinguishable at the UI level.
                String::from("No results found.")
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            // Vertically centered single line.
            let mid = Rect {
                y: area.y + area.height / 2,
                height: 1,
                ..area
            };
            frame.render_widget(empty, mid);
            return;
        }

        let mut y = area.y;
        for (index, product) in self.items.iter().enumerate().skip(self.state.scroll_row) {
            if y >= area.y + area.height {
                break;
            }
            // The bottom row may be clipped by the viewport edge.
            let height = ROW_HEIGHT.min(area.y + area.height - y);
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };

            let is_selected = self.state.selected == Some(index);
            if self.latch.is_seen(product.id) {
                self.render_row(frame, row_area, product, is_selected);
            } else {
                render_placeholder(frame, row_area, is_selected);
            }

            y += ROW_HEIGHT;
        }
    }

    fn render_row(&self, frame: &mut Frame, area: Rect, product: &Product, selected: bool) {
        let base = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };

        let width = area.width as usize;
        let title = truncate_str(&product.title, width.saturating_sub(2));
        let price = format!("{}{:.2}", self.currency, product.price);
        let rating = match &product.rating {
            Some(r) => format!("★ {:.1} ({})", r.rate, r.count),
            None => String::from("★ N/A"),
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{:<width$}", title, width = width),
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(price, base.fg(Color::Cyan)),
                Span::styled("  ", base),
                Span::styled(rating, base.fg(Color::Yellow)),
            ]),
            Line::from(Span::styled(
                truncate_str(&product.category, width),
                base.fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// A shaded block the same size as a real row, for rows not yet latched.
fn render_placeholder(frame: &mut Frame, area: Rect, selected: bool) {
    let style = if selected {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let filler = "░".repeat(area.width as usize);
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(filler.clone(), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
