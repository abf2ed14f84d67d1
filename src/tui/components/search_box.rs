//! # SearchBox Component
//!
//! Single-line text input for the product search. Every edit emits
//! [`SearchEvent::Changed`] with the full raw buffer; the event loop feeds
//! that into the debouncer rather than filtering immediately, so typing never
//! recomputes the list on each keystroke.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The raw text changed; carries the full buffer.
    Changed(String),
    /// Enter pressed — commit the text immediately, skipping the debounce.
    Submitted(String),
    /// Esc pressed — give focus back to the list.
    Dismissed,
}

/// Text input component for the search query.
///
/// # State
///
/// - `buffer`: the raw (not yet committed) search text
/// - `focused`: prop from the event loop; unfocused boxes render dimmed and
///   ignore events
pub struct SearchBox {
    pub buffer: String,
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.focused {
            "Search"
        } else {
            "Search (press /)"
        };

        let style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title(title);

        let input = Paragraph::new(self.buffer.as_str()).block(block).style(style);
        frame.render_widget(input, area);

        if self.focused {
            // Cursor sits after the last character, inside the border.
            let x = area.x + 1 + self.buffer.width() as u16;
            frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit => Some(SearchEvent::Submitted(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Dismissed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut input = SearchBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(SearchEvent::Changed("a".to_string())));

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(SearchEvent::Changed("ab".to_string())));

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(SearchEvent::Changed("a".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_silent() {
        let mut input = SearchBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_carries_buffer() {
        let mut input = SearchBox::new();
        input.buffer = "blue".to_string();
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submitted("blue".to_string()))
        );
        // The buffer stays — search text is not consumed on submit.
        assert_eq!(input.buffer, "blue");
    }

    #[test]
    fn test_escape_dismisses() {
        let mut input = SearchBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::Escape),
            Some(SearchEvent::Dismissed)
        );
    }

    #[test]
    fn test_render_shows_focus_hint_when_unfocused() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = SearchBox::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("press /"));
    }
}
