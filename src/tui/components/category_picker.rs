//! # Category Picker Component
//!
//! Full-screen overlay for restricting the list to one category. Opened with
//! `c`. The options always start with the `"All"` sentinel; picking it lifts
//! the restriction.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState` while the overlay is open
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::event::TuiEvent;

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    pub options: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    pub fn new(options: Vec<String>, current: &str) -> Self {
        // Start on the active category so Enter with no movement is a no-op.
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            options,
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a CategoryEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryEvent> {
        match event {
            TuiEvent::Escape => Some(CategoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.options.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.options.is_empty() {
                    self.selected = (self.selected + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected)
                .map(|option| CategoryEvent::Select(option.clone())),
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
pub enum CategoryEvent {
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
    current: &'a str,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState, current: &'a str) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.options.is_empty() {
            let empty = Paragraph::new("No categories available.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_active = option == self.current;
                let marker = if is_active { " *" } else { "" };

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::styled(format!("{option}{marker}"), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["All".to_string(), "Shoes".to_string(), "Hats".to_string()]
    }

    #[test]
    fn test_starts_on_active_category() {
        let state = CategoryPickerState::new(options(), "Hats");
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_unknown_current_falls_back_to_first() {
        let state = CategoryPickerState::new(options(), "Gloves");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut state = CategoryPickerState::new(options(), "All");
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_submit_selects_highlighted_option() {
        let mut state = CategoryPickerState::new(options(), "All");
        state.handle_event(&TuiEvent::CursorDown);
        match state.handle_event(&TuiEvent::Submit) {
            Some(CategoryEvent::Select(label)) => assert_eq!(label, "Shoes"),
            _ => panic!("Expected Select event"),
        }
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = CategoryPickerState::new(options(), "All");
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(CategoryEvent::Dismiss)
        ));
    }
}
