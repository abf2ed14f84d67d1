//! # StatusBar Component
//!
//! Single-line bar at the top of the list screen. Purely presentational — it
//! receives everything as props and holds no state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar showing result counts, active filters, and status text.
///
/// # Props
///
/// - `shown` / `total`: rendered vs fetched product counts
/// - `category`: the selected category label
/// - `sort_label`: short label of the active sort key
/// - `status_message`: transient status (e.g. "Refreshing...")
pub struct StatusBar {
    pub shown: usize,
    pub total: usize,
    pub category: String,
    pub sort_label: &'static str,
    pub status_message: String,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut text = format!(
            "Vitrine | {}/{} products | category: {} | sort: {}",
            self.shown, self.total, self.category, self.sort_label
        );
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        frame.render_widget(Span::raw(text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_counts_and_filters() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar {
            shown: 1,
            total: 2,
            category: "Shoes".to_string(),
            sort_label: "price ↑",
            status_message: "2 products".to_string(),
        };

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("1/2 products"));
        assert!(text.contains("category: Shoes"));
        assert!(text.contains("price ↑"));
    }
}
