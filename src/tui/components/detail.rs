//! # DetailView Component
//!
//! Full-screen view of a single product. The list screen hands over a clone
//! of the product when the user presses Enter; if the parameter is missing
//! the view renders a "Product not found." fallback instead of failing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Product;

/// Persistent state for the detail screen.
pub struct DetailState {
    /// The product being shown. `None` models a navigation without a
    /// parameter and renders the fallback.
    pub product: Option<Product>,
    pub scroll: ScrollViewState,
}

impl DetailState {
    pub fn new(product: Option<Product>) -> Self {
        Self {
            product,
            scroll: ScrollViewState::default(),
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll.scroll_page_up();
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll.scroll_page_down();
    }
}

/// Transient render wrapper for the detail screen.
pub struct DetailView<'a> {
    state: &'a mut DetailState,
    currency: &'a str,
}

impl<'a> DetailView<'a> {
    pub fn new(state: &'a mut DetailState, currency: &'a str) -> Self {
        Self { state, currency }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(area);

        let header = Line::from(vec![
            Span::styled("Product Details", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("Esc Back", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        let Some(product) = self.state.product.clone() else {
            let fallback = Paragraph::new("Product not found.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            let mid = Rect {
                y: body_area.y + body_area.height / 2,
                height: 1,
                ..body_area
            };
            frame.render_widget(fallback, mid);
            return;
        };

        let content_width = body_area.width.saturating_sub(1);
        let inner_width = content_width.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = vec![
            Line::styled(
                product.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{}{:.2}", self.currency, product.price),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                product.category.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Line::raw(""),
        ];

        if !product.image.is_empty() {
            lines.push(Line::styled(
                format!("Image: {}", product.image),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::raw(""));
        }

        for wrapped in textwrap::wrap(&product.description, inner_width.max(1)) {
            lines.push(Line::styled(
                wrapped.into_owned(),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::raw(""));

        let rating = match &product.rating {
            Some(r) => format!("Rating: {:.1} ({})", r.rate, r.count),
            None => String::from("Rating: N/A (0)"),
        };
        lines.push(Line::styled(
            format!("ID: {}    {}", product.id, rating),
            Style::default().fg(Color::DarkGray),
        ));

        let card = Paragraph::new(lines).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
        let total_height = card.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(card, Rect::new(0, 0, content_width, total_height));

        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll);
    }
}
