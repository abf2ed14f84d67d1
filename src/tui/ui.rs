//! Frame composition for the two screens.
//!
//! The list screen stacks a status bar, the product list, and the search box.
//! The detail screen replaces the whole frame. The category picker renders
//! last so it overlays the list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::api::Product;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryPicker, DetailView, ProductList, StatusBar};

/// Height of the search box (one content line plus borders).
pub const SEARCH_BOX_HEIGHT: u16 = 3;

pub fn draw_ui(
    frame: &mut Frame,
    app: &mut App,
    tui: &mut TuiState,
    listed: &[Product],
    spinner_frame: usize,
) {
    // Detail screen takes over the whole frame.
    if let Some(detail) = tui.detail.as_mut() {
        DetailView::new(detail, &tui.currency).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(SEARCH_BOX_HEIGHT)]);
    let [status_area, list_area, search_area] = layout.areas(frame.area());

    let mut status_bar = StatusBar {
        shown: listed.len(),
        total: app.products.len(),
        category: app.filters.selected_category().to_string(),
        sort_label: app.filters.sort().label(),
        status_message: app.status_message.clone(),
    };
    status_bar.render(frame, status_area);

    // Latch rows that are at least half on screen BEFORE rendering, so a row
    // scrolled into view shows its content on the same frame. Rows that have
    // scrolled away stay latched.
    let viewable = tui.product_list.viewable_ids(list_area, listed);
    app.latch.mark(viewable);

    ProductList::new(
        &mut tui.product_list,
        listed,
        &app.latch,
        &tui.currency,
        app.loading_products,
        spinner_frame,
    )
    .render(frame, list_area);

    tui.search_box.render(frame, search_area);

    // Overlay goes last so it draws on top of the list.
    if let Some(picker) = tui.category_picker.as_mut() {
        CategoryPicker::new(picker, app.filters.selected_category()).render(frame, frame.area());
    }
}
