//! # TUI Components
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: receive all data as parameters each frame —
//!   `StatusBar`, `DetailView`.
//! - **Stateful (event-driven)**: hold local state and emit high-level
//!   events — `SearchBox`, `ProductList`, `CategoryPicker`.
//!
//! Each component file co-locates its state type, event type, rendering,
//! event handling, and tests, so one file tells the whole story.

pub mod category_picker;
pub mod detail;
pub mod product_list;
pub mod search_box;
pub mod status_bar;

pub use category_picker::{CategoryEvent, CategoryPicker, CategoryPickerState};
pub use detail::{DetailState, DetailView};
pub use product_list::{ProductList, ProductListEvent, ProductListState};
pub use search_box::{SearchBox, SearchEvent};
pub use status_bar::StatusBar;
