//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Debounce pending**: polls every ~50ms so the committed query lands
//!   close to the 350ms deadline.
//! - **Idle**: sleeps up to 250ms and only redraws on events.
//!
//! ## Concurrency
//!
//! The product and category fetches run as independent tokio tasks issued at
//! startup; their completion order is not relied upon. Each task reports back
//! as an `Action` over an mpsc channel drained by the loop, so all state
//! mutation is serialized here. Abort handles for in-flight fetches are kept
//! so a refresh or quit can cancel them — a completion can never land on a
//! screen that has moved on.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CatalogClient, CatalogSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryEvent, CategoryPickerState, DetailState, ProductListEvent, ProductListState,
    SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate the list with arrow keys; single-key shortcuts active.
    Browse,
    /// Typing goes to the search box. Esc switches back to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub product_list: ProductListState,
    pub search_box: SearchBox,
    // Modal input mode
    pub input_mode: InputMode,
    // Single-slot debouncer feeding the committed query
    pub search_debounce: Debouncer,
    // Category picker overlay (None = hidden)
    pub category_picker: Option<CategoryPickerState>,
    // Detail screen (None = list screen)
    pub detail: Option<DetailState>,
    pub currency: String,
}

impl TuiState {
    pub fn new(currency: String) -> Self {
        Self {
            product_list: ProductListState::new(),
            search_box: SearchBox::new(),
            input_mode: InputMode::Browse,
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            category_picker: None,
            detail: None,
            currency,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CatalogSource> = Arc::new(CatalogClient::new(config.base_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new(config.currency.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Both fetches are issued at mount; abort handles let refresh/quit cancel
    // whatever is still in flight.
    let mut active_abort_handles = spawn_fetches(source.clone(), tx.clone());

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync SearchBox props with TUI state
        tui.search_box.focused = matches!(tui.input_mode, InputMode::Search)
            && tui.detail.is_none()
            && tui.category_picker.is_none();

        // Commit the search text once its quiet period has elapsed.
        if let Some(query) = tui.search_debounce.poll(Instant::now()) {
            update(&mut app, Action::QueryCommitted(query));
            needs_redraw = true;
        }

        // Re-derive the rendered sequence; pure function of (products,
        // committed query, category, sort), so recomputing is always safe.
        let listed = app.visible_products();
        tui.product_list.clamp(listed.len());

        let animating = app.loading_products;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &mut app, &mut tui, &listed, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating or a commit is due soon
        let timeout = if animating {
            Duration::from_millis(80)
        } else if tui.search_debounce.is_pending() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the category picker is open, route all events to it
            if let Some(ref mut picker) = tui.category_picker {
                if let Some(category_event) = picker.handle_event(&event) {
                    match category_event {
                        CategoryEvent::Select(label) => {
                            update(&mut app, Action::CategorySelected(label));
                            tui.category_picker = None;
                        }
                        CategoryEvent::Dismiss => {
                            tui.category_picker = None;
                        }
                    }
                }
                continue;
            }

            // Detail screen: Esc goes back, arrows scroll the card
            if let Some(ref mut detail) = tui.detail {
                match event {
                    TuiEvent::Escape | TuiEvent::Backspace => {
                        tui.detail = None;
                    }
                    TuiEvent::CursorUp | TuiEvent::ScrollUp => detail.scroll_up(),
                    TuiEvent::CursorDown | TuiEvent::ScrollDown => detail.scroll_down(),
                    TuiEvent::ScrollPageUp => detail.scroll_page_up(),
                    TuiEvent::ScrollPageDown => detail.scroll_page_down(),
                    _ => {}
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Search => {
                    if let Some(search_event) = tui.search_box.handle_event(&event) {
                        match search_event {
                            SearchEvent::Changed(text) => {
                                // Raw text updates immediately; the committed
                                // query only changes after the quiet period.
                                app.filters.set_search_query(text.clone());
                                tui.search_debounce.input(&text, Instant::now());
                            }
                            SearchEvent::Submitted(text) => {
                                // Enter commits right away, skipping the wait.
                                tui.search_debounce.cancel();
                                update(
                                    &mut app,
                                    Action::QueryCommitted(text.trim().to_string()),
                                );
                                tui.input_mode = InputMode::Browse;
                            }
                            SearchEvent::Dismissed => {
                                tui.input_mode = InputMode::Browse;
                            }
                        }
                    }
                }
                InputMode::Browse => match event {
                    TuiEvent::InputChar('/') => {
                        tui.input_mode = InputMode::Search;
                    }
                    TuiEvent::InputChar('q') => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                    TuiEvent::InputChar('c') => {
                        tui.category_picker = Some(CategoryPickerState::new(
                            app.category_options.clone(),
                            app.filters.selected_category(),
                        ));
                    }
                    TuiEvent::InputChar('s') => {
                        update(&mut app, Action::CycleSort);
                    }
                    TuiEvent::InputChar('r') => {
                        for handle in active_abort_handles.drain(..) {
                            handle.abort();
                        }
                        if update(&mut app, Action::Refresh) == Effect::SpawnFetch {
                            active_abort_handles = spawn_fetches(source.clone(), tx.clone());
                        }
                    }
                    other => {
                        if let Some(ProductListEvent::Open(index)) =
                            tui.product_list.handle_event(&other)
                        {
                            // The detail screen gets its own clone; the list
                            // keeps ownership of the catalog.
                            tui.detail = Some(DetailState::new(listed.get(index).cloned()));
                        }
                    }
                },
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::SpawnFetch => {
                    for handle in active_abort_handles.drain(..) {
                        handle.abort();
                    }
                    active_abort_handles = spawn_fetches(source.clone(), tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    // Teardown: no pending commit may land after the screen is gone, and
    // in-flight fetches are cancelled rather than left to complete.
    tui.search_debounce.cancel();
    for handle in active_abort_handles.drain(..) {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Spawn the product and category fetches as independent tasks.
///
/// Each task reduces its result to a single `Action` and sends it over the
/// channel; a dropped receiver just means the UI is gone.
fn spawn_fetches(
    source: Arc<dyn CatalogSource>,
    tx: mpsc::Sender<Action>,
) -> Vec<tokio::task::AbortHandle> {
    info!("Spawning catalog fetches");

    let products_source = source.clone();
    let products_tx = tx.clone();
    let products_handle = tokio::spawn(async move {
        let action = match products_source.fetch_products().await {
            Ok(products) => Action::ProductsLoaded(products),
            Err(e) => Action::ProductsFailed(e.to_string()),
        };
        if products_tx.send(action).is_err() {
            warn!("Failed to send product fetch result: receiver dropped");
        }
    });

    let categories_handle = tokio::spawn(async move {
        let action = match source.fetch_categories().await {
            Ok(labels) => Action::CategoriesLoaded(labels),
            Err(e) => Action::CategoriesFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send category fetch result: receiver dropped");
        }
    });

    vec![products_handle.abort_handle(), categories_handle.abort_handle()]
}
