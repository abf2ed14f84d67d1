//! # Core Application Logic
//!
//! This module contains Vitrine's business logic. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter pipeline      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`filter`]: Filter state and the filter/sort pipeline
//! - [`debounce`]: Single-slot debouncer for the search query
//! - [`visibility`]: Append-only latch for rows scrolled into view
//! - [`config`]: TOML config with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod state;
pub mod visibility;
