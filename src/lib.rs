//! # Palpiteiro - Lotofácil TUI
//!
//! A terminal dashboard for Lotofácil draw results. It shows the latest
//! draw and number statistics, asks the backend for bet suggestions,
//! browses the draw history, and checks a typed bet against a past draw.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the main event loop
//! - **UI**: Layout, theme and the four views
//! - **API**: HTTP client for the results backend
//! - **Query**: Fetch policies and the request loader
//! - **Conference**: Bet parsing and hit counting
//! - **State**: Centralized state management
//! - **Events**: Input handling and key bindings
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod clipboard;
pub mod conference;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod query;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
