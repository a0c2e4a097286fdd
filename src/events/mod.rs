//! Event handling for Palpiteiro.
//!
//! Terminal input is polled with the configured tick rate and translated
//! into store actions according to the active view and input mode.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
