//! sevana-tui - Terminal shell for the Sevana booking platform
//!
//! A thin ratatui front-end over the session machine: it renders the
//! screen the dispatcher names, translates key presses into messages,
//! and keeps local input state (buffers, cursors, validation) that never
//! belongs in the session.

pub mod demo;
pub mod event;
pub mod input;
pub mod menu;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;

// Re-export main entry point
pub use runner::run;
pub use input::{InputKey, Shell};
