//! sevana-app - Session state machine and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! booking platform's session and navigation machine: a single owned
//! [`SessionState`], a message catalog, a deterministic update function,
//! the screen dispatcher, the appearance policy, configuration loading,
//! and the tokio message loop that runs gateway operations as background
//! tasks.

pub mod actions;
pub mod appearance;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use appearance::{chrome_for, Chrome};
pub use config::Settings;
pub use context::ScreenContext;
pub use dispatcher::{dispatch, ScreenBinding};
pub use handler::{AsyncOp, UpdateAction, UpdateResult};
pub use message::{AsyncKind, AsyncOutcome, Message};
pub use process::process_message;
pub use state::{AppPhase, Epoch, SessionState};

// Re-export core types for the shell
pub use sevana_core::identity::{Credentials, ProfileUpdate, Role};
pub use sevana_core::screen::Screen;
