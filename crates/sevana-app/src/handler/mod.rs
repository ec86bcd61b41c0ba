//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Navigate/back/logout handlers and the back-edge table
//! - `auth`: Identity intents, async completions, role routing

pub(crate) mod auth;
pub(crate) mod navigation;
pub(crate) mod update;


use sevana_core::identity::{Credentials, ProfileUpdate};

use crate::message::Message;
use crate::state::Epoch;

// Re-export main entry point
pub use update::update;

// Re-export routing helpers used by callers and tests
pub use auth::dashboard_for_role;
pub use navigation::back_target;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn a background task running one gateway operation
    SpawnOp(AsyncOp),
}

/// Gateway operations to run in the background.
///
/// Each carries the epoch it was issued under so its completion can be
/// recognized as stale if the session has moved on.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOp {
    SendOtp { mobile: String, epoch: Epoch },
    VerifyOtp {
        mobile: String,
        code: String,
        epoch: Epoch,
    },
    Login { credentials: Credentials, epoch: Epoch },
    CompleteProfile { fields: ProfileUpdate, epoch: Epoch },
    /// Fire-and-forget server-side session invalidation. No epoch: there
    /// is no completion message to go stale.
    Logout,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
