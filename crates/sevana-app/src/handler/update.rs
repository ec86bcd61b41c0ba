//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::SessionState;

use super::{auth, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut SessionState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { screen, payload } => {
            navigation::handle_navigate(state, screen, payload)
        }

        Message::NavigateBack => navigation::handle_back(state),

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Logout => navigation::handle_logout(state),

        // ─────────────────────────────────────────────────────────
        // Identity intents
        // ─────────────────────────────────────────────────────────
        Message::SendOtp { mobile } => auth::handle_send_otp(state, mobile),
        Message::ResendOtp => auth::handle_resend_otp(state),
        Message::VerifyOtp { code } => auth::handle_verify_otp(state, code),
        Message::Login { credentials } => auth::handle_login(state, credentials),
        Message::CompleteProfile { fields } => auth::handle_complete_profile(state, fields),
        Message::SelectRole { role } => auth::handle_select_role(state, role),

        // ─────────────────────────────────────────────────────────
        // Async completions
        // ─────────────────────────────────────────────────────────
        Message::AsyncSucceeded { epoch, outcome } => {
            auth::handle_async_succeeded(state, epoch, outcome)
        }

        Message::AsyncFailed { epoch, kind, error } => {
            auth::handle_async_failed(state, epoch, kind, error)
        }
    }
}
