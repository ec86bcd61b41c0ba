//! Message types for the session machine (TEA pattern)

use sevana_core::identity::{Credentials, Identity, ProfileUpdate, Role};
use sevana_core::screen::Screen;

use crate::context::ScreenContext;
use crate::state::Epoch;

/// Which gateway operation a pending marker or completion refers to.
///
/// Logout is absent deliberately: it resets the session immediately and
/// fires its gateway call without a completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncKind {
    SendOtp,
    VerifyOtp,
    Login,
    CompleteProfile,
}

/// Payload of a successful gateway operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOutcome {
    /// OTP dispatched; the number it went to is recorded on the profile.
    OtpSent { mobile: String },
    /// The entered code checked out.
    OtpVerified,
    /// Credential login succeeded with this identity.
    LoggedIn { identity: Identity },
    /// Profile fields were persisted.
    ProfileCompleted { fields: ProfileUpdate },
}

impl AsyncOutcome {
    pub fn kind(&self) -> AsyncKind {
        match self {
            AsyncOutcome::OtpSent { .. } => AsyncKind::SendOtp,
            AsyncOutcome::OtpVerified => AsyncKind::VerifyOtp,
            AsyncOutcome::LoggedIn { .. } => AsyncKind::Login,
            AsyncOutcome::ProfileCompleted { .. } => AsyncKind::CompleteProfile,
        }
    }
}

/// All possible messages/events in the session machine
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to `screen`; optionally attach a payload for it.
    Navigate {
        screen: Screen,
        payload: Option<ScreenContext>,
    },

    /// Follow the back edge of the *current* screen, resolved when this
    /// message is processed, not when the key binding was set up.
    NavigateBack,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Quit the shell (Ctrl+C or quit binding).
    Quit,

    /// End the session: reset to the welcome state from anywhere and
    /// invalidate the server-side session in the background.
    Logout,

    // ─────────────────────────────────────────────────────────
    // Identity intents (each begins an async operation)
    // ─────────────────────────────────────────────────────────
    /// Dispatch an OTP to this mobile number.
    SendOtp { mobile: String },
    /// Re-dispatch the OTP to the number already on the profile.
    ResendOtp,
    /// Check the entered code.
    VerifyOtp { code: String },
    /// Credential login for a portal role.
    Login { credentials: Credentials },
    /// Persist profile-setup fields.
    CompleteProfile { fields: ProfileUpdate },

    /// Pick a back-office role on the role-selection screen. Synchronous:
    /// no gateway call backs it.
    SelectRole { role: Role },

    // ─────────────────────────────────────────────────────────
    // Async completions (sent by spawned gateway tasks)
    // ─────────────────────────────────────────────────────────
    AsyncSucceeded { epoch: Epoch, outcome: AsyncOutcome },
    AsyncFailed {
        epoch: Epoch,
        kind: AsyncKind,
        error: String,
    },
}

impl Message {
    /// Plain navigation, no payload.
    pub fn navigate(screen: Screen) -> Self {
        Message::Navigate {
            screen,
            payload: None,
        }
    }

    /// Navigation carrying a payload for the destination.
    pub fn navigate_with(screen: Screen, payload: ScreenContext) -> Self {
        Message::Navigate {
            screen,
            payload: Some(payload),
        }
    }
}
