//! Session state (Model in TEA pattern)
//!
//! One `SessionState` exists per process, owned by the run loop. Every
//! mutation flows through [`crate::handler::update`]; screens and tasks
//! never touch it directly.

use sevana_core::identity::{Role, UserProfile};
use sevana_core::screen::Screen;

use crate::config::Settings;
use crate::context::ScreenContext;
use crate::message::AsyncKind;

/// Application lifecycle phase (for the run loop, not the session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Session generation counter.
///
/// Bumped on every screen change and on logout. Async operations carry
/// the epoch they were issued under; a completion whose epoch no longer
/// matches the session's is stale and must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Epoch(u64);

impl Epoch {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The operation currently in flight, tagged with its issuing epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOp {
    pub kind: AsyncKind,
    pub epoch: Epoch,
}

/// The single mutable session record.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Which screen is visible. Exactly one at a time, `Welcome` at start.
    pub screen: Screen,

    /// Partially-built identity, accumulated by merge as the workflow
    /// progresses. Replaced wholesale only on logout.
    pub profile: UserProfile,

    /// Active role once login or role selection succeeds. Gates the
    /// portal sub-trees.
    pub role: Option<Role>,

    /// `Some` exactly while a gateway call is in flight. Doubles as the
    /// single-flight guard: a second operation is refused until this
    /// clears.
    pub pending: Option<PendingOp>,

    /// Message from the last failed operation. Cleared by the next
    /// navigation or operation attempt.
    pub last_error: Option<String>,

    /// The selected-entity slot: one typed payload attached by the screen
    /// that initiates a transition and read by the destination.
    /// Last-write-wins; a new attachment overwrites the old.
    pub context: Option<ScreenContext>,

    /// Session generation; see [`Epoch`].
    pub epoch: Epoch,

    /// Run-loop lifecycle flag.
    pub phase: AppPhase,

    /// Loaded configuration.
    pub settings: Settings,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::Welcome,
            profile: UserProfile::default(),
            role: None,
            pending: None,
            last_error: None,
            context: None,
            epoch: Epoch::default(),
            phase: AppPhase::Running,
            settings,
        }
    }

    /// The spec-level "pending" boolean.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Move to `screen`: clears the last error and bumps the epoch so
    /// results of operations issued before the move are recognized as
    /// stale.
    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.last_error = None;
        self.epoch = self.epoch.next();
    }

    /// Mark an operation as in flight under the current epoch.
    pub fn begin_async(&mut self, kind: AsyncKind) {
        self.last_error = None;
        self.pending = Some(PendingOp {
            kind,
            epoch: self.epoch,
        });
    }

    /// Clear the pending marker if it matches this completion exactly
    /// (same kind, same issuing epoch). A marker for a different
    /// operation is left alone.
    pub fn finish_async(&mut self, kind: AsyncKind, epoch: Epoch) {
        if self.pending == Some(PendingOp { kind, epoch }) {
            self.pending = None;
        }
    }

    /// Tear the session down to its initial value (logout). Settings and
    /// run-loop phase survive; everything session-scoped is dropped and
    /// the epoch bumps so in-flight results die stale.
    pub fn reset_session(&mut self) {
        self.screen = Screen::Welcome;
        self.profile = UserProfile::default();
        self.role = None;
        self.pending = None;
        self.last_error = None;
        self.context = None;
        self.epoch = self.epoch.next();
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.screen, Screen::Welcome);
        assert_eq!(state.profile, UserProfile::default());
        assert!(state.role.is_none());
        assert!(!state.is_pending());
        assert!(state.last_error.is_none());
        assert!(state.context.is_none());
        assert_eq!(state.phase, AppPhase::Running);
    }

    #[test]
    fn test_set_screen_clears_error_and_bumps_epoch() {
        let mut state = SessionState::new();
        state.last_error = Some("boom".to_string());
        let before = state.epoch;

        state.set_screen(Screen::Home);

        assert_eq!(state.screen, Screen::Home);
        assert!(state.last_error.is_none());
        assert_ne!(state.epoch, before);
    }

    #[test]
    fn test_finish_async_only_clears_exact_match() {
        let mut state = SessionState::new();
        state.begin_async(AsyncKind::SendOtp);
        let issued = state.epoch;

        // Different kind: untouched
        state.finish_async(AsyncKind::Login, issued);
        assert!(state.is_pending());

        // Different epoch: untouched
        state.finish_async(AsyncKind::SendOtp, issued.next());
        assert!(state.is_pending());

        state.finish_async(AsyncKind::SendOtp, issued);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_reset_session_preserves_settings_and_phase() {
        let mut state = SessionState::new();
        state.set_screen(Screen::VendorDashboard);
        state.role = Some(Role::Vendor);
        state.profile.name = Some("Meera".to_string());
        let before = state.epoch;

        state.reset_session();

        assert_eq!(state.screen, Screen::Welcome);
        assert!(state.role.is_none());
        assert!(state.profile.name.is_none());
        assert_ne!(state.epoch, before);
        assert_eq!(state.phase, AppPhase::Running);
    }
}
