//! The async boundary for all identity-related operations
//!
//! The session engine never talks to a network; it spawns tasks that call
//! this trait and report back as messages. Implementations own no session
//! state and perform no navigation -- `login` logs a user in, it does not
//! decide which dashboard comes next.

use sevana_core::identity::{Credentials, Identity, ProfileUpdate};

use crate::error::GatewayError;

/// Identity/auth service operations.
///
/// All five operations are asynchronous, may fail, and report failure as
/// a [`GatewayError`] envelope -- never an unwind. Retries are the
/// caller's decision; a failed call leaves no partial effect behind.
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Dispatch a one-time password to the given mobile number.
    async fn send_otp(&self, mobile: &str) -> Result<(), GatewayError>;

    /// Check a one-time password previously sent to `mobile`.
    async fn verify_otp(&self, mobile: &str, code: &str) -> Result<(), GatewayError>;

    /// Credential login for a specific role. Returns the full identity on
    /// success.
    async fn login(&self, credentials: &Credentials) -> Result<Identity, GatewayError>;

    /// Persist the profile fields collected during signup.
    async fn complete_profile(&self, update: &ProfileUpdate) -> Result<(), GatewayError>;

    /// Invalidate the server-side session.
    async fn logout(&self) -> Result<(), GatewayError>;
}
