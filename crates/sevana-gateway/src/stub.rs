//! In-memory gateway backend for the demo shell and integration tests
//!
//! Mirrors what the real identity service promises at the trait boundary:
//! artificial latency, a seeded credential directory, OTP issue/verify
//! bookkeeping, and scriptable failures. Holds no session state beyond
//! the OTPs it has issued.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use sevana_core::identity::{Credentials, Identity, ProfileUpdate, Role};

use crate::error::GatewayError;
use crate::gateway::AuthGateway;

/// A seeded account in the credential directory.
#[derive(Debug, Clone)]
struct SeedUser {
    username: String,
    password: String,
    identity: Identity,
}

/// In-memory [`AuthGateway`](crate::AuthGateway) implementation.
pub struct StubGateway {
    latency: Duration,
    /// When set, every issued OTP is this code (demo default `"1234"`).
    /// When `None`, a random 4-digit code is generated per dispatch.
    fixed_otp: Option<String>,
    users: Vec<SeedUser>,
    /// mobile -> last OTP dispatched to it
    issued: Mutex<HashMap<String, String>>,
    /// Scripted failure consumed by the next operation (tests).
    fail_next: Mutex<Option<GatewayError>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(0),
            fixed_otp: Some("1234".to_string()),
            users: Vec::new(),
            issued: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(None),
        }
    }
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artificial per-operation latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fix the OTP every dispatch issues; `None` means random per send.
    pub fn with_fixed_otp(mut self, otp: Option<String>) -> Self {
        self.fixed_otp = otp;
        self
    }

    /// Seed a credential-directory account. Portal logins use the
    /// mobile number as the username.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        identity: Identity,
    ) -> Self {
        self.users.push(SeedUser {
            username: username.into(),
            password: password.into(),
            identity,
        });
        self
    }

    /// The demo directory: one account per portal entry point.
    pub fn seeded_demo() -> Self {
        fn identity(id: &str, name: &str, mobile: &str, role: Role) -> Identity {
            Identity {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@sevana.example", id),
                mobile: mobile.to_string(),
                role,
            }
        }

        Self::new()
            .with_user(
                "9876543210",
                "vendor123",
                identity("v1", "Meera Spa & Wellness", "9876543210", Role::Vendor),
            )
            .with_user(
                "9876500001",
                "applicant123",
                identity("va1", "New Vendor", "9876500001", Role::VendorApplicant),
            )
            .with_user(
                "9876500002",
                "employee123",
                identity("e1", "Rahul Nair", "9876500002", Role::Employee),
            )
            .with_user(
                "9876500003",
                "admin123",
                identity("a1", "Admin", "9876500003", Role::Admin),
            )
            .with_user(
                "9876500004",
                "super123",
                identity("sa1", "Super Admin", "9876500004", Role::SuperAdmin),
            )
            .with_user(
                "9876500005",
                "finance123",
                identity("f1", "Finance Desk", "9876500005", Role::FinanceDepartment),
            )
    }

    /// Script a failure for the next operation (any kind).
    pub fn fail_next(&self, error: GatewayError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// The OTP most recently issued to `mobile`, if any. Test hook.
    pub fn issued_otp(&self, mobile: &str) -> Option<String> {
        self.issued.lock().unwrap().get(mobile).cloned()
    }

    async fn simulate(&self) -> Result<(), GatewayError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}

// The Send variant: gateway calls run on spawned tasks.
impl AuthGateway for StubGateway {
    async fn send_otp(&self, mobile: &str) -> Result<(), GatewayError> {
        self.simulate().await?;

        let code = match &self.fixed_otp {
            Some(code) => code.clone(),
            None => format!("{:04}", rand::thread_rng().gen_range(0..10_000)),
        };
        info!(mobile, code = %code, "OTP dispatched");
        self.issued
            .lock()
            .unwrap()
            .insert(mobile.to_string(), code);
        Ok(())
    }

    async fn verify_otp(&self, mobile: &str, code: &str) -> Result<(), GatewayError> {
        self.simulate().await?;

        let issued = self.issued.lock().unwrap().get(mobile).cloned();
        match issued {
            Some(expected) if expected == code => {
                debug!(mobile, "OTP verified");
                Ok(())
            }
            Some(_) => Err(GatewayError::denied("Invalid OTP. Please try again.")),
            None => Err(GatewayError::denied("No OTP was sent to this number.")),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity, GatewayError> {
        self.simulate().await?;

        let found = self
            .users
            .iter()
            .find(|u| u.username == credentials.username && u.identity.role == credentials.role);
        match found {
            Some(user) if user.password == credentials.password => {
                info!(username = %credentials.username, role = %credentials.role, "login ok");
                Ok(user.identity.clone())
            }
            _ => Err(GatewayError::denied(
                "Login failed. Please check your credentials.",
            )),
        }
    }

    async fn complete_profile(&self, update: &ProfileUpdate) -> Result<(), GatewayError> {
        self.simulate().await?;
        debug!(?update, "profile saved");
        Ok(())
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.simulate().await?;
        debug!("server session invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_otp_round_trip() {
        let gw = StubGateway::new();
        gw.send_otp("9876543210").await.unwrap();
        assert_eq!(gw.issued_otp("9876543210").as_deref(), Some("1234"));

        gw.verify_otp("9876543210", "1234").await.unwrap();
        let err = gw.verify_otp("9876543210", "0000").await.unwrap_err();
        assert!(matches!(err, GatewayError::Denied(_)));
    }

    #[tokio::test]
    async fn test_verify_without_send_is_denied() {
        let gw = StubGateway::new();
        let err = gw.verify_otp("9000000000", "1234").await.unwrap_err();
        assert!(matches!(err, GatewayError::Denied(_)));
    }

    #[tokio::test]
    async fn test_random_otp_when_unfixed() {
        let gw = StubGateway::new().with_fixed_otp(None);
        gw.send_otp("9876543210").await.unwrap();
        let code = gw.issued_otp("9876543210").unwrap();
        assert_eq!(code.len(), 4);
        gw.verify_otp("9876543210", &code).await.unwrap();
    }

    #[tokio::test]
    async fn test_login_checks_role_and_password() {
        let gw = StubGateway::seeded_demo();

        let ok = gw
            .login(&Credentials {
                username: "9876543210".to_string(),
                password: "vendor123".to_string(),
                role: Role::Vendor,
            })
            .await
            .unwrap();
        assert_eq!(ok.role, Role::Vendor);

        // Right password, wrong portal
        let err = gw
            .login(&Credentials {
                username: "9876543210".to_string(),
                password: "vendor123".to_string(),
                role: Role::Admin,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Denied(_)));

        // Wrong password
        let err = gw
            .login(&Credentials {
                username: "9876543210".to_string(),
                password: "nope".to_string(),
                role: Role::Vendor,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Denied(_)));
    }

    #[tokio::test]
    async fn test_scripted_failure_consumed_once() {
        let gw = StubGateway::new();
        gw.fail_next(GatewayError::network("socket closed"));

        let err = gw.send_otp("9876543210").await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));

        // Next call succeeds again
        gw.send_otp("9876543210").await.unwrap();
    }
}
