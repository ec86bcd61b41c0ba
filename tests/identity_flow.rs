//! End-to-end workflows through the real message loop and stub gateway

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use sevana_app::message::Message;
use sevana_app::process::process_message;
use sevana_app::state::SessionState;
use sevana_core::identity::{Credentials, ProfileUpdate, Role};
use sevana_core::screen::Screen;
use sevana_gateway::{GatewayError, StubGateway};

struct Harness {
    state: SessionState,
    gateway: Arc<StubGateway>,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new(gateway: StubGateway) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(16);
        Self {
            state: SessionState::new(),
            gateway: Arc::new(gateway),
            msg_tx,
            msg_rx,
        }
    }

    /// Feed a message and pump completions until the session settles.
    async fn drive(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &self.gateway, &self.msg_tx);
        while self.state.is_pending() {
            let completion = tokio::time::timeout(Duration::from_secs(2), self.msg_rx.recv())
                .await
                .expect("gateway completion timed out")
                .expect("message channel closed");
            process_message(&mut self.state, completion, &self.gateway, &self.msg_tx);
        }
    }
}

#[tokio::test]
async fn new_customer_signup_walkthrough() {
    let mut h = Harness::new(StubGateway::new());
    assert_eq!(h.state.screen, Screen::Welcome);

    h.drive(Message::navigate(Screen::MobileInput)).await;
    h.drive(Message::SendOtp {
        mobile: "9876543210".to_string(),
    })
    .await;
    assert_eq!(h.state.screen, Screen::Otp);
    assert_eq!(h.state.profile.mobile.as_deref(), Some("9876543210"));

    h.drive(Message::VerifyOtp {
        code: "1234".to_string(),
    })
    .await;
    assert_eq!(h.state.screen, Screen::ProfileSetup);
    assert!(h.state.profile.is_verified);

    h.drive(Message::CompleteProfile {
        fields: ProfileUpdate {
            name: Some("Asha".to_string()),
            email: Some("a@x.com".to_string()),
            ..Default::default()
        },
    })
    .await;
    assert_eq!(h.state.screen, Screen::Complete);
    assert_eq!(h.state.profile.name.as_deref(), Some("Asha"));

    h.drive(Message::navigate(Screen::Home)).await;
    assert_eq!(h.state.screen, Screen::Home);
}

#[tokio::test]
async fn returning_customer_skips_profile_setup() {
    let mut h = Harness::new(StubGateway::new());
    h.state.profile.is_verified = true;

    h.drive(Message::navigate(Screen::MobileInput)).await;
    h.drive(Message::SendOtp {
        mobile: "9876543210".to_string(),
    })
    .await;
    h.drive(Message::VerifyOtp {
        code: "1234".to_string(),
    })
    .await;

    assert_eq!(h.state.screen, Screen::Home);
}

#[tokio::test]
async fn wrong_otp_keeps_user_on_the_otp_screen() {
    let mut h = Harness::new(StubGateway::new());
    h.drive(Message::navigate(Screen::MobileInput)).await;
    h.drive(Message::SendOtp {
        mobile: "9876543210".to_string(),
    })
    .await;

    h.drive(Message::VerifyOtp {
        code: "0000".to_string(),
    })
    .await;
    assert_eq!(h.state.screen, Screen::Otp);
    assert!(h.state.last_error.is_some());

    // Retrying with the right code clears the error and moves on.
    h.drive(Message::VerifyOtp {
        code: "1234".to_string(),
    })
    .await;
    assert_eq!(h.state.screen, Screen::ProfileSetup);
    assert!(h.state.last_error.is_none());
}

#[tokio::test]
async fn vendor_login_lands_on_vendor_dashboard() {
    let mut h = Harness::new(StubGateway::seeded_demo());

    h.drive(Message::navigate(Screen::VendorLogin)).await;
    h.drive(Message::Login {
        credentials: Credentials {
            username: "9876543210".to_string(),
            password: "vendor123".to_string(),
            role: Role::Vendor,
        },
    })
    .await;

    assert_eq!(h.state.screen, Screen::VendorDashboard);
    assert_eq!(h.state.role, Some(Role::Vendor));
    assert!(h.state.profile.is_verified);
}

#[tokio::test]
async fn failed_login_stays_put_until_retried() {
    let mut h = Harness::new(StubGateway::seeded_demo());

    h.drive(Message::navigate(Screen::AdminLogin)).await;
    h.drive(Message::Login {
        credentials: Credentials {
            username: "9876500003".to_string(),
            password: "wrong".to_string(),
            role: Role::Admin,
        },
    })
    .await;
    assert_eq!(h.state.screen, Screen::AdminLogin);
    assert!(h.state.last_error.is_some());

    h.drive(Message::Login {
        credentials: Credentials {
            username: "9876500003".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        },
    })
    .await;
    assert_eq!(h.state.screen, Screen::AdminDashboard);
}

#[tokio::test]
async fn network_failure_surfaces_inline() {
    let h_gateway = StubGateway::new();
    h_gateway.fail_next(GatewayError::network("socket closed"));
    let mut h = Harness::new(h_gateway);

    h.drive(Message::navigate(Screen::MobileInput)).await;
    h.drive(Message::SendOtp {
        mobile: "9876543210".to_string(),
    })
    .await;

    assert_eq!(h.state.screen, Screen::MobileInput);
    let error = h.state.last_error.as_deref().unwrap();
    assert!(error.contains("socket closed"), "error was: {error}");
}

#[tokio::test]
async fn logout_resets_the_whole_session() {
    let mut h = Harness::new(StubGateway::seeded_demo());

    h.drive(Message::Login {
        credentials: Credentials {
            username: "9876543210".to_string(),
            password: "vendor123".to_string(),
            role: Role::Vendor,
        },
    })
    .await;
    assert_eq!(h.state.screen, Screen::VendorDashboard);

    h.drive(Message::Logout).await;

    assert_eq!(h.state.screen, Screen::Welcome);
    assert!(h.state.role.is_none());
    assert!(h.state.profile.name.is_none());
    assert!(h.state.context.is_none());
}
