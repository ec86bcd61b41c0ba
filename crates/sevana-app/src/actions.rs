//! Action handlers: gateway operation dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use sevana_gateway::AuthGateway;

use crate::handler::{AsyncOp, UpdateAction};
use crate::message::{AsyncKind, AsyncOutcome, Message};

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, gateway: Arc<G>, msg_tx: mpsc::Sender<Message>)
where
    G: AuthGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnOp(op) => {
            tokio::spawn(async move {
                execute_op(op, gateway, msg_tx).await;
            });
        }
    }
}

/// Run one gateway operation and report its completion as a message.
///
/// The completion carries the epoch the operation was issued under; the
/// engine decides whether it is still relevant.
async fn execute_op<G>(op: AsyncOp, gateway: Arc<G>, msg_tx: mpsc::Sender<Message>)
where
    G: AuthGateway + Send + Sync + 'static,
{
    match op {
        AsyncOp::SendOtp { mobile, epoch } => {
            let msg = match gateway.send_otp(&mobile).await {
                Ok(()) => Message::AsyncSucceeded {
                    epoch,
                    outcome: AsyncOutcome::OtpSent { mobile },
                },
                Err(e) => Message::AsyncFailed {
                    epoch,
                    kind: AsyncKind::SendOtp,
                    error: e.to_string(),
                },
            };
            send(&msg_tx, msg).await;
        }

        AsyncOp::VerifyOtp {
            mobile,
            code,
            epoch,
        } => {
            let msg = match gateway.verify_otp(&mobile, &code).await {
                Ok(()) => Message::AsyncSucceeded {
                    epoch,
                    outcome: AsyncOutcome::OtpVerified,
                },
                Err(e) => Message::AsyncFailed {
                    epoch,
                    kind: AsyncKind::VerifyOtp,
                    error: e.to_string(),
                },
            };
            send(&msg_tx, msg).await;
        }

        AsyncOp::Login { credentials, epoch } => {
            let msg = match gateway.login(&credentials).await {
                Ok(identity) => Message::AsyncSucceeded {
                    epoch,
                    outcome: AsyncOutcome::LoggedIn { identity },
                },
                Err(e) => Message::AsyncFailed {
                    epoch,
                    kind: AsyncKind::Login,
                    error: e.to_string(),
                },
            };
            send(&msg_tx, msg).await;
        }

        AsyncOp::CompleteProfile { fields, epoch } => {
            let msg = match gateway.complete_profile(&fields).await {
                Ok(()) => Message::AsyncSucceeded {
                    epoch,
                    outcome: AsyncOutcome::ProfileCompleted { fields },
                },
                Err(e) => Message::AsyncFailed {
                    epoch,
                    kind: AsyncKind::CompleteProfile,
                    error: e.to_string(),
                },
            };
            send(&msg_tx, msg).await;
        }

        AsyncOp::Logout => {
            // Fire-and-forget: the session is already reset locally.
            if let Err(e) = gateway.logout().await {
                warn!("server-side logout failed: {e}");
            }
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("message channel closed, completion dropped");
    }
}
