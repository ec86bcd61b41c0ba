//! Message processing: drive the update loop and dispatch actions

use std::sync::Arc;

use tokio::sync::mpsc;

use sevana_gateway::AuthGateway;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::SessionState;

/// Process a message through the TEA update function.
///
/// Follow-up messages run to quiescence synchronously; actions are
/// handed to [`handle_action`], which spawns the gateway call and
/// reports back through `msg_tx`.
pub fn process_message<G>(
    state: &mut SessionState,
    message: Message,
    gateway: &Arc<G>,
    msg_tx: &mpsc::Sender<Message>,
) where
    G: AuthGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(gateway), msg_tx.clone());
        }

        msg = result.message;
    }
}
