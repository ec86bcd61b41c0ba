//! Shell run loop
//!
//! Owns the terminal and the session state. Key presses translate to
//! messages through the shell; gateway completions arrive on the
//! message channel; both funnel through the same update path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use sevana_app::process::process_message;
use sevana_app::state::SessionState;
use sevana_core::error::{Error, Result};
use sevana_gateway::AuthGateway;

use crate::input::Shell;
use crate::{event, render, terminal};

/// Capacity of the completion channel. Operations are single-flight, so
/// this never fills in practice.
const CHANNEL_CAPACITY: usize = 64;

/// Run the shell until the user quits.
pub async fn run<G>(mut state: SessionState, gateway: Arc<G>) -> Result<()>
where
    G: AuthGateway + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let (msg_tx, mut msg_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let mut shell = Shell::new();
    let tick = Duration::from_millis(state.settings.shell.tick_ms);

    info!("shell started");

    let result = loop {
        shell.sync(&state);
        if let Err(e) = term.draw(|frame| render::view(frame, &state, &shell)) {
            break Err(Error::from(e));
        }

        // Terminal input
        match event::poll(tick) {
            Ok(Some(key)) => {
                if let Some(msg) = shell.handle_key(&state, key) {
                    process_message(&mut state, msg, &gateway, &msg_tx);
                }
            }
            Ok(None) => {}
            Err(e) => break Err(e),
        }

        // Gateway completions
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(&mut state, msg, &gateway, &msg_tx);
        }

        if state.should_quit() {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("shell stopped");
    result
}
