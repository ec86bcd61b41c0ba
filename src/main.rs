//! Sevana - session and navigation engine for the booking platform
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; the demo shell runs against the in-memory stub gateway.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use sevana_app::config::Settings;
use sevana_app::state::SessionState;
use sevana_gateway::StubGateway;

/// Sevana - booking platform session shell
#[derive(Parser, Debug)]
#[command(name = "sevana")]
#[command(about = "Session and navigation shell for the Sevana booking platform", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the stub gateway latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Override the fixed OTP ("random" for a fresh code per send)
    #[arg(long, value_name = "CODE")]
    otp: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    sevana_core::logging::init()?;

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(ms) = args.latency_ms {
        settings.gateway.latency_ms = ms;
    }
    if let Some(otp) = args.otp {
        settings.gateway.fixed_otp = if otp == "random" { None } else { Some(otp) };
    }

    let gateway = build_gateway(&settings);
    let state = SessionState::with_settings(settings);

    sevana_tui::run(state, Arc::new(gateway)).await?;
    Ok(())
}

fn build_gateway(settings: &Settings) -> StubGateway {
    let base = if settings.gateway.seed_demo_users {
        StubGateway::seeded_demo()
    } else {
        StubGateway::new()
    };
    base.with_latency(Duration::from_millis(settings.gateway.latency_ms))
        .with_fixed_otp(settings.gateway.fixed_otp.clone())
}
