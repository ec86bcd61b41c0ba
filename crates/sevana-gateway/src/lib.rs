//! # sevana-gateway - Identity Operation Gateway
//!
//! The boundary abstraction for all identity-related calls: OTP dispatch
//! and verification, credential login, profile completion, logout. The
//! session engine depends on the [`AuthGateway`] trait; the network-backed
//! implementation lives with the deployment, and [`StubGateway`] serves
//! the demo shell and tests.
//!
//! Operations return typed [`GatewayError`] envelopes and never panic; no
//! operation has side effects beyond its single responsibility (logging in
//! never navigates -- the transition engine owns that).

pub mod error;
pub mod gateway;
pub mod stub;

pub use error::GatewayError;
pub use gateway::{AuthGateway, LocalAuthGateway};
pub use stub::StubGateway;
