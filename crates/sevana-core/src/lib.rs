//! # sevana-core - Core Domain Types
//!
//! Foundation crate for the Sevana booking platform. Provides the screen
//! and role enumerations, identity types, booking-domain payload records,
//! error handling, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Screens (`screen`)
//! - [`Screen`] - Closed enumeration of every view in the application;
//!   the discriminant of the session state machine
//!
//! ### Identity (`identity`)
//! - [`Role`] - Authenticated role, gates the portal sub-trees
//! - [`UserProfile`] - Merge-accumulated partial identity
//! - [`ProfileUpdate`], [`Identity`], [`Credentials`], [`Gender`]
//!
//! ### Domain Records (`domain`)
//! - [`Salon`], [`Category`], [`Offer`], [`BookingDraft`], [`CartItem`],
//!   [`PaymentRequest`], [`Order`], [`Booking`], [`Therapist`],
//!   [`Beautician`], [`Assignment`], [`AssignmentStatus`], [`ChatPeer`],
//!   [`VendorSignupDraft`] - typed payloads threaded between screens
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sevana_core::prelude::*;
//! ```

pub mod domain;
pub mod error;
pub mod identity;
pub mod logging;
pub mod screen;

/// Prelude for common imports used throughout all Sevana crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use domain::{
    Assignment, AssignmentStatus, Beautician, Booking, BookingDraft, CartItem, Category, ChatPeer,
    Offer, Order, PaymentRequest, Salon, Therapist, VendorSignupDraft,
};
pub use error::{Error, Result, ResultExt};
pub use identity::{Credentials, Gender, Identity, ProfileUpdate, Role, UserProfile};
pub use screen::Screen;
