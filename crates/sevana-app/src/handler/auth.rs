//! Identity intents, async completions, and role routing

use tracing::{debug, error, warn};

use sevana_core::error::{Error, Result};
use sevana_core::identity::{Credentials, ProfileUpdate, Role};
use sevana_core::screen::Screen;

use crate::message::{AsyncKind, AsyncOutcome};
use crate::state::{Epoch, SessionState};

use super::{AsyncOp, UpdateAction, UpdateResult};

/// Single-flight guard: refuse to start an operation while one is in
/// flight. Returns `true` when the intent must be dropped.
fn busy(state: &SessionState, wanted: AsyncKind) -> bool {
    if let Some(pending) = &state.pending {
        warn!(
            in_flight = ?pending.kind,
            refused = ?wanted,
            "operation already in flight, intent ignored"
        );
        return true;
    }
    false
}

pub fn handle_send_otp(state: &mut SessionState, mobile: String) -> UpdateResult {
    if busy(state, AsyncKind::SendOtp) {
        return UpdateResult::none();
    }
    state.begin_async(AsyncKind::SendOtp);
    UpdateResult::action(UpdateAction::SpawnOp(AsyncOp::SendOtp {
        mobile,
        epoch: state.epoch,
    }))
}

/// Re-dispatch to the number already captured on the profile.
pub fn handle_resend_otp(state: &mut SessionState) -> UpdateResult {
    let Some(mobile) = state.profile.mobile.clone() else {
        warn!("resend requested with no mobile on record");
        state.last_error = Some("No mobile number on record.".to_string());
        return UpdateResult::none();
    };
    handle_send_otp(state, mobile)
}

pub fn handle_verify_otp(state: &mut SessionState, code: String) -> UpdateResult {
    if busy(state, AsyncKind::VerifyOtp) {
        return UpdateResult::none();
    }
    let Some(mobile) = state.profile.mobile.clone() else {
        warn!("verify requested with no mobile on record");
        state.last_error = Some("No mobile number on record.".to_string());
        return UpdateResult::none();
    };
    state.begin_async(AsyncKind::VerifyOtp);
    UpdateResult::action(UpdateAction::SpawnOp(AsyncOp::VerifyOtp {
        mobile,
        code,
        epoch: state.epoch,
    }))
}

pub fn handle_login(state: &mut SessionState, credentials: Credentials) -> UpdateResult {
    if busy(state, AsyncKind::Login) {
        return UpdateResult::none();
    }
    state.begin_async(AsyncKind::Login);
    UpdateResult::action(UpdateAction::SpawnOp(AsyncOp::Login {
        credentials,
        epoch: state.epoch,
    }))
}

pub fn handle_complete_profile(state: &mut SessionState, fields: ProfileUpdate) -> UpdateResult {
    if busy(state, AsyncKind::CompleteProfile) {
        return UpdateResult::none();
    }
    state.begin_async(AsyncKind::CompleteProfile);
    UpdateResult::action(UpdateAction::SpawnOp(AsyncOp::CompleteProfile {
        fields,
        epoch: state.epoch,
    }))
}

/// Back-office role selection. No gateway call: the role takes effect
/// immediately and routing follows it.
pub fn handle_select_role(state: &mut SessionState, role: Role) -> UpdateResult {
    state.role = Some(role);
    let destination = if role == Role::SuperAdmin {
        Screen::AdminDashboard
    } else {
        Screen::DepartmentDashboard
    };
    state.set_screen(destination);
    UpdateResult::none()
}

pub fn handle_async_succeeded(
    state: &mut SessionState,
    epoch: Epoch,
    outcome: AsyncOutcome,
) -> UpdateResult {
    state.finish_async(outcome.kind(), epoch);

    if epoch != state.epoch {
        debug!(
            issued = %epoch,
            current = %state.epoch,
            kind = ?outcome.kind(),
            "stale async result discarded"
        );
        return UpdateResult::none();
    }

    match outcome {
        AsyncOutcome::OtpSent { mobile } => {
            state.profile.mobile = Some(mobile);
            state.set_screen(Screen::Otp);
        }

        AsyncOutcome::OtpVerified => {
            // A fresh identity continues signup; an already-verified one
            // is a returning user and skips straight home.
            let first_verification = !state.profile.is_verified;
            state.profile.is_verified = true;
            state.set_screen(if first_verification {
                Screen::ProfileSetup
            } else {
                Screen::Home
            });
        }

        AsyncOutcome::LoggedIn { identity } => {
            state.profile.absorb_identity(&identity);
            state.role = Some(identity.role);
            match dashboard_for_role(identity.role) {
                Ok(destination) => state.set_screen(destination),
                Err(err) => {
                    // Configuration error: loud, visible, and no guessing
                    // at a dashboard.
                    error!(role = %identity.role, "login destination misconfigured: {err}");
                    state.last_error = Some(err.to_string());
                }
            }
        }

        AsyncOutcome::ProfileCompleted { fields } => {
            state.profile.merge(fields);
            state.set_screen(Screen::Complete);
        }
    }

    UpdateResult::none()
}

pub fn handle_async_failed(
    state: &mut SessionState,
    epoch: Epoch,
    kind: AsyncKind,
    error: String,
) -> UpdateResult {
    state.finish_async(kind, epoch);

    if epoch != state.epoch {
        debug!(issued = %epoch, current = %state.epoch, ?kind, "stale async failure discarded");
        return UpdateResult::none();
    }

    // The screen stays put; the user sees the error inline and retries.
    state.last_error = Some(error);
    UpdateResult::none()
}

/// Post-login destination, keyed by role. Total over the role set:
/// `Customer` authenticates through the OTP workflow and has no
/// credential-login dashboard, so reaching here with it is a
/// configuration error.
pub fn dashboard_for_role(role: Role) -> Result<Screen> {
    match role {
        Role::Employee => Ok(Screen::EmployeeDashboard),
        Role::Vendor | Role::VendorApplicant => Ok(Screen::VendorDashboard),
        Role::Admin | Role::SuperAdmin => Ok(Screen::AdminDashboard),
        Role::AccountsDepartment
        | Role::MarketingDepartment
        | Role::FinanceDepartment
        | Role::LegalDepartment
        | Role::CustomerCare
        | Role::StaffDepartment
        | Role::VendorList
        | Role::CustomerData
        | Role::FoDepartment
        | Role::ItDepartment
        | Role::HoDetails
        | Role::CorporateOffice
        | Role::Advocate
        | Role::CaCs
        | Role::Directors
        | Role::HrDepartment => Ok(Screen::DepartmentDashboard),
        Role::Customer => Err(Error::unroutable_role(role)),
    }
}
