//! Navigation handlers: screen changes, back edges, logout

use tracing::{debug, info};

use sevana_core::screen::Screen;

use crate::context::ScreenContext;
use crate::state::SessionState;

use super::{AsyncOp, UpdateAction, UpdateResult};

/// Go to `screen`. An attached payload overwrites the context slot; the
/// last error always clears.
pub fn handle_navigate(
    state: &mut SessionState,
    screen: Screen,
    payload: Option<ScreenContext>,
) -> UpdateResult {
    if let Some(payload) = payload {
        debug!(screen = %screen, kind = payload.kind(), "navigation payload attached");
        state.context = Some(payload);
    }
    state.set_screen(screen);
    UpdateResult::none()
}

/// Follow the back edge of the screen that is current *now*. Screens
/// without a back edge ignore the request.
pub fn handle_back(state: &mut SessionState) -> UpdateResult {
    match back_target(state.screen) {
        Some(target) => {
            state.set_screen(target);
        }
        None => {
            debug!(screen = %state.screen, "no back edge from this screen");
        }
    }
    UpdateResult::none()
}

/// Reset the whole session to its initial value regardless of the
/// current screen, and invalidate the server session in the background.
/// The reset never waits on the gateway.
pub fn handle_logout(state: &mut SessionState) -> UpdateResult {
    info!(from = %state.screen, "logging out");
    state.reset_session();
    UpdateResult::action(UpdateAction::SpawnOp(AsyncOp::Logout))
}

/// Where "back" leads from each screen. Total over the screen set;
/// `None` marks screens with no back edge (roots of their flows).
pub fn back_target(screen: Screen) -> Option<Screen> {
    match screen {
        // Entry points and dashboards are roots
        Screen::Welcome
        | Screen::Home
        | Screen::Complete
        | Screen::EmployeeDashboard
        | Screen::VendorDashboard
        | Screen::TherapistDashboard
        | Screen::BeauticianDashboard
        | Screen::AdminDashboard
        | Screen::Bookings
        | Screen::MapView
        | Screen::Payment
        | Screen::OrderTracking
        | Screen::Profile => None,

        // Back to welcome
        Screen::RoleSelection
        | Screen::DocPortal
        | Screen::EmployeeLogin
        | Screen::VendorLogin
        | Screen::TherapistLogin
        | Screen::BeauticianLogin
        | Screen::AdminLogin
        | Screen::DepartmentDashboard
        | Screen::MobileInput
        | Screen::VendorApplicationStatus => Some(Screen::Welcome),

        // Identity workflow: the only backward edges in the sequence
        Screen::Otp => Some(Screen::MobileInput),
        Screen::ProfileSetup => Some(Screen::Otp),

        // Customer flow
        Screen::SalonDetail | Screen::CategoryServices | Screen::OfferDetail => Some(Screen::Home),
        Screen::Booking => Some(Screen::MapView),
        Screen::RescheduleBooking | Screen::Review => Some(Screen::Bookings),
        Screen::TherapistTracking => Some(Screen::Bookings),
        // Resolved against the live screen at invocation time; always
        // returns to order tracking.
        Screen::Chat => Some(Screen::OrderTracking),
        Screen::Referral | Screen::Notifications => Some(Screen::Profile),

        // Employee portal
        Screen::SpaOnboarding => Some(Screen::EmployeeDashboard),

        // Vendor portal
        Screen::TherapistManagement
        | Screen::BeauticianManagement
        | Screen::AssignTherapist
        | Screen::VendorProfile
        | Screen::VendorSettings => Some(Screen::VendorDashboard),
        Screen::AddTherapist | Screen::EditTherapist | Screen::AssignTask => {
            Some(Screen::TherapistManagement)
        }

        // Therapist portal
        Screen::MyAssignments
        | Screen::Schedule
        | Screen::Location
        | Screen::Leaves
        | Screen::Earnings
        | Screen::Performance
        | Screen::TherapistProfile
        | Screen::TherapistSettings => Some(Screen::TherapistDashboard),

        // Beautician portal
        Screen::BeauticianProfile
        | Screen::BeauticianAssignments
        | Screen::BeauticianSchedule
        | Screen::BeauticianLocation
        | Screen::BeauticianLeaves
        | Screen::BeauticianEarnings
        | Screen::BeauticianPerformance
        | Screen::BeauticianSettings => Some(Screen::BeauticianDashboard),

        // Admin portal
        Screen::AdminProfile | Screen::AdminSettings | Screen::VendorApproval => {
            Some(Screen::AdminDashboard)
        }

        // Vendor signup funnel walks back one stage at a time
        Screen::VendorCategorySelection => Some(Screen::Welcome),
        Screen::VendorSignupOptions => Some(Screen::VendorCategorySelection),
        Screen::VendorQuickSignup => Some(Screen::VendorSignupOptions),
        Screen::VendorMobileVerification => Some(Screen::VendorQuickSignup),
        Screen::VendorQuickSignupSuccess | Screen::VendorSignupSuccess => Some(Screen::Welcome),
        Screen::VendorSignup => Some(Screen::VendorSignupOptions),
    }
}
