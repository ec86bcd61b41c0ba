//! Screen dispatcher: maps the active screen to its binding
//!
//! A binding names the view responsible for the screen and carries the
//! only state slice that view may read. The mapping is an exhaustive
//! `match` over [`Screen`], so totality is checked at compile time;
//! what remains a runtime concern is the payload contract -- a screen
//! entered without the context variant it requires resolves to
//! [`ScreenBinding::Fallback`], rendered as a visible "Loading…" state
//! and logged as an error, never a crash.

use tracing::error;

use sevana_core::domain::{
    Assignment, Booking, BookingDraft, Category, ChatPeer, Offer, Order, PaymentRequest, Salon,
    Therapist, VendorSignupDraft,
};
use sevana_core::error::Error;
use sevana_core::identity::{Role, UserProfile};
use sevana_core::screen::Screen;

use crate::state::SessionState;

/// Which portal a credential-login screen signs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAudience {
    Employee,
    Vendor,
    Admin,
}

impl LoginAudience {
    /// The role a login from this screen authenticates as.
    pub fn role(&self) -> Role {
        match self {
            LoginAudience::Employee => Role::Employee,
            LoginAudience::Vendor => Role::Vendor,
            LoginAudience::Admin => Role::Admin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginAudience::Employee => "Employee",
            LoginAudience::Vendor => "Vendor",
            LoginAudience::Admin => "Admin",
        }
    }
}

/// Field-staff portal family (therapist and beautician portals share
/// their screen shapes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffPortal {
    Therapist,
    Beautician,
}

impl StaffPortal {
    pub fn label(&self) -> &'static str {
        match self {
            StaffPortal::Therapist => "Therapist",
            StaffPortal::Beautician => "Beautician",
        }
    }
}

/// Leaf sections of a field-staff portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffSection {
    Assignments,
    Schedule,
    Location,
    Leaves,
    Earnings,
    Performance,
    Profile,
    Settings,
}

/// Leaf sections of the vendor portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorSection {
    Profile,
    Settings,
}

/// Leaf sections of the admin portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Profile,
    Settings,
}

/// Stages of the vendor signup funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStage {
    CategorySelection,
    Options,
    Quick,
    MobileVerification,
    QuickSuccess,
    Full,
    FullSuccess,
}

/// Where an assign-task screen was opened from (decides its back edge
/// and completion target).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOrigin {
    Management,
    Dashboard,
}

/// The view responsible for the active screen plus the state slice it
/// is allowed to read. Nothing else of the session is visible to it.
#[derive(Debug, PartialEq)]
pub enum ScreenBinding<'a> {
    Welcome,
    RoleSelection {
        pending: bool,
        error: Option<&'a str>,
    },
    DocPortal,
    CredentialLogin {
        audience: LoginAudience,
        pending: bool,
        error: Option<&'a str>,
    },
    StaffLogin {
        portal: StaffPortal,
    },
    MobileEntry {
        pending: bool,
        error: Option<&'a str>,
    },
    OtpEntry {
        mobile: Option<&'a str>,
        pending: bool,
        error: Option<&'a str>,
    },
    ProfileForm {
        pending: bool,
        error: Option<&'a str>,
    },
    Completion {
        profile: &'a UserProfile,
    },
    Home {
        profile: &'a UserProfile,
    },
    MapView {
        focus_provider: Option<&'a str>,
    },
    SalonDetail {
        salon: &'a Salon,
    },
    CategoryServices {
        category: Option<&'a Category>,
    },
    OfferDetail {
        offer: Option<&'a Offer>,
    },
    CartReview {
        draft: Option<&'a BookingDraft>,
    },
    Payment {
        request: Option<&'a PaymentRequest>,
    },
    OrderTracking {
        order: Option<&'a Order>,
    },
    BookingHistory,
    Reschedule {
        booking: &'a Booking,
    },
    Review {
        booking: &'a Booking,
    },
    Chat {
        peer: Option<&'a ChatPeer>,
    },
    CustomerProfile {
        profile: &'a UserProfile,
    },
    Referral {
        profile: &'a UserProfile,
    },
    Notifications,
    TherapistTracking {
        assignment: &'a Assignment,
    },
    EmployeeDashboard {
        profile: &'a UserProfile,
    },
    SpaOnboarding,
    DepartmentDashboard {
        role: Role,
        profile: &'a UserProfile,
    },
    VendorDashboard {
        profile: &'a UserProfile,
        /// Pre-approval applicants see the applicant portal instead of
        /// the full dashboard.
        applicant: bool,
    },
    StaffRoster {
        portal: StaffPortal,
    },
    TherapistForm {
        existing: Option<&'a Therapist>,
    },
    AssignTask {
        therapist: Option<&'a Therapist>,
        origin: AssignOrigin,
    },
    VendorSection {
        section: VendorSection,
    },
    StaffDashboard {
        portal: StaffPortal,
        profile: &'a UserProfile,
    },
    StaffSection {
        portal: StaffPortal,
        section: StaffSection,
    },
    AdminDashboard {
        profile: &'a UserProfile,
    },
    AdminSection {
        section: AdminSection,
    },
    VendorApproval,
    VendorSignup {
        stage: SignupStage,
        draft: Option<&'a VendorSignupDraft>,
    },
    VendorApplicationStatus,
    /// Visible safe state for a violated payload contract.
    Fallback {
        screen: Screen,
    },
}

/// Resolve the binding for the current screen.
pub fn dispatch(state: &SessionState) -> ScreenBinding<'_> {
    let pending = state.is_pending();
    let error = state.last_error.as_deref();
    let ctx = state.context.as_ref();

    match state.screen {
        Screen::Welcome => ScreenBinding::Welcome,
        Screen::RoleSelection => ScreenBinding::RoleSelection { pending, error },
        Screen::DocPortal => ScreenBinding::DocPortal,

        Screen::EmployeeLogin => ScreenBinding::CredentialLogin {
            audience: LoginAudience::Employee,
            pending,
            error,
        },
        Screen::VendorLogin => ScreenBinding::CredentialLogin {
            audience: LoginAudience::Vendor,
            pending,
            error,
        },
        Screen::AdminLogin => ScreenBinding::CredentialLogin {
            audience: LoginAudience::Admin,
            pending,
            error,
        },
        Screen::TherapistLogin => ScreenBinding::StaffLogin {
            portal: StaffPortal::Therapist,
        },
        Screen::BeauticianLogin => ScreenBinding::StaffLogin {
            portal: StaffPortal::Beautician,
        },

        Screen::MobileInput => ScreenBinding::MobileEntry { pending, error },
        Screen::Otp => ScreenBinding::OtpEntry {
            mobile: state.profile.mobile.as_deref(),
            pending,
            error,
        },
        Screen::ProfileSetup => ScreenBinding::ProfileForm { pending, error },
        Screen::Complete => ScreenBinding::Completion {
            profile: &state.profile,
        },

        Screen::Home => ScreenBinding::Home {
            profile: &state.profile,
        },
        Screen::MapView => ScreenBinding::MapView {
            focus_provider: ctx.and_then(|c| c.as_map_focus()),
        },
        Screen::SalonDetail => match ctx.and_then(|c| c.as_salon()) {
            Some(salon) => ScreenBinding::SalonDetail { salon },
            None => fallback(state.screen, "salon"),
        },
        Screen::CategoryServices => ScreenBinding::CategoryServices {
            category: ctx.and_then(|c| c.as_category()),
        },
        Screen::OfferDetail => ScreenBinding::OfferDetail {
            offer: ctx.and_then(|c| c.as_offer()),
        },
        Screen::Booking => ScreenBinding::CartReview {
            draft: ctx.and_then(|c| c.as_cart()),
        },
        Screen::Payment => ScreenBinding::Payment {
            request: ctx.and_then(|c| c.as_payment()),
        },
        Screen::OrderTracking => ScreenBinding::OrderTracking {
            order: ctx.and_then(|c| c.as_order()),
        },
        Screen::Bookings => ScreenBinding::BookingHistory,
        Screen::RescheduleBooking => match ctx.and_then(|c| c.as_booking()) {
            Some(booking) => ScreenBinding::Reschedule { booking },
            None => fallback(state.screen, "booking"),
        },
        Screen::Review => match ctx.and_then(|c| c.as_booking()) {
            Some(booking) => ScreenBinding::Review { booking },
            None => fallback(state.screen, "booking"),
        },
        Screen::Chat => ScreenBinding::Chat {
            peer: ctx.and_then(|c| c.as_chat()),
        },
        Screen::Profile => ScreenBinding::CustomerProfile {
            profile: &state.profile,
        },
        Screen::Referral => ScreenBinding::Referral {
            profile: &state.profile,
        },
        Screen::Notifications => ScreenBinding::Notifications,
        Screen::TherapistTracking => match ctx.and_then(|c| c.as_assignment()) {
            Some(assignment) => ScreenBinding::TherapistTracking { assignment },
            None => fallback(state.screen, "assignment"),
        },

        Screen::EmployeeDashboard => ScreenBinding::EmployeeDashboard {
            profile: &state.profile,
        },
        Screen::SpaOnboarding => ScreenBinding::SpaOnboarding,
        Screen::DepartmentDashboard => match state.role {
            Some(role) => ScreenBinding::DepartmentDashboard {
                role,
                profile: &state.profile,
            },
            None => fallback(state.screen, "role"),
        },

        Screen::VendorDashboard => ScreenBinding::VendorDashboard {
            profile: &state.profile,
            applicant: state.role == Some(Role::VendorApplicant),
        },
        Screen::TherapistManagement => ScreenBinding::StaffRoster {
            portal: StaffPortal::Therapist,
        },
        Screen::BeauticianManagement => ScreenBinding::StaffRoster {
            portal: StaffPortal::Beautician,
        },
        Screen::AddTherapist => ScreenBinding::TherapistForm { existing: None },
        Screen::EditTherapist => match ctx.and_then(|c| c.as_therapist()) {
            Some(therapist) => ScreenBinding::TherapistForm {
                existing: Some(therapist),
            },
            None => fallback(state.screen, "therapist"),
        },
        Screen::AssignTask => ScreenBinding::AssignTask {
            therapist: ctx.and_then(|c| c.as_therapist()),
            origin: AssignOrigin::Management,
        },
        Screen::AssignTherapist => ScreenBinding::AssignTask {
            therapist: ctx.and_then(|c| c.as_therapist()),
            origin: AssignOrigin::Dashboard,
        },
        Screen::VendorProfile => ScreenBinding::VendorSection {
            section: VendorSection::Profile,
        },
        Screen::VendorSettings => ScreenBinding::VendorSection {
            section: VendorSection::Settings,
        },

        Screen::TherapistDashboard => ScreenBinding::StaffDashboard {
            portal: StaffPortal::Therapist,
            profile: &state.profile,
        },
        Screen::MyAssignments => staff_section(StaffPortal::Therapist, StaffSection::Assignments),
        Screen::Schedule => staff_section(StaffPortal::Therapist, StaffSection::Schedule),
        Screen::Location => staff_section(StaffPortal::Therapist, StaffSection::Location),
        Screen::Leaves => staff_section(StaffPortal::Therapist, StaffSection::Leaves),
        Screen::Earnings => staff_section(StaffPortal::Therapist, StaffSection::Earnings),
        Screen::Performance => staff_section(StaffPortal::Therapist, StaffSection::Performance),
        Screen::TherapistProfile => staff_section(StaffPortal::Therapist, StaffSection::Profile),
        Screen::TherapistSettings => staff_section(StaffPortal::Therapist, StaffSection::Settings),

        Screen::BeauticianDashboard => ScreenBinding::StaffDashboard {
            portal: StaffPortal::Beautician,
            profile: &state.profile,
        },
        Screen::BeauticianAssignments => {
            staff_section(StaffPortal::Beautician, StaffSection::Assignments)
        }
        Screen::BeauticianSchedule => staff_section(StaffPortal::Beautician, StaffSection::Schedule),
        Screen::BeauticianLocation => staff_section(StaffPortal::Beautician, StaffSection::Location),
        Screen::BeauticianLeaves => staff_section(StaffPortal::Beautician, StaffSection::Leaves),
        Screen::BeauticianEarnings => staff_section(StaffPortal::Beautician, StaffSection::Earnings),
        Screen::BeauticianPerformance => {
            staff_section(StaffPortal::Beautician, StaffSection::Performance)
        }
        Screen::BeauticianProfile => staff_section(StaffPortal::Beautician, StaffSection::Profile),
        Screen::BeauticianSettings => staff_section(StaffPortal::Beautician, StaffSection::Settings),

        Screen::AdminDashboard => ScreenBinding::AdminDashboard {
            profile: &state.profile,
        },
        Screen::AdminProfile => ScreenBinding::AdminSection {
            section: AdminSection::Profile,
        },
        Screen::AdminSettings => ScreenBinding::AdminSection {
            section: AdminSection::Settings,
        },
        Screen::VendorApproval => ScreenBinding::VendorApproval,

        Screen::VendorCategorySelection => signup_stage(ctx, SignupStage::CategorySelection),
        Screen::VendorSignupOptions => signup_stage(ctx, SignupStage::Options),
        Screen::VendorQuickSignup => signup_stage(ctx, SignupStage::Quick),
        Screen::VendorMobileVerification => signup_stage(ctx, SignupStage::MobileVerification),
        Screen::VendorQuickSignupSuccess => signup_stage(ctx, SignupStage::QuickSuccess),
        Screen::VendorSignup => signup_stage(ctx, SignupStage::Full),
        Screen::VendorSignupSuccess => signup_stage(ctx, SignupStage::FullSuccess),
        Screen::VendorApplicationStatus => ScreenBinding::VendorApplicationStatus,
    }
}

fn staff_section(portal: StaffPortal, section: StaffSection) -> ScreenBinding<'static> {
    ScreenBinding::StaffSection { portal, section }
}

fn signup_stage(
    ctx: Option<&crate::context::ScreenContext>,
    stage: SignupStage,
) -> ScreenBinding<'_> {
    ScreenBinding::VendorSignup {
        stage,
        draft: ctx.and_then(|c| c.as_vendor_signup()),
    }
}

fn fallback(screen: Screen, expected: &'static str) -> ScreenBinding<'static> {
    error!(
        "{}",
        Error::payload_contract(screen, expected)
    );
    ScreenBinding::Fallback { screen }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ScreenContext;
    use sevana_core::domain::AssignmentStatus;

    fn salon() -> Salon {
        Salon {
            id: "s1".to_string(),
            name: "Lotus Day Spa".to_string(),
            address: "12 Lake Rd".to_string(),
            rating: 4.6,
            distance_km: 1.2,
            is_open: true,
        }
    }

    #[test]
    fn test_salon_detail_receives_typed_payload() {
        let mut state = SessionState::new();
        state.context = Some(ScreenContext::Salon(salon()));
        state.set_screen(Screen::SalonDetail);

        match dispatch(&state) {
            ScreenBinding::SalonDetail { salon } => assert_eq!(salon.id, "s1"),
            other => panic!("unexpected binding: {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_payload_yields_fallback() {
        let mut state = SessionState::new();
        state.set_screen(Screen::TherapistTracking);

        assert_eq!(
            dispatch(&state),
            ScreenBinding::Fallback {
                screen: Screen::TherapistTracking
            }
        );
    }

    #[test]
    fn test_wrong_variant_payload_yields_fallback() {
        let mut state = SessionState::new();
        state.context = Some(ScreenContext::Salon(salon()));
        state.set_screen(Screen::RescheduleBooking);

        assert_eq!(
            dispatch(&state),
            ScreenBinding::Fallback {
                screen: Screen::RescheduleBooking
            }
        );
    }

    #[test]
    fn test_optional_payload_screens_tolerate_absence() {
        let mut state = SessionState::new();
        state.set_screen(Screen::Chat);
        assert_eq!(dispatch(&state), ScreenBinding::Chat { peer: None });

        state.set_screen(Screen::MapView);
        assert_eq!(
            dispatch(&state),
            ScreenBinding::MapView {
                focus_provider: None
            }
        );
    }

    #[test]
    fn test_otp_entry_sees_captured_mobile() {
        let mut state = SessionState::new();
        state.profile.mobile = Some("9876543210".to_string());
        state.set_screen(Screen::Otp);

        match dispatch(&state) {
            ScreenBinding::OtpEntry { mobile, .. } => {
                assert_eq!(mobile, Some("9876543210"));
            }
            other => panic!("unexpected binding: {other:?}"),
        }
    }

    #[test]
    fn test_vendor_dashboard_branches_on_applicant_role() {
        let mut state = SessionState::new();
        state.role = Some(Role::VendorApplicant);
        state.set_screen(Screen::VendorDashboard);

        match dispatch(&state) {
            ScreenBinding::VendorDashboard { applicant, .. } => assert!(applicant),
            other => panic!("unexpected binding: {other:?}"),
        }

        state.role = Some(Role::Vendor);
        match dispatch(&state) {
            ScreenBinding::VendorDashboard { applicant, .. } => assert!(!applicant),
            other => panic!("unexpected binding: {other:?}"),
        }
    }

    #[test]
    fn test_department_dashboard_without_role_is_fallback() {
        let mut state = SessionState::new();
        state.set_screen(Screen::DepartmentDashboard);
        assert_eq!(
            dispatch(&state),
            ScreenBinding::Fallback {
                screen: Screen::DepartmentDashboard
            }
        );

        state.role = Some(Role::FinanceDepartment);
        match dispatch(&state) {
            ScreenBinding::DepartmentDashboard { role, .. } => {
                assert_eq!(role, Role::FinanceDepartment);
            }
            other => panic!("unexpected binding: {other:?}"),
        }
    }

    #[test]
    fn test_assign_screens_differ_only_in_origin() {
        let mut state = SessionState::new();
        state.set_screen(Screen::AssignTask);
        assert_eq!(
            dispatch(&state),
            ScreenBinding::AssignTask {
                therapist: None,
                origin: AssignOrigin::Management
            }
        );

        state.set_screen(Screen::AssignTherapist);
        assert_eq!(
            dispatch(&state),
            ScreenBinding::AssignTask {
                therapist: None,
                origin: AssignOrigin::Dashboard
            }
        );
    }

    #[test]
    fn test_tracking_screen_with_assignment_payload() {
        let mut state = SessionState::new();
        state.context = Some(ScreenContext::Assignment(Assignment {
            id: "as1".to_string(),
            booking_id: "b1".to_string(),
            staff_id: "t1".to_string(),
            customer_name: "Asha".to_string(),
            address: "12 Lake Rd".to_string(),
            status: AssignmentStatus::InProgress,
        }));
        state.set_screen(Screen::TherapistTracking);

        match dispatch(&state) {
            ScreenBinding::TherapistTracking { assignment } => {
                assert_eq!(assignment.status, AssignmentStatus::InProgress);
            }
            other => panic!("unexpected binding: {other:?}"),
        }
    }
}
