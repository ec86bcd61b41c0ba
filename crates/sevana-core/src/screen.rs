//! Screen identifiers: the discriminant of the session state machine
//!
//! Exactly one screen is active at any time. The serde tags match the
//! string identifiers used by the legacy front-end so persisted logs and
//! diagnostics stay comparable across both implementations.

use serde::{Deserialize, Serialize};

/// Which view is currently active.
///
/// Closed enumeration; adding a screen means extending this enum and the
/// exhaustive matches in the dispatcher, back-navigation table, and shell.
/// The compiler flags every site that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    // ── Entry & role selection ─────────────────────────────────────────
    #[default]
    Welcome,
    RoleSelection,
    DocPortal,

    // ── Credential logins ──────────────────────────────────────────────
    EmployeeLogin,
    VendorLogin,
    TherapistLogin,
    BeauticianLogin,
    AdminLogin,

    // ── Customer identity workflow ─────────────────────────────────────
    #[serde(rename = "mobile")]
    MobileInput,
    Otp,
    ProfileSetup,
    Complete,

    // ── Customer main flow ─────────────────────────────────────────────
    Home,
    MapView,
    SalonDetail,
    CategoryServices,
    OfferDetail,
    Booking,
    Payment,
    OrderTracking,
    Bookings,
    RescheduleBooking,
    #[serde(rename = "reviewScreen")]
    Review,
    Chat,
    Profile,
    Referral,
    Notifications,
    TherapistTracking,

    // ── Employee / department portals ──────────────────────────────────
    EmployeeDashboard,
    SpaOnboarding,
    DepartmentDashboard,

    // ── Vendor portal ──────────────────────────────────────────────────
    VendorDashboard,
    TherapistManagement,
    AddTherapist,
    EditTherapist,
    AssignTask,
    AssignTherapist,
    BeauticianManagement,
    VendorProfile,
    VendorSettings,

    // ── Therapist portal ───────────────────────────────────────────────
    TherapistDashboard,
    MyAssignments,
    Schedule,
    Location,
    Leaves,
    Earnings,
    Performance,
    TherapistProfile,
    TherapistSettings,

    // ── Beautician portal ──────────────────────────────────────────────
    BeauticianDashboard,
    BeauticianProfile,
    BeauticianAssignments,
    BeauticianSchedule,
    BeauticianLocation,
    BeauticianLeaves,
    BeauticianEarnings,
    BeauticianPerformance,
    BeauticianSettings,

    // ── Admin portal ───────────────────────────────────────────────────
    AdminDashboard,
    AdminProfile,
    AdminSettings,
    VendorApproval,

    // ── Vendor signup funnel ───────────────────────────────────────────
    VendorCategorySelection,
    VendorSignupOptions,
    VendorQuickSignup,
    VendorMobileVerification,
    VendorQuickSignupSuccess,
    VendorSignup,
    VendorSignupSuccess,
    VendorApplicationStatus,
}

impl Screen {
    /// Human-readable title shown in the shell's header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::RoleSelection => "Select Role",
            Screen::DocPortal => "Document Portal",
            Screen::EmployeeLogin => "Employee Login",
            Screen::VendorLogin => "Vendor Login",
            Screen::TherapistLogin => "Therapist Login",
            Screen::BeauticianLogin => "Beautician Login",
            Screen::AdminLogin => "Admin Login",
            Screen::MobileInput => "Sign In",
            Screen::Otp => "Verify OTP",
            Screen::ProfileSetup => "Set Up Profile",
            Screen::Complete => "All Set",
            Screen::Home => "Home",
            Screen::MapView => "Nearby",
            Screen::SalonDetail => "Salon",
            Screen::CategoryServices => "Category Services",
            Screen::OfferDetail => "Special Offer",
            Screen::Booking => "Your Booking",
            Screen::Payment => "Payment",
            Screen::OrderTracking => "Track Order",
            Screen::Bookings => "Bookings",
            Screen::RescheduleBooking => "Reschedule",
            Screen::Review => "Leave a Review",
            Screen::Chat => "Chat",
            Screen::Profile => "Profile",
            Screen::Referral => "Refer & Earn",
            Screen::Notifications => "Notifications",
            Screen::TherapistTracking => "Therapist Tracking",
            Screen::EmployeeDashboard => "Employee Dashboard",
            Screen::SpaOnboarding => "Spa Onboarding",
            Screen::DepartmentDashboard => "Department Dashboard",
            Screen::VendorDashboard => "Vendor Dashboard",
            Screen::TherapistManagement => "Therapists",
            Screen::AddTherapist => "Add Therapist",
            Screen::EditTherapist => "Edit Therapist",
            Screen::AssignTask => "Assign Task",
            Screen::AssignTherapist => "Assign Therapist",
            Screen::BeauticianManagement => "Beauticians",
            Screen::VendorProfile => "Vendor Profile",
            Screen::VendorSettings => "Vendor Settings",
            Screen::TherapistDashboard => "Therapist Dashboard",
            Screen::MyAssignments => "My Assignments",
            Screen::Schedule => "Schedule",
            Screen::Location => "Location",
            Screen::Leaves => "Leaves",
            Screen::Earnings => "Earnings",
            Screen::Performance => "Performance",
            Screen::TherapistProfile => "My Profile",
            Screen::TherapistSettings => "Settings",
            Screen::BeauticianDashboard => "Beautician Dashboard",
            Screen::BeauticianProfile => "My Profile",
            Screen::BeauticianAssignments => "My Assignments",
            Screen::BeauticianSchedule => "Schedule",
            Screen::BeauticianLocation => "Location",
            Screen::BeauticianLeaves => "Leaves",
            Screen::BeauticianEarnings => "Earnings",
            Screen::BeauticianPerformance => "Performance",
            Screen::BeauticianSettings => "Settings",
            Screen::AdminDashboard => "Admin Dashboard",
            Screen::AdminProfile => "Admin Profile",
            Screen::AdminSettings => "Admin Settings",
            Screen::VendorApproval => "Vendor Approvals",
            Screen::VendorCategorySelection => "Choose Category",
            Screen::VendorSignupOptions => "Signup Options",
            Screen::VendorQuickSignup => "Quick Signup",
            Screen::VendorMobileVerification => "Verify Mobile",
            Screen::VendorQuickSignupSuccess => "Signup Complete",
            Screen::VendorSignup => "Vendor Signup",
            Screen::VendorSignupSuccess => "Application Submitted",
            Screen::VendorApplicationStatus => "Application Status",
        }
    }

    /// The legacy string tag for this screen (the serde representation).
    pub fn tag(&self) -> String {
        // Serialization of a unit variant cannot fail.
        serde_json::to_value(self)
            .map(|v| v.as_str().unwrap_or_default().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn test_legacy_tags_round_trip() {
        for (screen, tag) in [
            (Screen::Welcome, "welcome"),
            (Screen::MobileInput, "mobile"),
            (Screen::Otp, "otp"),
            (Screen::ProfileSetup, "profileSetup"),
            (Screen::Review, "reviewScreen"),
            (Screen::VendorDashboard, "vendorDashboard"),
            (Screen::TherapistTracking, "therapistTracking"),
            (Screen::VendorCategorySelection, "vendorCategorySelection"),
        ] {
            assert_eq!(screen.tag(), tag);
            let parsed: Screen = serde_json::from_value(serde_json::json!(tag)).unwrap();
            assert_eq!(parsed, screen);
        }
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(Screen::OrderTracking.to_string(), "orderTracking");
    }

    #[test]
    fn test_titles_are_nonempty() {
        for screen in [Screen::Welcome, Screen::Chat, Screen::VendorApproval] {
            assert!(!screen.title().is_empty());
        }
    }
}
