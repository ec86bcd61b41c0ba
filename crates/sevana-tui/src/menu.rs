//! Per-screen menu wiring
//!
//! Each screen's menu is the set of navigations and intents it offers,
//! mirroring the callbacks the screens receive from the dispatcher.
//! Payload-bearing entries attach demo records; the engine and
//! dispatcher treat them exactly like production payloads.

use sevana_app::context::ScreenContext;
use sevana_app::message::Message;
use sevana_app::state::SessionState;
use sevana_core::identity::Role;
use sevana_core::screen::Screen;

use crate::demo;

/// One selectable menu row.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub label: &'static str,
    pub message: Message,
}

impl MenuEntry {
    fn new(label: &'static str, message: Message) -> Self {
        Self { label, message }
    }

    fn go(label: &'static str, screen: Screen) -> Self {
        Self::new(label, Message::navigate(screen))
    }

    fn go_with(label: &'static str, screen: Screen, payload: ScreenContext) -> Self {
        Self::new(label, Message::navigate_with(screen, payload))
    }

    fn back() -> Self {
        Self::new("Back", Message::NavigateBack)
    }

    fn logout() -> Self {
        Self::new("Log out", Message::Logout)
    }
}

/// Menu rows for the current screen. Form screens have none; leaf
/// screens fall back to a single back edge.
pub fn entries(state: &SessionState) -> Vec<MenuEntry> {
    match state.screen {
        Screen::Welcome => vec![
            MenuEntry::go("Customer sign in", Screen::MobileInput),
            MenuEntry::go("Employee login", Screen::EmployeeLogin),
            MenuEntry::go("Vendor login", Screen::VendorLogin),
            MenuEntry::go("Therapist login", Screen::TherapistLogin),
            MenuEntry::go("Beautician login", Screen::BeauticianLogin),
            MenuEntry::go("Admin login", Screen::AdminLogin),
            MenuEntry::go("Department role selection", Screen::RoleSelection),
            MenuEntry::go("Become a vendor", Screen::VendorCategorySelection),
            MenuEntry::go("Track vendor application", Screen::VendorApplicationStatus),
            MenuEntry::go("Documentation portal", Screen::DocPortal),
        ],

        Screen::RoleSelection => vec![
            MenuEntry::new(
                "Super admin",
                Message::SelectRole {
                    role: Role::SuperAdmin,
                },
            ),
            MenuEntry::new(
                "Finance department",
                Message::SelectRole {
                    role: Role::FinanceDepartment,
                },
            ),
            MenuEntry::new(
                "HR department",
                Message::SelectRole {
                    role: Role::HrDepartment,
                },
            ),
            MenuEntry::new(
                "Customer care",
                Message::SelectRole {
                    role: Role::CustomerCare,
                },
            ),
            MenuEntry::new(
                "Legal department",
                Message::SelectRole {
                    role: Role::LegalDepartment,
                },
            ),
            MenuEntry::back(),
        ],

        // Mock portal logins: these screens never used the auth service.
        Screen::TherapistLogin => vec![
            MenuEntry::go("Sign in as Priya Sharma", Screen::TherapistDashboard),
            MenuEntry::back(),
        ],
        Screen::BeauticianLogin => vec![
            MenuEntry::go("Sign in as Priya Sharma", Screen::BeauticianDashboard),
            MenuEntry::back(),
        ],

        Screen::Complete => vec![MenuEntry::go("Continue", Screen::Home)],

        // ── Customer main flow ────────────────────────────────────────
        Screen::Home => vec![
            MenuEntry::go_with(
                "Lotus Day Spa (1.2 km)",
                Screen::SalonDetail,
                ScreenContext::Salon(demo::salon()),
            ),
            MenuEntry::go("Nearby spas on the map", Screen::MapView),
            MenuEntry::go_with(
                "Find Lotus Day Spa on the map",
                Screen::MapView,
                ScreenContext::MapFocus {
                    provider_id: "salon_1".to_string(),
                },
            ),
            MenuEntry::go("My bookings", Screen::Bookings),
            MenuEntry::go("Profile", Screen::Profile),
        ],

        Screen::MapView => vec![
            MenuEntry::go_with(
                "Book at Lotus Day Spa",
                Screen::Booking,
                ScreenContext::Cart(demo::cart()),
            ),
            MenuEntry::go("Home", Screen::Home),
        ],

        Screen::SalonDetail => vec![
            MenuEntry::go_with(
                "Book selected services",
                Screen::Booking,
                ScreenContext::Cart(demo::cart()),
            ),
            MenuEntry::go("See on map", Screen::MapView),
            MenuEntry::back(),
        ],

        Screen::Booking => vec![
            MenuEntry::go_with(
                "Proceed to payment",
                Screen::Payment,
                ScreenContext::Payment(demo::payment_request()),
            ),
            MenuEntry::back(),
        ],

        Screen::Payment => vec![MenuEntry::go_with(
            "Pay and track order",
            Screen::OrderTracking,
            ScreenContext::Order(demo::order()),
        )],

        Screen::OrderTracking => vec![
            MenuEntry::go_with(
                "Chat with your therapist",
                Screen::Chat,
                ScreenContext::Chat(demo::chat_peer()),
            ),
            MenuEntry::go("Home", Screen::Home),
        ],

        Screen::Bookings => vec![
            MenuEntry::go_with(
                "Reschedule spa day",
                Screen::RescheduleBooking,
                ScreenContext::Booking(demo::booking()),
            ),
            MenuEntry::go_with(
                "Review your last visit",
                Screen::Review,
                ScreenContext::Booking(demo::booking()),
            ),
            MenuEntry::go_with(
                "Track your therapist",
                Screen::TherapistTracking,
                ScreenContext::Assignment(demo::assignment()),
            ),
            MenuEntry::go("Map", Screen::MapView),
        ],

        Screen::RescheduleBooking => vec![
            MenuEntry::go("Confirm new slot", Screen::Bookings),
            MenuEntry::go("Cancel", Screen::Bookings),
        ],

        Screen::Review => vec![
            MenuEntry::go("Submit review", Screen::Bookings),
            MenuEntry::back(),
        ],

        Screen::Profile => vec![
            MenuEntry::go("Refer & earn", Screen::Referral),
            MenuEntry::go("Notifications", Screen::Notifications),
            MenuEntry::logout(),
        ],

        Screen::Notifications => vec![
            MenuEntry::go_with(
                "Review your last visit",
                Screen::Review,
                ScreenContext::Booking(demo::booking()),
            ),
            MenuEntry::back(),
        ],

        // ── Employee / department portals ─────────────────────────────
        Screen::EmployeeDashboard => vec![
            MenuEntry::go("Onboard a spa", Screen::SpaOnboarding),
            MenuEntry::logout(),
        ],
        Screen::SpaOnboarding => vec![
            MenuEntry::go("Submit onboarding", Screen::EmployeeDashboard),
            MenuEntry::back(),
        ],
        Screen::DepartmentDashboard => vec![MenuEntry::back(), MenuEntry::logout()],

        // ── Vendor portal ─────────────────────────────────────────────
        Screen::VendorDashboard => vec![
            MenuEntry::go("Manage therapists", Screen::TherapistManagement),
            MenuEntry::go("Manage beauticians", Screen::BeauticianManagement),
            MenuEntry::go_with(
                "Assign therapist to a booking",
                Screen::AssignTherapist,
                ScreenContext::Therapist(demo::therapist()),
            ),
            MenuEntry::go("Profile settings", Screen::VendorProfile),
            MenuEntry::go("Settings", Screen::VendorSettings),
            MenuEntry::logout(),
        ],

        Screen::TherapistManagement => vec![
            MenuEntry::go("Add therapist", Screen::AddTherapist),
            MenuEntry::go_with(
                "Edit Priya Sharma",
                Screen::EditTherapist,
                ScreenContext::Therapist(demo::therapist()),
            ),
            MenuEntry::go_with(
                "Assign task to Priya Sharma",
                Screen::AssignTask,
                ScreenContext::Therapist(demo::therapist()),
            ),
            MenuEntry::back(),
        ],

        Screen::AddTherapist | Screen::EditTherapist => vec![
            MenuEntry::go("Save", Screen::TherapistManagement),
            MenuEntry::back(),
        ],

        Screen::AssignTask | Screen::AssignTherapist => vec![
            MenuEntry::go("Assign and notify customer", Screen::VendorDashboard),
            MenuEntry::back(),
        ],

        // ── Therapist portal ──────────────────────────────────────────
        Screen::TherapistDashboard => vec![
            MenuEntry::go("My assignments", Screen::MyAssignments),
            MenuEntry::go("Schedule", Screen::Schedule),
            MenuEntry::go("Location", Screen::Location),
            MenuEntry::go("Leaves", Screen::Leaves),
            MenuEntry::go("Earnings", Screen::Earnings),
            MenuEntry::go("Performance", Screen::Performance),
            MenuEntry::go("My profile", Screen::TherapistProfile),
            MenuEntry::go("Settings", Screen::TherapistSettings),
            MenuEntry::logout(),
        ],

        // ── Beautician portal ─────────────────────────────────────────
        Screen::BeauticianDashboard => vec![
            MenuEntry::go("My assignments", Screen::BeauticianAssignments),
            MenuEntry::go("Schedule", Screen::BeauticianSchedule),
            MenuEntry::go("Location", Screen::BeauticianLocation),
            MenuEntry::go("Leaves", Screen::BeauticianLeaves),
            MenuEntry::go("Earnings", Screen::BeauticianEarnings),
            MenuEntry::go("Performance", Screen::BeauticianPerformance),
            MenuEntry::go("My profile", Screen::BeauticianProfile),
            MenuEntry::go("Settings", Screen::BeauticianSettings),
            MenuEntry::logout(),
        ],

        // ── Admin portal ──────────────────────────────────────────────
        Screen::AdminDashboard => vec![
            MenuEntry::go("Vendor approvals", Screen::VendorApproval),
            MenuEntry::go("Admin profile", Screen::AdminProfile),
            MenuEntry::go("Settings", Screen::AdminSettings),
            MenuEntry::logout(),
        ],

        // ── Vendor signup funnel ──────────────────────────────────────
        Screen::VendorCategorySelection => vec![
            MenuEntry::go_with(
                "Spa & wellness",
                Screen::VendorSignupOptions,
                signup_draft("spa", None),
            ),
            MenuEntry::go_with(
                "Beauty salon",
                Screen::VendorSignupOptions,
                signup_draft("salon", None),
            ),
            MenuEntry::back(),
        ],
        Screen::VendorSignupOptions => vec![
            MenuEntry::go_with(
                "Quick signup",
                Screen::VendorQuickSignup,
                carry_signup(state, Some("quick")),
            ),
            MenuEntry::go_with(
                "Full application",
                Screen::VendorSignup,
                carry_signup(state, Some("full")),
            ),
            MenuEntry::back(),
        ],
        Screen::VendorQuickSignup => vec![
            MenuEntry::go_with(
                "Continue to mobile verification",
                Screen::VendorMobileVerification,
                carry_signup(state, None),
            ),
            MenuEntry::back(),
        ],
        Screen::VendorMobileVerification => vec![
            MenuEntry::go_with(
                "Verified, finish signup",
                Screen::VendorQuickSignupSuccess,
                carry_signup(state, None),
            ),
            MenuEntry::back(),
        ],
        Screen::VendorSignup => vec![
            MenuEntry::go_with(
                "Submit application",
                Screen::VendorSignupSuccess,
                carry_signup(state, None),
            ),
            MenuEntry::back(),
        ],
        Screen::VendorQuickSignupSuccess | Screen::VendorSignupSuccess => {
            vec![MenuEntry::go("Done", Screen::Welcome)]
        }

        // Form screens have no menu
        Screen::MobileInput
        | Screen::Otp
        | Screen::ProfileSetup
        | Screen::EmployeeLogin
        | Screen::VendorLogin
        | Screen::AdminLogin => Vec::new(),

        // Leaf screens: a lone back edge
        _ => vec![MenuEntry::back()],
    }
}

fn signup_draft(category: &str, signup_type: Option<&str>) -> ScreenContext {
    ScreenContext::VendorSignup(sevana_core::domain::VendorSignupDraft {
        category: Some(category.to_string()),
        signup_type: signup_type.map(str::to_string),
        ..Default::default()
    })
}

/// Carry the funnel draft forward, optionally stamping the chosen
/// signup type onto it.
fn carry_signup(state: &SessionState, signup_type: Option<&str>) -> ScreenContext {
    let mut draft = state
        .context
        .as_ref()
        .and_then(|c| c.as_vendor_signup())
        .cloned()
        .unwrap_or_default();
    if let Some(t) = signup_type {
        draft.signup_type = Some(t.to_string());
    }
    ScreenContext::VendorSignup(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_menu_reaches_every_portal_entry() {
        let state = SessionState::new();
        let entries = entries(&state);
        assert_eq!(entries.len(), 10);
        assert_eq!(
            entries[0].message,
            Message::navigate(Screen::MobileInput)
        );
    }

    #[test]
    fn test_form_screens_have_no_menu() {
        let mut state = SessionState::new();
        for screen in [Screen::MobileInput, Screen::Otp, Screen::VendorLogin] {
            state.set_screen(screen);
            assert!(entries(&state).is_empty(), "{screen}");
        }
    }

    #[test]
    fn test_leaf_screens_offer_a_back_edge() {
        let mut state = SessionState::new();
        state.set_screen(Screen::Schedule);
        let entries = entries(&state);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, Message::NavigateBack);
    }

    #[test]
    fn test_signup_funnel_carries_draft_forward() {
        let mut state = SessionState::new();
        state.context = Some(signup_draft("spa", None));
        state.set_screen(Screen::VendorSignupOptions);

        let entries = entries(&state);
        match &entries[0].message {
            Message::Navigate {
                payload: Some(ScreenContext::VendorSignup(draft)),
                ..
            } => {
                assert_eq!(draft.category.as_deref(), Some("spa"));
                assert_eq!(draft.signup_type.as_deref(), Some("quick"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
