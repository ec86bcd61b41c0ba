//! Appearance policy: persistent chrome flags derived from the screen
//!
//! Pure function, recomputed on every render. The allow-list names the
//! main customer screens that show the fixed header and footer bars.

use sevana_core::screen::Screen;

/// Persistent chrome visibility for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub show_header: bool,
    pub show_footer: bool,
}

/// Screens that carry the persistent header/footer.
const MAIN_SCREENS: [Screen; 7] = [
    Screen::Home,
    Screen::MapView,
    Screen::Bookings,
    Screen::Booking,
    Screen::Payment,
    Screen::OrderTracking,
    Screen::Profile,
];

pub fn chrome_for(screen: Screen) -> Chrome {
    let main = MAIN_SCREENS.contains(&screen);
    Chrome {
        show_header: main,
        show_footer: main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_screens_show_chrome() {
        for screen in MAIN_SCREENS {
            let chrome = chrome_for(screen);
            assert!(chrome.show_header, "{screen} should show header");
            assert!(chrome.show_footer, "{screen} should show footer");
        }
    }

    #[test]
    fn test_auth_and_portal_screens_hide_chrome() {
        for screen in [
            Screen::Welcome,
            Screen::MobileInput,
            Screen::Otp,
            Screen::ProfileSetup,
            Screen::Complete,
            Screen::VendorDashboard,
            Screen::TherapistDashboard,
            Screen::AdminDashboard,
            Screen::Chat,
            Screen::SalonDetail,
        ] {
            let chrome = chrome_for(screen);
            assert!(!chrome.show_header, "{screen} should hide header");
            assert!(!chrome.show_footer, "{screen} should hide footer");
        }
    }
}
