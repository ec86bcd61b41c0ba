//! Render the screen named by the session state (View in TEA pattern)
//!
//! Pure with respect to the session: the view reads the binding the
//! dispatcher supplies and the shell's local buffers, and draws. All
//! visual structure is deliberately plain; this shell exists to drive
//! the machine, not to style it.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use sevana_app::appearance::chrome_for;
use sevana_app::dispatcher::{dispatch, ScreenBinding};
use sevana_app::state::SessionState;

use crate::input::{form_spec, Shell};
use crate::menu;
use crate::theme;

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &SessionState, shell: &Shell) {
    let area = frame.area();
    let chrome = chrome_for(state.screen);

    let header_height = if chrome.show_header { 1 } else { 0 };
    let footer_height = if chrome.show_footer { 1 } else { 0 };
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    if chrome.show_header {
        render_header(frame, header_area, state);
    }
    render_body(frame, body_area, state, shell);
    if chrome.show_footer {
        render_footer(frame, footer_area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &SessionState) {
    let name = state.profile.name.as_deref().unwrap_or("Guest");
    let header = Line::from(vec![
        Span::styled(" SEVANA ", Style::new().fg(theme::ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw(format!("· {name}")),
    ]);
    frame.render_widget(
        Paragraph::new(header).style(Style::new().bg(theme::CHROME_BG)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " Home · Nearby · Bookings · Profile ",
        Style::new().fg(theme::DIM),
    ));
    frame.render_widget(
        Paragraph::new(footer).style(Style::new().bg(theme::CHROME_BG)),
        area,
    );
}

fn render_body(frame: &mut Frame, area: Rect, state: &SessionState, shell: &Shell) {
    let binding = dispatch(state);

    let mut lines: Vec<Line> = info_lines(&binding)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(Line::default());

    if let Some(spec) = form_spec(state.screen) {
        lines.extend(form_lines(spec.labels, &shell.fields, shell.focus));
    } else {
        lines.extend(menu_lines(state, shell.menu_index));
    }

    if let Some(status) = status_line(state, shell) {
        lines.push(Line::default());
        lines.push(status);
    }

    let block = Block::bordered().title(format!(" {} ", state.screen.title()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn menu_lines(state: &SessionState, selected: usize) -> Vec<Line<'static>> {
    menu::entries(state)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("▸ {}", entry.label),
                    Style::new().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", entry.label))
            }
        })
        .collect()
}

fn form_lines(labels: &[&'static str], fields: &[String], focus: usize) -> Vec<Line<'static>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = fields.get(i).cloned().unwrap_or_default();
            let text = format!("{label}: {value}");
            if i == focus {
                Line::from(vec![
                    Span::styled(text, Style::new().add_modifier(Modifier::BOLD)),
                    Span::styled("█", Style::new().fg(theme::ACCENT)),
                ])
            } else {
                Line::from(text)
            }
        })
        .collect()
}

fn status_line(state: &SessionState, shell: &Shell) -> Option<Line<'static>> {
    if state.is_pending() {
        return Some(Line::from(Span::styled(
            "Please wait…",
            Style::new().fg(theme::DIM),
        )));
    }
    if let Some(validation) = &shell.validation {
        return Some(Line::from(Span::styled(
            validation.clone(),
            Style::new().fg(theme::WARNING),
        )));
    }
    state.last_error.as_ref().map(|error| {
        Line::from(Span::styled(error.clone(), Style::new().fg(theme::ERROR)))
    })
}

/// Context lines for the active screen, limited to the slice its
/// binding carries.
fn info_lines(binding: &ScreenBinding<'_>) -> Vec<String> {
    match binding {
        ScreenBinding::Welcome => vec![
            "Wellness at your doorstep.".to_string(),
            "Pick how you want to sign in.".to_string(),
        ],
        ScreenBinding::RoleSelection { .. } => {
            vec!["Choose your department role.".to_string()]
        }
        ScreenBinding::DocPortal => vec!["Platform documentation.".to_string()],

        ScreenBinding::CredentialLogin { audience, .. } => {
            vec![format!("{} portal sign-in.", audience.label())]
        }
        ScreenBinding::StaffLogin { portal } => {
            vec![format!("{} portal sign-in (demo).", portal.label())]
        }

        ScreenBinding::MobileEntry { .. } => {
            vec!["We'll text you a one-time password.".to_string()]
        }
        ScreenBinding::OtpEntry { mobile, .. } => vec![
            format!("Code sent to {}.", mobile.unwrap_or("your number")),
            "Press r to resend.".to_string(),
        ],
        ScreenBinding::ProfileForm { .. } => vec!["Tell us about yourself.".to_string()],
        ScreenBinding::Completion { profile } => vec![format!(
            "Welcome aboard, {}!",
            profile.name.as_deref().unwrap_or("friend")
        )],

        ScreenBinding::Home { profile } => vec![format!(
            "Hi {}, what would you like today?",
            profile.name.as_deref().unwrap_or("there")
        )],
        ScreenBinding::MapView { focus_provider } => match focus_provider {
            Some(id) => vec![format!("Centered on provider {id}.")],
            None => vec!["Spas and salons near you.".to_string()],
        },
        ScreenBinding::SalonDetail { salon } => vec![
            salon.name.clone(),
            salon.address.clone(),
            format!(
                "{:.1} ★ · {:.1} km · {}",
                salon.rating,
                salon.distance_km,
                if salon.is_open { "open now" } else { "closed" }
            ),
        ],
        ScreenBinding::CategoryServices { category } => match category {
            Some(c) => vec![format!("Showing services for {}.", c.name)],
            None => vec!["Browse all service categories.".to_string()],
        },
        ScreenBinding::OfferDetail { offer } => match offer {
            Some(o) => vec![
                format!("{}% OFF — {}", o.discount_percent, o.title),
                o.description.clone(),
                format!("Valid until {}.", o.valid_until),
            ],
            None => vec!["Browse current offers.".to_string()],
        },
        ScreenBinding::CartReview { draft } => match draft {
            Some(draft) => {
                let mut lines: Vec<String> = draft
                    .items
                    .iter()
                    .map(|i| format!("{} — ₹{} ({} min)", i.name, i.price, i.duration_min))
                    .collect();
                lines.push(format!("Total: ₹{}", draft.total()));
                lines
            }
            None => vec!["Your cart is empty.".to_string()],
        },
        ScreenBinding::Payment { request } => match request {
            Some(r) => vec![format!("Amount due: ₹{}", r.amount)],
            None => vec!["Nothing to pay.".to_string()],
        },
        ScreenBinding::OrderTracking { order } => match order {
            Some(o) => vec![format!("Order {} — arriving in {} min.", o.id, o.eta_min)],
            None => vec!["No active order.".to_string()],
        },
        ScreenBinding::BookingHistory => vec!["Your upcoming and past bookings.".to_string()],
        ScreenBinding::Reschedule { booking } => vec![format!(
            "{} at {}, {} {}",
            booking.service, booking.salon_name, booking.date, booking.time
        )],
        ScreenBinding::Review { booking } => vec![format!(
            "How was your {} at {}?",
            booking.service, booking.salon_name
        )],
        ScreenBinding::Chat { peer } => match peer {
            Some(p) => vec![format!(
                "{} · {}",
                p.name,
                if p.is_online { "online" } else { "offline" }
            )],
            None => vec!["Your therapist will join shortly.".to_string()],
        },
        ScreenBinding::CustomerProfile { profile } => vec![
            profile.name.clone().unwrap_or_else(|| "Guest".to_string()),
            profile.mobile.clone().unwrap_or_default(),
        ],
        ScreenBinding::Referral { profile } => vec![format!(
            "Share your code, {}.",
            profile.name.as_deref().unwrap_or("friend")
        )],
        ScreenBinding::Notifications => vec!["Recent updates.".to_string()],
        ScreenBinding::TherapistTracking { assignment } => vec![
            format!("Assignment {}", assignment.id),
            format!("{} · {}", assignment.customer_name, assignment.address),
            format!("Status: {:?}", assignment.status),
        ],

        ScreenBinding::EmployeeDashboard { profile } => vec![format!(
            "Employee portal · {}",
            profile.name.as_deref().unwrap_or("")
        )],
        ScreenBinding::SpaOnboarding => vec!["Onboard a new spa partner.".to_string()],
        ScreenBinding::DepartmentDashboard { role, .. } => {
            vec![format!("Department: {role}")]
        }

        ScreenBinding::VendorDashboard { profile, applicant } => {
            if *applicant {
                vec!["Your application is under review.".to_string()]
            } else {
                vec![format!(
                    "Vendor portal · {}",
                    profile.name.as_deref().unwrap_or("")
                )]
            }
        }
        ScreenBinding::StaffRoster { portal } => {
            vec![format!("{}s on your roster.", portal.label())]
        }
        ScreenBinding::TherapistForm { existing } => match existing {
            Some(t) => vec![format!("Editing {} ({} yrs).", t.name, t.experience_years)],
            None => vec!["New therapist details.".to_string()],
        },
        ScreenBinding::AssignTask { therapist, .. } => match therapist {
            Some(t) => vec![format!("Assigning {}.", t.name)],
            None => vec!["Pick a therapist to assign.".to_string()],
        },
        ScreenBinding::VendorSection { section } => vec![format!("{section:?}")],

        ScreenBinding::StaffDashboard { portal, profile } => vec![format!(
            "{} portal · {}",
            portal.label(),
            profile.name.as_deref().unwrap_or("Priya Sharma")
        )],
        ScreenBinding::StaffSection { portal, section } => {
            vec![format!("{} · {:?}", portal.label(), section)]
        }

        ScreenBinding::AdminDashboard { profile } => vec![format!(
            "Admin portal · {}",
            profile.name.as_deref().unwrap_or("")
        )],
        ScreenBinding::AdminSection { section } => vec![format!("{section:?}")],
        ScreenBinding::VendorApproval => vec!["Applications awaiting review.".to_string()],

        ScreenBinding::VendorSignup { stage, draft } => {
            let mut lines = vec![format!("Signup stage: {stage:?}")];
            if let Some(draft) = draft {
                if let Some(category) = &draft.category {
                    lines.push(format!("Category: {category}"));
                }
                if let Some(t) = &draft.signup_type {
                    lines.push(format!("Track: {t}"));
                }
            }
            lines
        }
        ScreenBinding::VendorApplicationStatus => {
            vec!["Check where your application stands.".to_string()]
        }

        ScreenBinding::Fallback { .. } => vec!["Loading…".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;
    use ratatui::Terminal;
    use sevana_core::screen::Screen;

    fn rendered(state: &SessionState) -> String {
        let backend = TestBackend::new(70, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let shell = Shell::new();
        terminal.draw(|f| view(f, state, &shell)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell(Position::new(x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_welcome_screen_renders_menu() {
        let state = SessionState::new();
        let text = rendered(&state);
        assert!(text.contains("Welcome"));
        assert!(text.contains("Customer sign in"));
        assert!(text.contains("Vendor login"));
    }

    #[test]
    fn test_main_screen_shows_chrome() {
        let mut state = SessionState::new();
        state.set_screen(Screen::Home);
        let text = rendered(&state);
        assert!(text.contains("SEVANA"));
        assert!(text.contains("Bookings"));
    }

    #[test]
    fn test_auth_screen_hides_chrome() {
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);
        let text = rendered(&state);
        assert!(!text.contains("SEVANA"));
        assert!(text.contains("Mobile number:"));
    }

    #[test]
    fn test_payload_contract_violation_renders_fallback() {
        let mut state = SessionState::new();
        state.set_screen(Screen::TherapistTracking);
        let text = rendered(&state);
        assert!(text.contains("Loading…"));
    }

    #[test]
    fn test_error_is_shown_inline() {
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);
        state.last_error = Some("network error: timeout".to_string());
        let text = rendered(&state);
        assert!(text.contains("network error: timeout"));
    }
}
