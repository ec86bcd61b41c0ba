//! Shell input: key handling, per-screen buffers, local validation
//!
//! The shell owns what never belongs in the session state: text buffers,
//! menu cursors, and input-shape validation. Malformed input is caught
//! here and never becomes an engine event; only well-formed intents and
//! navigations are emitted as messages.

use sevana_app::dispatcher::LoginAudience;
use sevana_app::message::Message;
use sevana_app::state::SessionState;
use sevana_core::identity::{Credentials, ProfileUpdate};
use sevana_core::screen::Screen;

use crate::menu;

/// Normalized key event from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

/// What kind of form a screen presents, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Mobile,
    Otp,
    Login(LoginAudience),
    Profile,
}

/// Field labels and submit semantics for a form screen.
#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub kind: FormKind,
    pub labels: &'static [&'static str],
}

/// The form presented by the current screen, or `None` for menu screens.
pub fn form_spec(screen: Screen) -> Option<FormSpec> {
    match screen {
        Screen::MobileInput => Some(FormSpec {
            kind: FormKind::Mobile,
            labels: &["Mobile number"],
        }),
        Screen::Otp => Some(FormSpec {
            kind: FormKind::Otp,
            labels: &["OTP code"],
        }),
        Screen::EmployeeLogin => Some(FormSpec {
            kind: FormKind::Login(LoginAudience::Employee),
            labels: &["Mobile number", "Password"],
        }),
        Screen::VendorLogin => Some(FormSpec {
            kind: FormKind::Login(LoginAudience::Vendor),
            labels: &["Mobile number", "Password"],
        }),
        Screen::AdminLogin => Some(FormSpec {
            kind: FormKind::Login(LoginAudience::Admin),
            labels: &["Mobile number", "Password"],
        }),
        Screen::ProfileSetup => Some(FormSpec {
            kind: FormKind::Profile,
            labels: &["Full name", "Email"],
        }),
        _ => None,
    }
}

/// Shell-local view state: buffers, cursors, validation. Reset whenever
/// the session moves to a different screen.
#[derive(Debug, Default)]
pub struct Shell {
    screen: Screen,
    pub menu_index: usize,
    pub fields: Vec<String>,
    pub focus: usize,
    pub validation: Option<String>,
}

impl Shell {
    pub fn new() -> Self {
        let mut shell = Self::default();
        shell.reset_for(Screen::Welcome);
        shell
    }

    fn reset_for(&mut self, screen: Screen) {
        self.screen = screen;
        self.menu_index = 0;
        self.focus = 0;
        self.validation = None;
        let field_count = form_spec(screen).map(|s| s.labels.len()).unwrap_or(0);
        self.fields = vec![String::new(); field_count];
    }

    /// Drop stale buffers when the session has moved on.
    pub fn sync(&mut self, state: &SessionState) {
        if self.screen != state.screen {
            self.reset_for(state.screen);
        }
    }

    /// Translate a key press into a message, if it amounts to one.
    pub fn handle_key(&mut self, state: &SessionState, key: InputKey) -> Option<Message> {
        self.sync(state);

        if key == InputKey::CharCtrl('c') {
            return Some(Message::Quit);
        }

        match form_spec(state.screen) {
            Some(spec) => self.handle_form_key(state, spec, key),
            None => self.handle_menu_key(state, key),
        }
    }

    fn handle_form_key(
        &mut self,
        state: &SessionState,
        spec: FormSpec,
        key: InputKey,
    ) -> Option<Message> {
        // Ignore input while an operation is in flight; the engine would
        // refuse the intent anyway.
        if state.is_pending() {
            return None;
        }

        match key {
            InputKey::Esc => Some(Message::NavigateBack),

            InputKey::Tab | InputKey::Down => {
                self.focus = (self.focus + 1) % spec.labels.len();
                None
            }
            InputKey::BackTab | InputKey::Up => {
                self.focus = (self.focus + spec.labels.len() - 1) % spec.labels.len();
                None
            }

            InputKey::Backspace => {
                self.fields[self.focus].pop();
                self.validation = None;
                None
            }

            InputKey::Char('r') if spec.kind == FormKind::Otp => Some(Message::ResendOtp),

            InputKey::Char(c) => {
                self.type_char(spec, c);
                None
            }

            InputKey::Enter => self.submit(spec),

            _ => None,
        }
    }

    fn type_char(&mut self, spec: FormSpec, c: char) {
        let buffer = &mut self.fields[self.focus];
        let accepted = match spec.kind {
            // Numeric-only fields with hard caps
            FormKind::Mobile => c.is_ascii_digit() && buffer.len() < 10,
            FormKind::Otp => c.is_ascii_digit() && buffer.len() < 6,
            FormKind::Login(_) | FormKind::Profile => !c.is_control() && buffer.len() < 64,
        };
        if accepted {
            buffer.push(c);
            self.validation = None;
        }
    }

    /// Validate locally and emit the intent. Shape errors stay in the
    /// shell as `validation`.
    fn submit(&mut self, spec: FormSpec) -> Option<Message> {
        match spec.kind {
            FormKind::Mobile => {
                let mobile = self.fields[0].trim().to_string();
                if mobile.len() != 10 || !mobile.chars().all(|c| c.is_ascii_digit()) {
                    self.validation =
                        Some("Enter a valid 10-digit mobile number.".to_string());
                    return None;
                }
                Some(Message::SendOtp { mobile })
            }

            FormKind::Otp => {
                let code = self.fields[0].trim().to_string();
                if code.is_empty() {
                    self.validation = Some("Enter the OTP you received.".to_string());
                    return None;
                }
                Some(Message::VerifyOtp { code })
            }

            FormKind::Login(audience) => {
                let username = self.fields[0].trim().to_string();
                let password = self.fields[1].clone();
                if username.is_empty() || password.is_empty() {
                    self.validation = Some("Both fields are required.".to_string());
                    return None;
                }
                Some(Message::Login {
                    credentials: Credentials {
                        username,
                        password,
                        role: audience.role(),
                    },
                })
            }

            FormKind::Profile => {
                let name = self.fields[0].trim().to_string();
                let email = self.fields[1].trim().to_string();
                if name.is_empty() {
                    self.validation = Some("Name is required.".to_string());
                    return None;
                }
                Some(Message::CompleteProfile {
                    fields: ProfileUpdate {
                        name: Some(name),
                        email: (!email.is_empty()).then_some(email),
                        ..Default::default()
                    },
                })
            }
        }
    }

    fn handle_menu_key(&mut self, state: &SessionState, key: InputKey) -> Option<Message> {
        let entries = menu::entries(state);
        if entries.is_empty() {
            return match key {
                InputKey::Esc | InputKey::Enter => Some(Message::NavigateBack),
                _ => None,
            };
        }

        match key {
            InputKey::Up => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(entries.len() - 1);
                None
            }
            InputKey::Down => {
                self.menu_index = (self.menu_index + 1) % entries.len();
                None
            }
            InputKey::Enter => entries.into_iter().nth(self.menu_index).map(|e| e.message),
            InputKey::Esc => Some(Message::NavigateBack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(shell: &mut Shell, state: &SessionState, text: &str) {
        for c in text.chars() {
            shell.handle_key(state, InputKey::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut shell = Shell::new();
        let state = SessionState::new();
        assert_eq!(
            shell.handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_malformed_mobile_never_reaches_the_engine() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);

        typed(&mut shell, &state, "98765");
        let result = shell.handle_key(&state, InputKey::Enter);

        assert_eq!(result, None);
        assert!(shell.validation.is_some());
    }

    #[test]
    fn test_valid_mobile_emits_send_otp() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);

        typed(&mut shell, &state, "9876543210");
        let result = shell.handle_key(&state, InputKey::Enter);

        assert_eq!(
            result,
            Some(Message::SendOtp {
                mobile: "9876543210".to_string()
            })
        );
    }

    #[test]
    fn test_mobile_field_rejects_letters_and_overflow() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);

        typed(&mut shell, &state, "98a76b543210999");
        assert_eq!(shell.fields[0], "9876543210");
    }

    #[test]
    fn test_otp_r_requests_resend() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.profile.mobile = Some("9876543210".to_string());
        state.set_screen(Screen::Otp);

        assert_eq!(
            shell.handle_key(&state, InputKey::Char('r')),
            Some(Message::ResendOtp)
        );
    }

    #[test]
    fn test_login_form_collects_credentials_for_audience() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::VendorLogin);

        typed(&mut shell, &state, "9876543210");
        shell.handle_key(&state, InputKey::Tab);
        typed(&mut shell, &state, "vendor123");
        let result = shell.handle_key(&state, InputKey::Enter);

        match result {
            Some(Message::Login { credentials }) => {
                assert_eq!(credentials.username, "9876543210");
                assert_eq!(credentials.password, "vendor123");
                assert_eq!(credentials.role, sevana_core::identity::Role::Vendor);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_form_input_ignored_while_pending() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);
        state.begin_async(sevana_app::message::AsyncKind::SendOtp);

        assert_eq!(shell.handle_key(&state, InputKey::Char('9')), None);
        assert_eq!(shell.handle_key(&state, InputKey::Enter), None);
    }

    #[test]
    fn test_buffers_reset_when_screen_changes() {
        let mut shell = Shell::new();
        let mut state = SessionState::new();
        state.set_screen(Screen::MobileInput);
        typed(&mut shell, &state, "987");

        state.set_screen(Screen::Otp);
        shell.sync(&state);

        assert_eq!(shell.fields, vec![String::new()]);
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut shell = Shell::new();
        let state = SessionState::new(); // Welcome menu
        let count = menu::entries(&state).len();
        assert!(count > 1);

        shell.handle_key(&state, InputKey::Up);
        assert_eq!(shell.menu_index, count - 1);
        shell.handle_key(&state, InputKey::Down);
        assert_eq!(shell.menu_index, 0);
    }

    #[test]
    fn test_menu_enter_emits_selected_entry() {
        let mut shell = Shell::new();
        let state = SessionState::new();

        let result = shell.handle_key(&state, InputKey::Enter);

        // First welcome entry starts the customer sign-in workflow.
        assert_eq!(result, Some(Message::navigate(Screen::MobileInput)));
    }
}
