//! Visibility and mode of the authentication panel.
//!
//! The landing page offers one trigger button and, while the panel is open,
//! exactly one of two form variants. This module owns that toggle logic; the
//! forms themselves live in the UI crate and report back through the
//! session cache.

/// Which authentication form variant is selected for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign in with an existing account.
    #[default]
    Login,
    /// Create a new account.
    Signup,
}

impl AuthMode {
    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Label for the panel trigger button.
    pub fn trigger_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
        }
    }
}

/// State of the authentication panel on the landing page.
///
/// `mode` is tracked even while the panel is closed, so reopening shows the
/// variant the user last switched to. It has no observable effect until
/// `visible` is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthPanelState {
    /// Whether the active form is displayed.
    pub visible: bool,
    /// Which form variant is shown while visible.
    pub mode: AuthMode,
}

impl AuthPanelState {
    /// Opens the panel showing the current mode. Idempotent.
    pub fn request_open(&mut self) {
        self.visible = true;
    }

    /// Flips between the login and signup variants. Legal whether the panel
    /// is open or closed; while open, the displayed form switches
    /// immediately.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Called when the active form reports a successful authentication.
    /// Dismisses the panel and keeps the mode.
    pub fn on_auth_success(&mut self) {
        self.visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed_login() {
        let panel = AuthPanelState::default();
        assert!(!panel.is_open());
        assert_eq!(panel.mode, AuthMode::Login);
    }

    #[test]
    fn test_request_open_shows_current_mode() {
        let mut panel = AuthPanelState::default();
        panel.request_open();
        assert!(panel.is_open());
        assert_eq!(panel.mode, AuthMode::Login);
    }

    #[test]
    fn test_request_open_is_idempotent() {
        let mut panel = AuthPanelState::default();
        panel.request_open();
        let once = panel;
        panel.request_open();
        assert_eq!(panel, once);
    }

    #[test]
    fn test_toggle_mode_while_open() {
        let mut panel = AuthPanelState::default();
        panel.request_open();
        panel.toggle_mode();
        assert!(panel.visible);
        assert_eq!(panel.mode, AuthMode::Signup);
    }

    #[test]
    fn test_toggle_mode_is_an_involution() {
        for visible in [false, true] {
            let mut panel = AuthPanelState {
                visible,
                mode: AuthMode::Login,
            };
            let before = panel;
            panel.toggle_mode();
            panel.toggle_mode();
            assert_eq!(panel, before);
        }
    }

    #[test]
    fn test_mode_tracked_while_closed() {
        let mut panel = AuthPanelState::default();
        panel.toggle_mode();
        assert!(!panel.visible, "toggling must not open the panel");
        panel.request_open();
        assert_eq!(panel.mode, AuthMode::Signup);
    }

    #[test]
    fn test_success_dismisses_and_keeps_mode() {
        let mut panel = AuthPanelState::default();
        panel.request_open();
        panel.toggle_mode();
        panel.on_auth_success();
        assert!(!panel.visible);
        assert_eq!(panel.mode, AuthMode::Signup);

        // Reopening shows the retained mode.
        panel.request_open();
        assert!(panel.visible);
        assert_eq!(panel.mode, AuthMode::Signup);
    }

    #[test]
    fn test_trigger_label_follows_mode() {
        assert_eq!(AuthMode::Login.trigger_label(), "Sign In");
        assert_eq!(AuthMode::Signup.trigger_label(), "Create Account");
    }
}
