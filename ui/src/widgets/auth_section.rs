//! Authentication section of the landing page: welcome banner, panel
//! trigger, and the login/signup forms.

use egui::{Frame, Margin, Response, RichText, Ui};
use estates_business::{
    AuthMode, AuthPanelState, CredentialsInput, LoginCommand, SessionStatus, SignupCommand, User,
};
use estates_business::SessionCompute;
use estates_states::StateCtx;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Renders the auth area: a welcome banner when signed in, otherwise the
/// panel trigger and, while the panel is open, the active form variant.
pub fn auth_section(ctx: &mut StateCtx, panel: &mut AuthPanelState, ui: &mut Ui) -> Response {
    let status = ctx
        .cached::<SessionCompute>()
        .map(|session| session.status.clone())
        .unwrap_or_default();

    if let Some(user) = status.user() {
        let user = user.clone();
        return welcome_banner(&user, ui);
    }

    ui.vertical_centered(|ui| {
        let trigger = ui.add(
            egui::Button::new(RichText::new(panel.mode.trigger_label()).size(16.0))
                .min_size(egui::vec2(180.0, 36.0)),
        );
        if trigger.clicked() {
            panel.request_open();
        }

        if panel.is_open() {
            ui.add_space(12.0);
            match panel.mode {
                AuthMode::Login => login_form(ctx, panel, &status, ui),
                AuthMode::Signup => signup_form(ctx, panel, &status, ui),
            }
        }
    })
    .response
}

fn welcome_banner(user: &User, ui: &mut Ui) -> Response {
    Frame::NONE
        .fill(COLOR_GREEN)
        .corner_radius(4)
        .inner_margin(Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Welcome back, {}! 🎉", user.display_name()))
                    .color(egui::Color32::WHITE)
                    .size(16.0),
            );
        })
        .response
}

fn status_feedback(status: &SessionStatus, ui: &mut Ui) -> bool {
    if status.in_flight() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Contacting server...");
        });
        return true;
    }
    if let Some(error) = status.error() {
        ui.colored_label(COLOR_RED, error);
        ui.add_space(8.0);
    }
    false
}

fn login_form(ctx: &mut StateCtx, panel: &mut AuthPanelState, status: &SessionStatus, ui: &mut Ui) {
    if status_feedback(status, ui) {
        return;
    }

    let mut submit = false;
    let input = ctx.state_mut::<CredentialsInput>();

    ui.horizontal(|ui| {
        ui.label("Email:");
        ui.add(
            egui::TextEdit::singleline(&mut input.email)
                .desired_width(220.0)
                .hint_text("you@example.com"),
        );
    });
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Password:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut input.password)
                .password(true)
                .desired_width(220.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
    });

    ui.add_space(12.0);
    if ui.button("Sign In").clicked() {
        submit = true;
    }
    if ui.link("Need an account? Create one").clicked() {
        panel.toggle_mode();
    }

    if submit {
        ctx.dispatch::<LoginCommand>();
    }
}

fn signup_form(ctx: &mut StateCtx, panel: &mut AuthPanelState, status: &SessionStatus, ui: &mut Ui) {
    if status_feedback(status, ui) {
        return;
    }

    let mut submit = false;
    let input = ctx.state_mut::<CredentialsInput>();

    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(egui::TextEdit::singleline(&mut input.display_name).desired_width(220.0));
    });
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Email:");
        ui.add(
            egui::TextEdit::singleline(&mut input.email)
                .desired_width(220.0)
                .hint_text("you@example.com"),
        );
    });
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Password:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut input.password)
                .password(true)
                .desired_width(220.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
    });
    ui.label(RichText::new("At least 8 characters.").weak());

    ui.add_space(12.0);
    if ui.button("Create Account").clicked() {
        submit = true;
    }
    if ui.link("Already have an account? Sign in").clicked() {
        panel.toggle_mode();
    }

    if submit {
        ctx.dispatch::<SignupCommand>();
    }
}

#[cfg(test)]
mod auth_section_tests {
    use egui_kittest::Harness;
    use estates_business::{SessionCompute, User};
    use kittest::Queryable;

    use crate::state::State;

    fn harness_with(state: State) -> Harness<'static, State> {
        Harness::new_ui_state(
            |ui, state: &mut State| {
                let State { ctx, auth_panel } = state;
                super::auth_section(ctx, auth_panel, ui);
            },
            state,
        )
    }

    fn test_state() -> State {
        State::test("https://estates.example.com".to_string())
    }

    #[test]
    fn test_closed_panel_shows_only_trigger() {
        let harness = harness_with(test_state());

        assert!(harness.query_by_label_contains("Sign In").is_some());
        assert!(
            harness.query_by_label_contains("Email").is_none(),
            "form fields stay hidden until the panel opens"
        );
    }

    #[test]
    fn test_open_panel_shows_login_form() {
        let mut state = test_state();
        state.auth_panel.request_open();
        let harness = harness_with(state);

        assert!(harness.query_by_label_contains("Email").is_some());
        assert!(harness.query_by_label_contains("Password").is_some());
        assert!(harness.query_by_label_contains("Need an account?").is_some());
        assert!(
            harness.query_by_label_contains("Name:").is_none(),
            "the login variant has no name field"
        );
    }

    #[test]
    fn test_open_panel_shows_signup_form_after_toggle() {
        let mut state = test_state();
        state.auth_panel.toggle_mode();
        state.auth_panel.request_open();
        let harness = harness_with(state);

        // Trigger and submit button both carry the signup label.
        assert_eq!(
            harness.query_all_by_label_contains("Create Account").count(),
            2
        );
        assert!(harness.query_by_label_contains("Name:").is_some());
        assert!(
            harness
                .query_by_label_contains("Already have an account?")
                .is_some()
        );
    }

    #[test]
    fn test_signed_in_shows_welcome_banner() {
        let mut state = test_state();
        state.ctx.record_compute(SessionCompute::signed_in(User {
            name: Some("Riley".to_string()),
            email: None,
        }));
        let harness = harness_with(state);

        assert!(
            harness
                .query_by_label_contains("Welcome back, Riley!")
                .is_some()
        );
        assert!(
            harness.query_by_label_contains("Sign In").is_none(),
            "the trigger is replaced by the banner once signed in"
        );
    }
}
