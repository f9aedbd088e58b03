//! Feature flag status grid, shown only when the debug panels are enabled.

use egui::{Response, RichText, Ui};
use estates_business::AppConfig;
use estates_states::StateCtx;

use super::api_status::status_dot;
use crate::utils::colors::{COLOR_GRAY, COLOR_GREEN};

const FEATURES: [(&str, &str); 4] = [
    ("Authentication", "authentication"),
    ("Database", "database"),
    ("Payments", "payments"),
    ("Real-time", "realtime"),
];

pub fn feature_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Feature Status");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for (label, name) in FEATURES {
                let enabled = state_ctx
                    .state::<AppConfig>()
                    .is_some_and(|config| config.is_feature_enabled(name));
                ui.group(|ui| {
                    ui.set_width(150.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).strong());
                        ui.horizontal(|ui| {
                            let (color, text) = if enabled {
                                (COLOR_GREEN, "Enabled")
                            } else {
                                (COLOR_GRAY, "Disabled")
                            };
                            status_dot(ui, format!("{label}: {text}"), color);
                            ui.label(text);
                        });
                    });
                });
            }
        });
    })
    .response
}

#[cfg(test)]
mod feature_status_tests {
    use egui_kittest::Harness;
    use estates_business::AppConfig;
    use kittest::Queryable;

    use crate::state::State;

    fn harness_with(state: State) -> Harness<'static, State> {
        Harness::new_ui_state(
            |ui, state: &mut State| {
                super::feature_status(&state.ctx, ui);
            },
            state,
        )
    }

    #[test]
    fn test_all_features_listed() {
        // Seeded config, not the process environment: no providers.
        let harness = harness_with(State::with_config(AppConfig::default()));

        for label in ["Authentication", "Database", "Payments", "Real-time"] {
            assert!(
                harness.query_by_label_contains(label).is_some(),
                "{label} card should be visible"
            );
        }
        assert_eq!(
            harness.query_all_by_label_contains("Disabled").count(),
            4,
            "every feature should read disabled without providers"
        );
    }

    #[test]
    fn test_configured_providers_enable_features() {
        let harness = harness_with(State::test("https://estates.example.com".to_string()));

        assert_eq!(
            harness.query_all_by_label_contains("Enabled").count(),
            4,
            "both providers configured should enable every feature"
        );
    }
}
