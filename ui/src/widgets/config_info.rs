//! Active configuration readout, shown only when the debug panels are enabled.

use egui::{Response, RichText, Ui};
use estates_business::{AppConfig, version_info};
use estates_states::StateCtx;

pub fn config_info(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Configuration");
        ui.add_space(8.0);
        if let Some(config) = state_ctx.state::<AppConfig>() {
            egui::Grid::new("config_info")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("App Name").strong());
                    ui.label(config.app_name.as_str());
                    ui.end_row();

                    ui.label(RichText::new("Theme").strong());
                    ui.label(config.theme.as_str());
                    ui.end_row();

                    ui.label(RichText::new("Primary Color").strong());
                    ui.label(config.primary_color.as_str());
                    ui.end_row();

                    ui.label(RichText::new("Environment").strong());
                    ui.label(version_info::env_version_info().0);
                    ui.end_row();
                });
        }
    })
    .response
}

#[cfg(test)]
mod config_info_tests {
    use egui_kittest::Harness;
    use estates_business::AppConfig;
    use kittest::Queryable;

    use crate::state::State;

    #[test]
    fn test_config_values_rendered() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                super::config_info(&state.ctx, ui);
            },
            State::with_config(AppConfig::default()),
        );

        assert!(harness.query_by_label_contains("RR Estates").is_some());
        assert!(harness.query_by_label_contains("system").is_some());
        assert!(harness.query_by_label_contains("#2563eb").is_some());
    }
}
