use std::sync::OnceLock;

use egui::{Color32, Response, Ui};
use estates_business::{ApiAvailability, ApiHealth, version_info};
use estates_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

const STATUS_DOT_RADIUS: f32 = 5.0;

fn ui_version() -> &'static str {
    static UI_VERSION: OnceLock<String> = OnceLock::new();
    UI_VERSION.get_or_init(version_info::format_env_version)
}

fn format_tooltip(service: &str) -> String {
    format!("UI: {}\nService: {service}", ui_version())
}

/// A small drawn circle with a hover tooltip.
pub(crate) fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle(rect.center(), STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);
    response.on_hover_text(tooltip_text)
}

/// Backend reachability indicator for the menu bar.
pub fn api_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (tooltip, color) = match state_ctx.cached::<ApiHealth>().map(ApiHealth::availability) {
        Some(ApiAvailability::Available(checked_at)) => (
            format_tooltip(&format!("healthy (checked {})", checked_at.format("%H:%M UTC"))),
            COLOR_GREEN,
        ),
        Some(ApiAvailability::Unavailable((_, err))) => (format_tooltip(err), COLOR_RED),
        Some(ApiAvailability::Unknown) | None => (format_tooltip("checking..."), COLOR_AMBER),
    };
    status_dot(ui, tooltip, color)
}
