use egui::{Color32, Response, Ui};
use estates_business::version_info;

/// Displays the current environment and version in the UI.
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();
    let color = match env_name {
        "stable" => Color32::GREEN,
        "dev" => Color32::from_rgb(200, 200, 200),
        _ => Color32::WHITE,
    };
    ui.colored_label(color, display_text)
}
