#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use estates_ui::state::State;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` for details).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RR Estates",
        native_options,
        Box::new(|cc| {
            // Remote listing photos load through the ehttp image loader.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let state = State::default();
            let app = estates_ui::EstatesApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
