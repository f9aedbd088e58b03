use estates_business::SessionCompute;
use estates_states::Clock;

use crate::{pages, state::State, widgets};

pub struct EstatesApp {
    state: State,
}

impl EstatesApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for EstatesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply queued updates for this frame.
        self.state.ctx.updater().set(Clock::now());
        self.state.ctx.sync_computes();

        // A fresh sign-in dismisses the auth panel; the mode is kept.
        let signed_in = self
            .state
            .ctx
            .cached::<SessionCompute>()
            .is_some_and(SessionCompute::is_authenticated);
        if signed_in && self.state.auth_panel.is_open() {
            self.state.auth_panel.on_auth_success();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::api_status(&self.state.ctx, ui);
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                pages::landing_page(&mut self.state, ui);
            });
        });

        // Refresh computes whose inputs changed.
        self.state.ctx.run_all_dirty();
    }
}
