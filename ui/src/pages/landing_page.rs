//! The marketing landing page: hero, featured listings, auth section, and
//! the optional debug status panels.

use egui::{Response, RichText, Ui};
use estates_business::{AppConfig, featured};

use crate::{state::State, widgets};

pub fn landing_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("RR Real Estate Portfolio").size(36.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Discover luxurious student housing and premium rental properties \
                 tailored for the modern college experience.",
            )
            .size(16.0),
        );

        ui.add_space(32.0);
        ui.heading("Featured Student Housing & Rental Properties");
        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            for listing in featured() {
                widgets::listing_card(listing, ui);
            }
        });

        let (auth_enabled, show_debug) = state
            .ctx
            .state::<AppConfig>()
            .map(|config| {
                (
                    config.is_feature_enabled("authentication"),
                    config.show_debug_panels,
                )
            })
            .unwrap_or((false, false));

        if auth_enabled {
            ui.add_space(32.0);
            widgets::auth_section(&mut state.ctx, &mut state.auth_panel, ui);
        }

        if show_debug {
            ui.add_space(32.0);
            widgets::feature_status(&state.ctx, ui);
            ui.add_space(16.0);
            widgets::provider_status(&state.ctx, ui);
            ui.add_space(16.0);
            widgets::config_info(&state.ctx, ui);
        }

        ui.add_space(48.0);
    })
    .response
}
