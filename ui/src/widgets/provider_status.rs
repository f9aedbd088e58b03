//! Provider status cards, shown only when the debug panels are enabled.

use egui::{Response, RichText, Ui};
use estates_business::AppConfig;
use estates_states::StateCtx;

use super::api_status::status_dot;
use crate::utils::colors::{COLOR_GRAY, COLOR_GREEN};

struct ProviderCard {
    label: &'static str,
    name: &'static str,
    configured: &'static str,
    fallback: &'static str,
}

const PROVIDERS: [ProviderCard; 3] = [
    ProviderCard {
        label: "🗄 Supabase",
        name: "supabase",
        configured: "PostgreSQL database with built-in auth, real-time subscriptions, \
                     and auto-generated APIs.",
        fallback: "Supabase not configured. Database features will use local storage fallback.",
    },
    ProviderCard {
        label: "💳 Stripe",
        name: "stripe",
        configured: "Complete payment processing with checkout, subscriptions, \
                     and webhook handling.",
        fallback: "Stripe not configured. Payment features will use mock provider.",
    },
    ProviderCard {
        label: "🎨 egui",
        name: "egui",
        configured: "Immediate-mode toolkit rendering the entire client.",
        fallback: "egui not configured.",
    },
];

pub fn provider_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Provider Status");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for provider in &PROVIDERS {
                let enabled = state_ctx
                    .state::<AppConfig>()
                    .is_some_and(|config| config.is_provider_enabled(provider.name));
                ui.group(|ui| {
                    ui.set_width(230.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            let (color, text) = if enabled {
                                (COLOR_GREEN, "Connected")
                            } else {
                                (COLOR_GRAY, "Not configured")
                            };
                            status_dot(ui, format!("{}: {text}", provider.label), color);
                            ui.label(RichText::new(provider.label).strong());
                        });
                        ui.add_space(4.0);
                        let description = if enabled {
                            provider.configured
                        } else {
                            provider.fallback
                        };
                        ui.label(RichText::new(description).weak());
                    });
                });
            }
        });
    })
    .response
}
