use egui::{Response, RichText, Ui};
use estates_business::Listing;

const CARD_WIDTH: f32 = 280.0;
const PHOTO_HEIGHT: f32 = 160.0;

/// One featured property card: photo, title, tagline, blurb, details button.
pub fn listing_card(listing: &Listing, ui: &mut Ui) -> Response {
    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.add(
                egui::Image::new(listing.image_url)
                    .fit_to_exact_size(egui::vec2(CARD_WIDTH, PHOTO_HEIGHT)),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(listing.title).size(18.0).strong());
            ui.label(RichText::new(listing.tagline).weak());
            ui.add_space(6.0);
            ui.label(listing.blurb);
            ui.add_space(8.0);
            if ui.button("View Details").clicked() {
                // Detail pages are not built yet.
                log::info!("details requested for '{}'", listing.title);
            }
        });
    })
    .response
}

#[cfg(test)]
mod listing_card_tests {
    use egui_kittest::Harness;
    use estates_business::featured;
    use kittest::Queryable;

    #[test]
    fn test_card_shows_listing_copy() {
        let listing = &featured()[0];
        let harness = Harness::new_ui(|ui| {
            super::listing_card(listing, ui);
        });

        assert!(harness.query_by_label_contains(listing.title).is_some());
        assert!(harness.query_by_label_contains(listing.tagline).is_some());
        assert!(harness.query_by_label_contains("View Details").is_some());
    }
}
