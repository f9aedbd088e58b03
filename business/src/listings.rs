//! Featured rental listings shown on the landing page.

/// A featured rental property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub image_url: &'static str,
}

static FEATURED: [Listing; 3] = [
    Listing {
        title: "Modern Loft Apartments",
        tagline: "Downtown Campus Living",
        blurb: "Spacious, fully furnished lofts with city views, perfect for students seeking a vibrant urban lifestyle.",
        image_url: "https://images.pexels.com/photos/276724/pexels-photo-276724.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Listing {
        title: "Suburban Student Homes",
        tagline: "Quiet Neighborhood Retreat",
        blurb: "Comfortable homes with private yards, ideal for group living and a peaceful study environment.",
        image_url: "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Listing {
        title: "Luxury Studio Apartments",
        tagline: "Modern & Convenient",
        blurb: "Sleek, fully equipped studio apartments offering privacy and all amenities for independent student living.",
        image_url: "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

/// The three featured properties from the marketing page.
pub fn featured() -> &'static [Listing] {
    &FEATURED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_featured_listings() {
        assert_eq!(featured().len(), 3);
    }

    #[test]
    fn test_listings_are_complete() {
        for listing in featured() {
            assert!(!listing.title.is_empty());
            assert!(!listing.tagline.is_empty());
            assert!(!listing.blurb.is_empty());
            assert!(listing.image_url.starts_with("https://"));
        }
    }
}
