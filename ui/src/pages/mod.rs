//! Pages for the application. One page today: the landing page.

mod landing_page;

pub use landing_page::landing_page;
