pub mod api_status;
mod auth_section;
mod config_info;
mod env_version;
mod feature_status;
mod listing_card;
mod provider_status;

pub use api_status::api_status;
pub use auth_section::auth_section;
pub use config_info::config_info;
pub use env_version::env_version;
pub use feature_status::feature_status;
pub use listing_card::listing_card;
pub use provider_status::provider_status;
