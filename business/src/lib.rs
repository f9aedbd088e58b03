//! Business logic for the RR Estates client: configuration with
//! feature/provider flags, the session and authentication flow, the
//! auth-panel state machine, the backend health probe, and the listing
//! catalog.

mod api_health;
mod auth;
mod auth_panel;
mod config;
mod listings;
mod session;
pub mod version_info;

pub use api_health::{ApiAvailability, ApiHealth};
pub use auth::{
    AuthResponse, CredentialsInput, LoginCommand, LoginRequest, SignupCommand, SignupRequest,
    UserPayload,
};
pub use auth_panel::{AuthMode, AuthPanelState};
pub use config::{AppConfig, ConfigError};
pub use listings::{Listing, featured};
pub use session::{SessionCompute, SessionStatus, User};
