//! The main application state.

use estates_business::{ApiHealth, AppConfig, AuthPanelState, CredentialsInput, SessionCompute};
use estates_states::{Clock, StateCtx};

pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Visibility and mode of the authentication panel.
    pub auth_panel: AuthPanelState,
}

impl Default for State {
    fn default() -> Self {
        let config = AppConfig::from_env().unwrap_or_else(|err| {
            log::warn!("falling back to default configuration: {err}");
            AppConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: AppConfig) -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(Clock::default());
        ctx.add_state(config);
        ctx.add_state(CredentialsInput::default());
        ctx.record_compute(SessionCompute::default());
        ctx.record_compute(ApiHealth::default());

        Self {
            ctx,
            auth_panel: AuthPanelState::default(),
        }
    }

    /// State for harness tests: providers configured, pointed at `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::with_config(AppConfig::test(base_url))
    }
}
