//! Application configuration and feature/provider flags.
//!
//! Providers are considered configured when their credentials are present in
//! the environment, and feature flags derive from the provider that backs
//! them. With nothing configured every flag reads as disabled, which keeps
//! the app usable as a plain marketing page.

use std::any::Any;

use estates_states::{State, state_assign_impl};
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
}

/// Raw environment input. Every field is optional; absence disables the
/// provider that needs it.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigEnv {
    #[serde(default)]
    supabase_url: Option<String>,
    #[serde(default)]
    supabase_anon_key: Option<String>,
    #[serde(default)]
    stripe_publishable_key: Option<String>,
    #[serde(default)]
    estates_api_base_url: Option<String>,
    /// Set `ESTATES_DEBUG_PANELS=true` to show the status panels.
    #[serde(default)]
    estates_debug_panels: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub theme: String,
    pub primary_color: String,
    pub api_base_url: String,
    /// Gates the feature/provider/config status panels. Off by default.
    pub show_debug_panels: bool,
    supabase_configured: bool,
    stripe_configured: bool,
}

impl AppConfig {
    /// Read provider credentials and overrides from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env: ConfigEnv = serde_env::from_env()?;
        Ok(Self::from_parts(env))
    }

    /// Configuration for harness tests: both providers configured, pointed
    /// at the given backend.
    pub fn test(api_base_url: String) -> Self {
        Self {
            api_base_url,
            supabase_configured: true,
            stripe_configured: true,
            ..Self::default()
        }
    }

    fn from_parts(env: ConfigEnv) -> Self {
        let configured = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        let supabase_configured = configured(&env.supabase_url) && configured(&env.supabase_anon_key);
        let stripe_configured = configured(&env.stripe_publishable_key);
        Self {
            api_base_url: env.estates_api_base_url.unwrap_or_default(),
            show_debug_panels: env.estates_debug_panels.unwrap_or(false),
            supabase_configured,
            stripe_configured,
            ..Self::default()
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    /// Pure feature lookup; unknown names read as disabled.
    pub fn is_feature_enabled(&self, name: &str) -> bool {
        match name {
            "authentication" | "database" | "realtime" => self.supabase_configured,
            "payments" => self.stripe_configured,
            _ => false,
        }
    }

    /// Pure provider lookup; unknown names read as disabled.
    pub fn is_provider_enabled(&self, name: &str) -> bool {
        match name {
            "supabase" => self.supabase_configured,
            "stripe" => self.stripe_configured,
            // The UI toolkit ships with the binary.
            "egui" => true,
            _ => false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "RR Estates".to_string(),
            theme: "system".to_string(),
            primary_color: "#2563eb".to_string(),
            api_base_url: String::new(),
            show_debug_panels: false,
            supabase_configured: false,
            stripe_configured: false,
        }
    }
}

impl State for AppConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_disables_everything() {
        let config = AppConfig::default();
        for feature in ["authentication", "database", "payments", "realtime"] {
            assert!(
                !config.is_feature_enabled(feature),
                "{feature} should be disabled without providers"
            );
        }
        assert!(!config.is_provider_enabled("supabase"));
        assert!(!config.is_provider_enabled("stripe"));
        assert!(
            config.is_provider_enabled("egui"),
            "the toolkit is always available"
        );
    }

    #[test]
    fn test_unknown_names_read_as_disabled() {
        let config = AppConfig::test(String::new());
        assert!(!config.is_feature_enabled("telepathy"));
        assert!(!config.is_provider_enabled("telepathy"));
    }

    #[test]
    fn test_supabase_backs_auth_database_realtime() {
        let env = ConfigEnv {
            supabase_url: Some("https://example.supabase.co".to_string()),
            supabase_anon_key: Some("anon-key".to_string()),
            ..ConfigEnv::default()
        };
        let config = AppConfig::from_parts(env);
        assert!(config.is_provider_enabled("supabase"));
        assert!(config.is_feature_enabled("authentication"));
        assert!(config.is_feature_enabled("database"));
        assert!(config.is_feature_enabled("realtime"));
        assert!(
            !config.is_feature_enabled("payments"),
            "payments need stripe"
        );
    }

    #[test]
    fn test_supabase_needs_both_url_and_key() {
        let env = ConfigEnv {
            supabase_url: Some("https://example.supabase.co".to_string()),
            ..ConfigEnv::default()
        };
        let config = AppConfig::from_parts(env);
        assert!(!config.is_provider_enabled("supabase"));
        assert!(!config.is_feature_enabled("authentication"));
    }

    #[test]
    fn test_stripe_backs_payments() {
        let env = ConfigEnv {
            stripe_publishable_key: Some("pk_test_123".to_string()),
            ..ConfigEnv::default()
        };
        let config = AppConfig::from_parts(env);
        assert!(config.is_provider_enabled("stripe"));
        assert!(config.is_feature_enabled("payments"));
        assert!(!config.is_feature_enabled("authentication"));
    }

    #[test]
    fn test_api_url_formatting() {
        let config = AppConfig::default();
        assert_eq!(config.api_url(), Ustr::from("/api"));

        let config = AppConfig::test("https://estates.example.com".to_string());
        assert_eq!(
            config.api_url(),
            Ustr::from("https://estates.example.com/api")
        );
    }

    #[test]
    fn test_debug_panels_off_by_default() {
        assert!(!AppConfig::default().show_debug_panels);
        let env = ConfigEnv {
            estates_debug_panels: Some(true),
            ..ConfigEnv::default()
        };
        assert!(AppConfig::from_parts(env).show_debug_panels);
    }
}
