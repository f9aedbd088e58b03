//! Backend reachability probe.
//!
//! Re-checks `{api}/health` at most every few minutes; the clock comes in as
//! a dependency so the throttle is testable.

use std::any::{Any, TypeId};

use chrono::{DateTime, Utc};
use estates_states::{Clock, Compute, ComputeDeps, Dep, State, Updater, assign_impl};
use log::{error, info};

use crate::AppConfig;

/// Minutes between health probes.
const PROBE_INTERVAL_MINUTES: i64 = 5;

#[derive(Debug, Clone, Default)]
pub struct ApiHealth {
    last_checked: Option<DateTime<Utc>>,
    // present means the last probe failed
    last_error: Option<String>,
    checking: bool,
}

pub enum ApiAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

impl ApiHealth {
    pub fn availability(&self) -> ApiAvailability<'_> {
        match (self.last_checked, &self.last_error) {
            (Some(time), None) => ApiAvailability::Available(time),
            (Some(time), Some(err)) => ApiAvailability::Unavailable((time, err.as_str())),
            (None, _) => ApiAvailability::Unknown,
        }
    }
}

impl Compute for ApiHealth {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<Clock>(), TypeId::of::<AppConfig>()],
            Vec::new(),
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        if self.checking {
            return;
        }

        let now = deps.get_state_ref::<Clock>().utc();
        let due = match self.last_checked {
            Some(last) => {
                now.signed_duration_since(last).num_minutes() >= PROBE_INTERVAL_MINUTES
            }
            None => true,
        };
        if !due {
            return;
        }

        let url = format!("{}/health", deps.get_state_ref::<AppConfig>().api_url());
        info!("probing backend health at {url}");

        // Mark the probe in flight so per-frame reruns don't stack requests.
        updater.set(Self {
            checking: true,
            ..self.clone()
        });

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let health = match result {
                Ok(response) if response.status == 200 => {
                    info!("backend healthy, checked at {now:?}");
                    Self {
                        last_checked: Some(now),
                        last_error: None,
                        checking: false,
                    }
                }
                Ok(response) => Self {
                    last_checked: Some(now),
                    last_error: Some(format!("status {}", response.status)),
                    checking: false,
                },
                Err(err) => {
                    error!("health probe failed: {err}");
                    Self {
                        last_checked: Some(now),
                        last_error: Some(err),
                        checking: false,
                    }
                }
            };
            updater.set(health);
        });
    }
}

impl State for ApiHealth {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_unknown_until_first_probe() {
        let health = ApiHealth::default();
        assert!(matches!(health.availability(), ApiAvailability::Unknown));
    }

    #[test]
    fn test_availability_after_success() {
        let health = ApiHealth {
            last_checked: Some(Utc::now()),
            last_error: None,
            checking: false,
        };
        assert!(matches!(
            health.availability(),
            ApiAvailability::Available(_)
        ));
    }

    #[test]
    fn test_availability_after_failure() {
        let health = ApiHealth {
            last_checked: Some(Utc::now()),
            last_error: Some("status 503".to_string()),
            checking: false,
        };
        match health.availability() {
            ApiAvailability::Unavailable((_, err)) => assert_eq!(err, "status 503"),
            _ => panic!("expected unavailable"),
        }
    }
}
