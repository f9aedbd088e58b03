use std::any::Any;

use chrono::{DateTime, Utc};

use crate::{State, state_assign_impl};

/// Wall-clock time, sampled once per frame by the application shell.
///
/// Computes that throttle themselves (health probes) read the clock through
/// their dependencies instead of calling `Utc::now` so tests can drive them
/// deterministically.
#[derive(Debug, Clone)]
pub struct Clock {
    now: DateTime<Utc>,
}

impl Clock {
    pub fn now() -> Self {
        Self { now: Utc::now() }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::now()
    }
}

impl State for Clock {
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
