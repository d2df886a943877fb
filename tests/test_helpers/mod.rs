//! Shared clock for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second per reading so creation dates are distinct.
#[derive(Debug)]
pub struct SteppingClock {
    next: AtomicI64,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            next: AtomicI64::new(1_700_000_000),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let seconds = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0).single().unwrap_or_default()
    }
}
