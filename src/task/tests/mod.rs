//! Unit tests for the task module.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub(crate) const fn starting_at(seconds: i64) -> Self {
        Self {
            next: AtomicI64::new(seconds),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(1_700_000_000)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let seconds = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0)
            .single()
            .unwrap_or_default()
    }
}
