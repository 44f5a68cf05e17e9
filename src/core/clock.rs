use chrono::{DateTime, Local};

/// Source of the current time for ids and transaction dates.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Short US-style date recorded on each transaction, e.g. `1/5/2025`.
pub fn display_date(at: DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}
