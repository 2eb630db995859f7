// Time Provider Port (for testability)

use chrono::{DateTime, Utc};

/// Time provider interface (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// System clock provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
