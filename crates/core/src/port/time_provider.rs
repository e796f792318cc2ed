// Time Provider Port (for testability)

use chrono::NaiveDateTime;

/// Time provider interface (allows fixed clocks in tests)
pub trait TimeProvider: Send + Sync {
    /// Current local wall-clock time
    fn now_local(&self) -> NaiveDateTime;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_local(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Fixed time provider (tests, reproducible demos)
pub struct FixedTimeProvider(pub NaiveDateTime);

impl FixedTimeProvider {
    /// Fixed clock at `hour:minute` on an arbitrary date
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .map(Self)
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_local(&self) -> NaiveDateTime {
        self.0
    }
}
