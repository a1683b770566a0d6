use chrono::{DateTime, SecondsFormat, Utc};

/// Current-time service for createdAt/updatedAt/savedAt stamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// RFC 3339 with millisecond precision, the same shape as JavaScript's
    /// `toISOString()`, so stored timestamps stay interchange-compatible
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Milliseconds since the Unix epoch (export filename suffix)
    fn millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall-clock time (production)
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed instant for deterministic tests
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
