use chrono::{SecondsFormat, Utc};

/// Source of report timestamps.
pub trait Clock {
    /// Current time as an ISO-8601 UTC string.
    fn now_iso8601(&self) -> String;
}

/// Wall clock, millisecond precision with a `Z` suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    #[must_use]
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now_iso8601(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_utc_millis() {
        let stamp = SystemClock.now_iso8601();
        assert!(stamp.ends_with('Z'), "{stamp}");
        assert_eq!(stamp.len(), "2024-01-01T00:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn fixed_clock_repeats() {
        let clock = FixedClock::new("2024-05-01T12:00:00.000Z");
        assert_eq!(clock.now_iso8601(), "2024-05-01T12:00:00.000Z");
        assert_eq!(clock.now_iso8601(), clock.now_iso8601());
    }
}
