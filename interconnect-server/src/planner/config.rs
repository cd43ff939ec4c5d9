//! Search configuration for the itinerary engine.

use chrono::Duration;

/// Default minimum connection time in minutes (2 hours).
const DEFAULT_MIN_CONNECTION_MINS: i64 = 120;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time required between arrival of one leg and departure of
    /// the next (minutes). The comparison is strict: a gap equal to this
    /// value is rejected.
    pub min_connection_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_connection_mins: i64) -> Self {
        Self {
            min_connection_mins,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: DEFAULT_MIN_CONNECTION_MINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.min_connection_mins, 120);
        assert_eq!(config.min_connection(), Duration::hours(2));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(90);
        assert_eq!(config.min_connection(), Duration::minutes(90));
    }
}
