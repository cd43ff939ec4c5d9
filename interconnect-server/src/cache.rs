//! Caching layer for Schedules API responses.
//!
//! One itinerary query fans out into several (pair, month) lookups, and
//! overlapping queries repeat them; monthly schedules change rarely, so a
//! short-TTL cache absorbs most of the upstream traffic.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::warn;

use crate::domain::{Flight, Iata};
use crate::planner::ScheduleProvider;
use crate::schedules::{ScheduleClient, ScheduleError};

/// Cache key for monthly schedules: (from, to, year, month).
type MonthKey = (Iata, Iata, i32, u32);

/// Cached monthly flight list.
type MonthEntry = Arc<Vec<Flight>>;

/// Configuration for the schedule cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Schedules client with caching.
///
/// Wraps a `ScheduleClient` and caches monthly flight lists. This is also
/// the production `ScheduleProvider`: upstream failures degrade to an empty
/// month at this boundary, so the itinerary engine never sees an error.
pub struct CachedScheduleClient {
    client: ScheduleClient,
    months: MokaCache<MonthKey, MonthEntry>,
}

impl CachedScheduleClient {
    /// Create a new cached client.
    pub fn new(client: ScheduleClient, config: &CacheConfig) -> Self {
        let months = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, months }
    }

    /// Get one month of flights for a pair, using the cache if possible.
    pub async fn monthly_flights(
        &self,
        airport_from: Iata,
        airport_to: Iata,
        year: i32,
        month: u32,
    ) -> Result<MonthEntry, ScheduleError> {
        let key = (airport_from, airport_to, year, month);

        if let Some(cached) = self.months.get(&key).await {
            return Ok(cached);
        }

        let flights = self
            .client
            .monthly_flights(airport_from, airport_to, year, month)
            .await?;

        let entry = Arc::new(flights);
        self.months.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Number of cached months.
    pub fn cache_entry_count(&self) -> u64 {
        self.months.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.months.invalidate_all();
    }
}

impl ScheduleProvider for CachedScheduleClient {
    async fn find_flights(
        &self,
        airport_from: Iata,
        airport_to: Iata,
        year: i32,
        month: u32,
    ) -> Vec<Flight> {
        match self
            .monthly_flights(airport_from, airport_to, year, month)
            .await
        {
            Ok(flights) => flights.as_ref().clone(),
            Err(e) => {
                // Availability over completeness: a failed month is an
                // empty month, never a failed query.
                warn!(
                    %airport_from,
                    %airport_to,
                    year,
                    month,
                    error = %e,
                    "schedule lookup failed, substituting empty month"
                );
                Vec::new()
            }
        }
    }
}
