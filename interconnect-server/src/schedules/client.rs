//! Schedules API HTTP client.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Flight, Iata};

use super::convert::monthly_flights;
use super::error::ScheduleError;
use super::types::MonthlySchedule;

/// Default base URL for the Schedules API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com/timtbl/3/schedules";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Configuration for the schedules client.
#[derive(Debug, Clone)]
pub struct ScheduleClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ScheduleClientConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }
}

impl Default for ScheduleClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules API client.
///
/// Uses a semaphore to limit concurrent requests: one itinerary query fans
/// out into a lookup per airport pair per month.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl ScheduleClient {
    /// Create a new schedules client with the given configuration.
    pub fn new(config: ScheduleClientConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch all flights for an airport pair in one calendar month.
    ///
    /// A 404 means the pair has no schedule for that month and yields an
    /// empty list; other failures are errors.
    pub async fn monthly_flights(
        &self,
        airport_from: Iata,
        airport_to: Iata,
        year: i32,
        month: u32,
    ) -> Result<Vec<Flight>, ScheduleError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ScheduleError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/{}/{}/years/{}/months/{}",
            self.base_url, airport_from, airport_to, year, month
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScheduleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let schedule: MonthlySchedule =
            serde_json::from_str(&body).map_err(|e| ScheduleError::Json {
                message: e.to_string(),
            })?;

        monthly_flights(&schedule, year, airport_from, airport_to)
    }
}
