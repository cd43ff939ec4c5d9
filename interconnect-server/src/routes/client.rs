//! Routes API HTTP client.

use serde::Deserialize;
use tracing::warn;

use crate::domain::{Iata, Route};

use super::error::RouteError;

/// Default base URL for the Routes API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com/locate/3";

/// Wire DTO for a route. Airport codes stay raw strings here and are
/// validated during conversion to domain routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub airport_from: String,
    pub airport_to: String,
    #[serde(default)]
    pub connecting_airport: Option<String>,
}

/// Configuration for the routes client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteClientConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for RouteClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Routes API.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    /// Create a new routes client.
    pub fn new(config: RouteClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full route graph.
    pub async fn fetch_all(&self) -> Result<Vec<Route>, RouteError> {
        let url = format!("{}/routes", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let dtos: Vec<RouteDto> = serde_json::from_str(&body).map_err(|e| RouteError::Json {
            message: e.to_string(),
        })?;

        Ok(build_routes(dtos))
    }
}

/// Convert route DTOs to domain routes, dropping malformed records.
///
/// Upstream data carries an empty string instead of null in the connecting
/// airport field for some direct routes; both are normalized to `None`.
pub(crate) fn build_routes(dtos: Vec<RouteDto>) -> Vec<Route> {
    dtos.into_iter()
        .filter_map(|dto| {
            let airport_from = match Iata::parse_normalized(&dto.airport_from) {
                Ok(code) => code,
                Err(_) => {
                    warn!(airport = %dto.airport_from, "skipping route with malformed departure airport");
                    return None;
                }
            };
            let airport_to = match Iata::parse_normalized(&dto.airport_to) {
                Ok(code) => code,
                Err(_) => {
                    warn!(airport = %dto.airport_to, "skipping route with malformed arrival airport");
                    return None;
                }
            };

            let connecting_airport = match dto.connecting_airport.as_deref() {
                None | Some("") => None,
                Some(code) => match Iata::parse_normalized(code) {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        warn!(airport = %code, "skipping route with malformed connecting airport");
                        return None;
                    }
                },
            };

            Some(Route {
                airport_from,
                airport_to,
                connecting_airport,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(from: &str, to: &str, connecting: Option<&str>) -> RouteDto {
        RouteDto {
            airport_from: from.to_string(),
            airport_to: to.to_string(),
            connecting_airport: connecting.map(str::to_string),
        }
    }

    #[test]
    fn config_defaults() {
        let config = RouteClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn deserialize_route_dto() {
        let json = r#"[
            {"airportFrom": "DUB", "airportTo": "MAD", "connectingAirport": null},
            {"airportFrom": "DUB", "airportTo": "WRO", "connectingAirport": "STN", "group": "CITY"}
        ]"#;

        let dtos: Vec<RouteDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].connecting_airport, None);
        assert_eq!(dtos[1].connecting_airport.as_deref(), Some("STN"));
    }

    #[test]
    fn missing_connecting_airport_field_defaults_to_none() {
        let json = r#"[{"airportFrom": "DUB", "airportTo": "MAD"}]"#;
        let dtos: Vec<RouteDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos[0].connecting_airport, None);
    }

    #[test]
    fn null_connecting_airport_is_direct() {
        let routes = build_routes(vec![dto("DUB", "MAD", None)]);
        assert_eq!(routes.len(), 1);
        assert!(routes[0].is_direct());
    }

    #[test]
    fn empty_connecting_airport_is_direct() {
        // Observed in real data: "" instead of null for direct routes.
        let routes = build_routes(vec![dto("DUB", "MAD", Some(""))]);
        assert_eq!(routes.len(), 1);
        assert!(routes[0].is_direct());
    }

    #[test]
    fn populated_connecting_airport_is_kept() {
        let routes = build_routes(vec![dto("DUB", "WRO", Some("STN"))]);
        assert_eq!(routes.len(), 1);
        assert!(!routes[0].is_direct());
        assert_eq!(
            routes[0].connecting_airport,
            Some(Iata::parse("STN").unwrap())
        );
    }

    #[test]
    fn malformed_codes_are_dropped() {
        let routes = build_routes(vec![
            dto("DUBLIN", "MAD", None),
            dto("DUB", "M4D", None),
            dto("DUB", "MAD", Some("??")),
            dto("DUB", "BCN", None),
        ]);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].airport_to, Iata::parse("BCN").unwrap());
    }
}
