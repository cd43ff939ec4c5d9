//! Shared route catalog with background refresh.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::Route;
use crate::planner::RouteProvider;

use super::client::RouteClient;
use super::error::RouteError;

/// Thread-safe snapshot of the carrier's route graph.
///
/// Holds the last successfully fetched route set. Queries read the current
/// snapshot; a background task calls `refresh` periodically. A failed
/// refresh keeps the previous snapshot.
#[derive(Clone)]
pub struct RouteCatalog {
    inner: Arc<RwLock<Arc<Vec<Route>>>>,
    client: RouteClient,
}

impl RouteCatalog {
    /// Create a catalog by fetching the route graph from the API.
    ///
    /// This will fail if the API is unreachable.
    pub async fn fetch(client: RouteClient) -> Result<Self, RouteError> {
        let routes = client.fetch_all().await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(routes))),
            client,
        })
    }

    /// Create an empty catalog.
    ///
    /// Useful when startup must not depend on the Routes API being up; the
    /// first successful refresh populates it.
    pub fn empty(client: RouteClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(Vec::new()))),
            client,
        }
    }

    /// The current route snapshot.
    pub async fn snapshot(&self) -> Arc<Vec<Route>> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Number of routes in the current snapshot.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check whether the catalog holds any routes.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Re-fetch the route graph from the API.
    ///
    /// On success, replaces the current snapshot. On failure, the existing
    /// snapshot is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, RouteError> {
        let routes = self.client.fetch_all().await?;
        let count = routes.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(routes);

        Ok(count)
    }
}

impl RouteProvider for RouteCatalog {
    async fn find_all(&self) -> Vec<Route> {
        let snapshot = self.snapshot().await;
        if snapshot.is_empty() {
            warn!("route catalog is empty; itinerary search will find nothing");
        }
        snapshot.as_ref().clone()
    }
}
