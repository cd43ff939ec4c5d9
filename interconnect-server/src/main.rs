use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use interconnect_server::cache::{CacheConfig, CachedScheduleClient};
use interconnect_server::planner::{Interconnector, SearchConfig};
use interconnect_server::routes::{RouteCatalog, RouteClient, RouteClientConfig};
use interconnect_server::schedules::{ScheduleClient, ScheduleClientConfig};
use interconnect_server::web::{AppState, create_router};

/// How often to refresh the route catalog (24 hours).
const ROUTE_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create the schedules client with caching
    let mut schedule_config = ScheduleClientConfig::new();
    if let Ok(base) = std::env::var("SCHEDULES_API_BASE") {
        schedule_config = schedule_config.with_base_url(base);
    }
    let schedule_client =
        ScheduleClient::new(schedule_config).expect("Failed to create schedules client");
    let cached_schedules = CachedScheduleClient::new(schedule_client, &CacheConfig::default());

    // Create the route client and fetch the catalog (tolerate a dead
    // Routes API at startup; the refresh task will fill it in)
    let mut route_config = RouteClientConfig::new();
    if let Ok(base) = std::env::var("ROUTES_API_BASE") {
        route_config = route_config.with_base_url(base);
    }
    let route_client = RouteClient::new(route_config).expect("Failed to create routes client");

    info!("Fetching route catalog...");
    let catalog = match RouteCatalog::fetch(route_client.clone()).await {
        Ok(catalog) => {
            info!("Loaded {} routes", catalog.len().await);
            catalog
        }
        Err(e) => {
            error!("Failed to fetch route catalog, starting empty: {e}");
            RouteCatalog::empty(route_client)
        }
    };

    // Spawn background task to refresh the route catalog daily
    let catalog_refresh = catalog.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROUTE_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match catalog_refresh.refresh().await {
                Ok(count) => info!("Refreshed route catalog: {count} routes"),
                Err(e) => error!("Failed to refresh route catalog: {e}"),
            }
        }
    });

    // Build app state
    let interconnector = Interconnector::new(cached_schedules, catalog, SearchConfig::default());
    let state = AppState::new(interconnector);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Flight interconnection server listening on http://{addr}");
    info!("  GET /health            - Health check");
    info!("  GET /interconnections  - Search itineraries");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
