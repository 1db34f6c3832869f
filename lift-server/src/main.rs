use std::net::SocketAddr;

use lift_server::feed::{DisruptionSource, FeedConfig, FeedScheduler};
use lift_server::tfl::{Disruption, MockLiftFeed, TflClient, TflConfig, TflError};
use lift_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Upstream selected at startup: the live TfL API, or a JSON fixture
/// when `TFL_MOCK_DATA` points at one.
enum Upstream {
    Live(TflClient),
    Mock(MockLiftFeed),
}

impl DisruptionSource for Upstream {
    async fn get_disruptions(&self) -> Result<Vec<Disruption>, TflError> {
        match self {
            Upstream::Live(client) => client.get_disruptions().await,
            Upstream::Mock(feed) => feed.get_disruptions().await,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Pick the upstream: a JSON fixture for development, or the live API
    let upstream = match std::env::var("TFL_MOCK_DATA") {
        Ok(path) => {
            println!("Serving mock lift disruption data from {path}");
            Upstream::Mock(MockLiftFeed::new(&path).expect("Failed to load mock lift data"))
        }
        Err(_) => {
            let mut config = TflConfig::new();
            match std::env::var("TFL_APP_KEY") {
                Ok(key) => config = config.with_app_key(key),
                Err(_) => {
                    eprintln!("Warning: TFL_APP_KEY not set. Requests may be rate limited.");
                }
            }
            Upstream::Live(TflClient::new(config).expect("Failed to create TfL client"))
        }
    };

    // Start polling: one fetch now, then every five minutes
    let scheduler = FeedScheduler::new(upstream, &FeedConfig::default());
    scheduler.start().await;

    // Build app state
    let state = AppState::new(scheduler.subscribe());

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("TfL Lift Disruptions Dashboard listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the dashboard.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health           - Health check");
    println!("  GET  /api/disruptions  - Current disruption list");
    println!("  GET  /api/stats        - Derived statistics");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .expect("Server error");

    scheduler.stop().await;
}
