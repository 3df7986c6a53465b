//! Server entrypoint for local development and demos.

use todo_api::{app_with_state, AppState};
use todo_domain::TodoStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Log filtering via RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Port from the PORT environment variable, 3000 by default.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, "server starting");

    // Seeded store so the demo has data to show immediately.
    let router = app_with_state(AppState::new(TodoStore::seeded()));
    axum::serve(listener, router)
        .await
        .expect("server error");
}
