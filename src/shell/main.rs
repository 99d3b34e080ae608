use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::fmt;

use timetraced::modules::tracking::adapters::outbound::projects_in_memory::InMemoryProjectStore;
use timetraced::modules::tracking::adapters::outbound::records_in_memory::InMemoryRecordStore;
use timetraced::shared::core::clock::SystemClock;
use timetraced::shell::config::Config;
use timetraced::shell::http::router;
use timetraced::shell::reconcile::reconcile;
use timetraced::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt().with_env_filter(config.env_filter()).init();

    // In-memory deps for now
    let state = AppState::new(
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(InMemoryProjectStore::new()),
        Arc::new(SystemClock),
    );
    let resumed = reconcile(&state).await?;
    tracing::info!(resumed, "tracking state rebuilt");

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
