pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

use std::sync::Arc;

pub use crate::config::ServerConfig;
pub use crate::routes::create_router;
pub use crate::state::ApiState;

use worklog_core::TimeTracker;

/// Bind the configured address and serve the API until the process exits.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = ApiState {
        tracker: Arc::new(TimeTracker::new()),
    };

    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Worklog API server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
