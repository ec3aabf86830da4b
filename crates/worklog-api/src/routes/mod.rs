use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // User directory
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/:id",
            put(handlers::user::update_user).delete(handlers::user::delete_user),
        )

        // Worklogs
        .route("/users/:id/worklogs", get(handlers::worklog::get_user_worklogs))

        // Timers
        .route("/users/:id/tasks/:task_id/start", post(handlers::timer::start_task))
        .route("/users/:id/tasks/:task_id/stop", post(handlers::timer::stop_task))

        // Statistics
        .route("/stats", get(handlers::stats::get_statistics))

        // Add state
        .with_state(state)

        // Add CORS and request tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
