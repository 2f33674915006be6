use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::add_habit),
        )
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/export", get(handlers::export_snapshot))
        .route("/api/import", post(handlers::import_snapshot))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::save_settings),
        )
        .with_state(state)
}
