use crate::interface_adapters::handlers::{control, game_info, screen, snapshot, status};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status))
        .route("/api/control", post(control))
        .route("/api/snapshot", get(snapshot))
        .route("/api/game-info", get(game_info))
        .route("/screen", get(screen))
        .with_state(state)
}
