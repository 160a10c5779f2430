use crate::interface_adapters::http::ControlResponse;
use crate::interface_adapters::protocol::{ControlQuery, FrameDto, GameInfoDto, StatusDto};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ControlAction;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusDto> {
    Json(StatusDto::from(state.session.status().await))
}

pub async fn control(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ControlQuery>, QueryRejection>,
) -> (StatusCode, Json<ControlResponse>) {
    // Malformed query strings still get a JSON error body.
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed control request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ControlResponse::error(rejection.body_text())),
            );
        }
    };

    let action = match query.action.parse::<ControlAction>() {
        Ok(action) => action,
        Err(err) => {
            warn!(action = %query.action, "rejected control action");
            return (StatusCode::BAD_REQUEST, Json(ControlResponse::error(err.to_string())));
        }
    };

    let message = state.session.apply(action).await;
    info!(action = %query.action, reply = message, "control applied");
    (StatusCode::OK, Json(ControlResponse::success(message)))
}

pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<FrameDto> {
    Json(FrameDto::from(state.session.snapshot().await))
}

pub async fn screen(State(state): State<Arc<AppState>>) -> Response {
    // Clone the bytes out so the watch borrow is not held across the response.
    let latest = state.screen_rx.borrow().clone();
    match latest {
        Some(png) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                (header::PRAGMA, "no-cache"),
                (header::EXPIRES, "0"),
            ],
            png,
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Screen not available").into_response(),
    }
}

pub async fn game_info() -> Json<GameInfoDto> {
    Json(GameInfoDto::default())
}
