use crate::use_cases::GameSession;
use axum::body::Bytes;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    // The one game every handler talks to.
    pub session: GameSession,
    // Latest rendered PNG frame; `None` until the renderer has produced one.
    pub screen_rx: watch::Receiver<Option<Bytes>>,
}
