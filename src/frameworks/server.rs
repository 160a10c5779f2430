// Framework bootstrap for the worm server runtime.

use crate::domain::Board;
use crate::domain::tuning::WormTuning;
use crate::frameworks::config;
use crate::interface_adapters::render::spawn_frame_renderer;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameSession, GameSettings};

use rand::Rng;
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app(state)).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

// A configured seed replays the same fruit sequence; otherwise draw a fresh one.
fn game_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| rand::rng().random())
}

fn build_state() -> Arc<AppState> {
    let board = Board::new(config::board_width(), config::board_height());
    let seed = game_seed(config::seed());
    let start_delay = config::start_delay();
    let cell_size = config::cell_size();
    tracing::info!(
        width = board.width,
        height = board.height,
        seed,
        start_delay_ms = start_delay.as_millis() as u64,
        cell_size,
        "game configured"
    );

    // The session owns the clock task; the renderer follows its frames.
    let session = GameSession::spawn(GameSettings {
        board,
        tuning: WormTuning::default(),
        start_delay,
        seed,
    });
    let screen_rx = spawn_frame_renderer(&session, cell_size);

    Arc::new(AppState { session, screen_rx })
}
