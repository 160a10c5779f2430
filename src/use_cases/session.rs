// The single game session: command surface plus the clock that drives ticks.

use super::control::ControlAction;
use super::engine::GameEngine;
use super::types::{FrameSnapshot, StatusReport, TickOutcome};
use crate::domain::tuning::WormTuning;
use crate::domain::{Board, Direction};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, trace};

/// Shared configuration for spawning a game session.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Board dimensions, fixed for every game in this session.
    pub board: Board,
    /// Gameplay tuning passed to each engine.
    pub tuning: WormTuning,
    /// Delay before the first tick after the clock is (re)activated.
    pub start_delay: Duration,
    /// Seed for the first game; later games draw theirs from the previous one.
    pub seed: u64,
}

/// Clock state published to the clock task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockControl {
    active: bool,
    // Bumped on restart so an active clock reschedules against the new game.
    generation: u64,
}

/// Handle to the running game.
///
/// Every read and write of the engine goes through one mutex, shared with the
/// clock task, so callers never see a half-applied tick.
#[derive(Clone)]
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
    clock_tx: watch::Sender<ClockControl>,
    frames_tx: watch::Sender<FrameSnapshot>,
}

impl GameSession {
    /// Creates the first game and spawns its clock. The clock starts paused.
    pub fn spawn(settings: GameSettings) -> Self {
        let engine = GameEngine::new(settings.board, settings.tuning, settings.seed);
        let (frames_tx, _frames_rx) = watch::channel(engine.snapshot());
        let (clock_tx, clock_rx) = watch::channel(ClockControl {
            active: false,
            generation: 0,
        });
        let engine = Arc::new(Mutex::new(engine));

        tokio::spawn(clock_task(
            engine.clone(),
            clock_rx,
            frames_tx.clone(),
            settings.start_delay,
        ));

        Self {
            engine,
            clock_tx,
            frames_tx,
        }
    }

    /// Applies a control action and returns a human-readable confirmation.
    pub async fn apply(&self, action: ControlAction) -> &'static str {
        match action {
            ControlAction::Start => {
                self.start();
                "Game started"
            }
            ControlAction::Pause => {
                self.pause();
                "Game paused"
            }
            ControlAction::Restart => {
                self.restart().await;
                "Game stopped and reset"
            }
            ControlAction::Turn(direction) => {
                self.change_direction(direction).await;
                match direction {
                    Direction::Up => "Going up",
                    Direction::Down => "Going down",
                    Direction::Left => "Going left",
                    Direction::Right => "Going right",
                }
            }
        }
    }

    pub async fn change_direction(&self, direction: Direction) {
        let mut engine = self.engine.lock().await;
        engine.change_direction(direction);
        debug!(
            requested = direction.as_str(),
            heading = engine.worm().heading().as_str(),
            "direction change"
        );
    }

    /// Activates the clock. Returns false if it was already running.
    pub fn start(&self) -> bool {
        let started = self.clock_tx.send_if_modified(|clock| {
            if clock.active {
                return false;
            }
            clock.active = true;
            true
        });
        if started {
            info!("game started");
        }
        started
    }

    /// Stops scheduling ticks. A tick already in progress still completes.
    pub fn pause(&self) -> bool {
        let paused = self.clock_tx.send_if_modified(|clock| {
            if !clock.active {
                return false;
            }
            clock.active = false;
            true
        });
        if paused {
            info!("game paused");
        }
        paused
    }

    /// Replaces the current game with a fresh one on the same board.
    pub async fn restart(&self) {
        let seed = {
            let mut engine = self.engine.lock().await;
            let seed = engine.next_seed();
            *engine = GameEngine::new(engine.board(), engine.tuning(), seed);
            self.frames_tx.send_replace(engine.snapshot());
            seed
        };

        self.clock_tx.send_modify(|clock| {
            clock.generation = clock.generation.wrapping_add(1);
        });
        info!(seed, active = self.is_active(), "game restarted");
    }

    pub async fn status(&self) -> StatusReport {
        self.engine.lock().await.status()
    }

    pub async fn snapshot(&self) -> FrameSnapshot {
        self.engine.lock().await.snapshot()
    }

    pub fn is_active(&self) -> bool {
        self.clock_tx.borrow().active
    }

    /// Receives the post-tick frame every time the game visibly changes.
    pub fn subscribe_frames(&self) -> watch::Receiver<FrameSnapshot> {
        self.frames_tx.subscribe()
    }
}

async fn clock_task(
    engine: Arc<Mutex<GameEngine>>,
    mut clock_rx: watch::Receiver<ClockControl>,
    frames_tx: watch::Sender<FrameSnapshot>,
    start_delay: Duration,
) {
    loop {
        let active = clock_rx.borrow_and_update().active;
        let mut delay = start_delay;

        loop {
            let due = async move {
                if active {
                    tokio::time::sleep(delay).await;
                } else {
                    std::future::pending::<()>().await;
                }
            };

            tokio::select! {
                changed = clock_rx.changed() => {
                    if changed.is_err() {
                        // Session dropped.
                        return;
                    }
                    break;
                }
                _ = due => {}
            }

            // The tick runs outside the select so pausing never interrupts it.
            let mut guard = engine.lock().await;
            let outcome = guard.tick();
            delay = guard.tick_interval();
            if outcome != TickOutcome::Ignored {
                frames_tx.send_replace(guard.snapshot());
            }
            drop(guard);

            trace!(?outcome, next_ms = delay.as_millis() as u64, "clock tick");
        }
    }
}
