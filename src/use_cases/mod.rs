// Use cases layer: the tick state machine and the session that drives it.

pub mod control;
pub mod engine;
pub mod session;
pub mod types;

pub use control::{ControlAction, ControlError};
pub use engine::GameEngine;
pub use session::{GameSession, GameSettings};
pub use types::{EndReason, FrameSnapshot, GameStatus, StatusReport, TickOutcome};
