// Use-case level outputs of the game engine.

use crate::domain::{Board, Direction, Fruit, FruitKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    // Engine exists but no tick has run yet.
    Started,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Started => "started",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub score: u64,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    SelfCollision,
    Boundary,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::SelfCollision => "self_collision",
            EndReason::Boundary => "boundary",
        }
    }
}

/// What a single tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    // The game had already ended.
    Ignored,
    Moved,
    Ate(FruitKind),
    Ended(EndReason),
}

/// Immutable copy of everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub board: Board,
    pub heading: Direction,
    // Tail first, head last.
    pub worm: Vec<Position>,
    pub fruit: Option<Fruit>,
    pub continues: bool,
    pub reversed: bool,
}
