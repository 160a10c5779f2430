// Wire protocol DTOs and conversions for the public HTTP API.

use crate::domain::{Fruit, Position};
use crate::use_cases::{FrameSnapshot, StatusReport};
use serde::{Deserialize, Serialize};

/// Query string accepted by the control endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlQuery {
    pub action: String,
}

/// Score and lifecycle state for polling clients.
#[derive(Debug, Clone, Serialize)]
pub struct StatusDto {
    pub score: u64,
    pub status: &'static str,
}

impl From<StatusReport> for StatusDto {
    fn from(report: StatusReport) -> Self {
        Self {
            score: report.score,
            status: report.status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionDto {
    pub x: i32,
    pub y: i32,
}

impl From<&Position> for PositionDto {
    fn from(p: &Position) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FruitDto {
    pub kind: &'static str,
    pub x: i32,
    pub y: i32,
}

impl From<Fruit> for FruitDto {
    fn from(fruit: Fruit) -> Self {
        Self {
            kind: fruit.kind.as_str(),
            x: fruit.position.x,
            y: fruit.position.y,
        }
    }
}

/// Everything a client needs to draw the current frame itself.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub width: i32,
    pub height: i32,
    pub heading: &'static str,
    // Tail first, head last.
    pub worm: Vec<PositionDto>,
    pub fruit: Option<FruitDto>,
    pub continues: bool,
    pub reversed: bool,
}

impl From<FrameSnapshot> for FrameDto {
    fn from(frame: FrameSnapshot) -> Self {
        Self {
            tick: frame.tick,
            width: frame.board.width,
            height: frame.board.height,
            heading: frame.heading.as_str(),
            worm: frame.worm.iter().map(PositionDto::from).collect(),
            fruit: frame.fruit.map(FruitDto::from),
            continues: frame.continues,
            reversed: frame.reversed,
        }
    }
}

/// Describes how to watch the game.
#[derive(Debug, Clone, Serialize)]
pub struct GameInfoDto {
    pub status: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub screen_endpoint: &'static str,
    pub message: &'static str,
}

impl Default for GameInfoDto {
    fn default() -> Self {
        Self {
            status: "running",
            kind: "screen_stream",
            screen_endpoint: "/screen",
            message: "Game streaming via screen capture",
        }
    }
}
