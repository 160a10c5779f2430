// External control actions accepted by the game session.

use crate::domain::Direction;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Pause,
    Restart,
    Turn(Direction),
}

/// Errors returned when a control request cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    UnknownAction(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::UnknownAction(action) => write!(f, "Unknown action: {action}"),
        }
    }
}

impl std::error::Error for ControlError {}

impl FromStr for ControlAction {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ControlAction::Start),
            "pause" => Ok(ControlAction::Pause),
            "restart" => Ok(ControlAction::Restart),
            "up" => Ok(ControlAction::Turn(Direction::Up)),
            "down" => Ok(ControlAction::Turn(Direction::Down)),
            "left" => Ok(ControlAction::Turn(Direction::Left)),
            "right" => Ok(ControlAction::Turn(Direction::Right)),
            other => Err(ControlError::UnknownAction(other.to_string())),
        }
    }
}
