// Domain layer: grid entities and worm rules.

pub mod grid;
pub mod tuning;
pub mod worm;

pub use grid::{Board, Direction, Fruit, FruitKind, Position};
pub use worm::Worm;
