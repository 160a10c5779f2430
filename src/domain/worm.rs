// Worm body, heading and movement rules.

use super::grid::{Direction, Position};
use std::collections::VecDeque;

/// The player-controlled worm.
///
/// Segments are stored tail-first: the front of the deque is the tail, the back
/// is the head. The body always holds at least one segment.
#[derive(Debug, Clone)]
pub struct Worm {
    body: VecDeque<Position>,
    heading: Direction,
    pending_growth: bool,
    // Movement keeps the body at its current length once it is longer than this.
    trim_floor: usize,
}

impl Worm {
    pub fn new(start: Position, heading: Direction, trim_floor: usize) -> Self {
        Self {
            body: VecDeque::from([start]),
            heading,
            pending_growth: false,
            trim_floor,
        }
    }

    pub fn head(&self) -> Position {
        // The body is never empty.
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Adopts `direction` unless it would turn the worm straight back on itself.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.heading.opposite() {
            return;
        }
        self.heading = direction;
    }

    /// Advances the head one cell along the current heading.
    pub fn advance(&mut self) {
        let next = self.head().step(self.heading);
        self.body.push_back(next);

        if self.pending_growth {
            self.pending_growth = false;
        } else if self.body.len() > self.trim_floor {
            self.body.pop_front();
        }
    }

    /// Flips the heading and immediately takes one step the other way.
    pub fn go_backwards(&mut self) {
        self.heading = self.heading.opposite();
        self.advance();
    }

    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub fn shrink(&mut self) {
        self.pending_growth = false;
        if self.body.len() > 1 {
            self.body.pop_front();
        }
    }

    pub fn runs_into(&self, p: Position) -> bool {
        self.body.contains(&p)
    }

    pub fn runs_into_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().rev().skip(1).any(|segment| *segment == head)
    }
}
