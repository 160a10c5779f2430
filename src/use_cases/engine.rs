// Tick state machine for a single worm game.

use super::types::{EndReason, FrameSnapshot, GameStatus, StatusReport, TickOutcome};
use crate::domain::tuning::WormTuning;
use crate::domain::{Board, Direction, Fruit, FruitKind, Position, Worm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

const INITIAL_HEADING: Direction = Direction::Down;

const KINDS_WITH_SHRINK: [FruitKind; 3] = [FruitKind::Growth, FruitKind::Shrink, FruitKind::Reverse];
const KINDS_WITHOUT_SHRINK: [FruitKind; 2] = [FruitKind::Growth, FruitKind::Reverse];

/// Owns the state of one game session and advances it one tick at a time.
///
/// The engine knows nothing about clocks or locking; the caller decides when
/// `tick` runs and serializes access to it.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    tuning: WormTuning,
    worm: Worm,
    // At most one fruit is on the board at any time.
    fruit: Option<Fruit>,
    continues: bool,
    growth_eaten: u64,
    has_spawned_first_fruit: bool,
    reversed: bool,
    tick: u64,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(board: Board, tuning: WormTuning, seed: u64) -> Self {
        Self {
            board,
            tuning,
            worm: Worm::new(board.center(), INITIAL_HEADING, tuning.effect_floor),
            fruit: None,
            continues: true,
            growth_eaten: 0,
            has_spawned_first_fruit: false,
            reversed: false,
            tick: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn tuning(&self) -> WormTuning {
        self.tuning
    }

    pub fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn fruit(&self) -> Option<Fruit> {
        self.fruit
    }

    pub fn continues(&self) -> bool {
        self.continues
    }

    /// Lifetime count of Growth fruits eaten.
    pub fn growth_eaten(&self) -> u64 {
        self.growth_eaten
    }

    /// Net growth above the starting floor.
    pub fn score(&self) -> u64 {
        self.worm.len().saturating_sub(self.tuning.effect_floor) as u64
    }

    pub fn status(&self) -> StatusReport {
        let status = if !self.continues {
            GameStatus::GameOver
        } else if self.tick == 0 {
            GameStatus::Started
        } else {
            GameStatus::Running
        };

        StatusReport {
            score: self.score(),
            status,
        }
    }

    /// Delay until the next tick; shrinks as the worm grows.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tuning.tick_budget_ms / self.worm.len() as u64)
    }

    /// Draws a seed for the game that replaces this one.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    pub fn change_direction(&mut self, direction: Direction) {
        self.worm.set_direction(direction);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            board: self.board,
            heading: self.worm.heading(),
            worm: self.worm.segments().collect(),
            fruit: self.fruit,
            continues: self.continues,
            reversed: self.reversed,
        }
    }

    /// Runs one full tick: move, resolve at most one effect, then make sure a
    /// fruit is on the board.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.continues {
            return TickOutcome::Ignored;
        }

        self.tick += 1;
        self.worm.advance();
        let head = self.worm.head();

        let outcome = match self.fruit {
            Some(fruit) if fruit.position == head => {
                self.consume(fruit.kind);
                TickOutcome::Ate(fruit.kind)
            }
            _ if self.worm.runs_into_itself() => self.terminate(EndReason::SelfCollision),
            _ if self.is_outside(head) => self.terminate(EndReason::Boundary),
            _ => TickOutcome::Moved,
        };

        // `consume` already respawned; a missing fruit there means the board is full.
        if outcome == TickOutcome::Moved && self.fruit.is_none() {
            self.spawn_fruit();
        }

        debug!(
            tick = self.tick,
            length = self.worm.len(),
            x = head.x,
            y = head.y,
            "tick"
        );
        outcome
    }

    fn consume(&mut self, kind: FruitKind) {
        let length = self.worm.len();
        debug!(kind = kind.as_str(), length, "fruit eaten");

        match kind {
            FruitKind::Growth => {
                self.growth_eaten += 1;
                self.has_spawned_first_fruit = true;
                self.worm.grow();
            }
            FruitKind::Shrink => {
                if length > self.tuning.effect_floor {
                    self.worm.shrink();
                }
            }
            FruitKind::Reverse => {
                if length > self.tuning.effect_floor {
                    self.worm.go_backwards();
                    self.reversed = true;
                }
            }
        }

        self.spawn_fruit();
    }

    fn terminate(&mut self, reason: EndReason) -> TickOutcome {
        self.continues = false;
        info!(
            reason = reason.as_str(),
            length = self.worm.len(),
            score = self.score(),
            tick = self.tick,
            "game over"
        );
        TickOutcome::Ended(reason)
    }

    // The first cells past the edge are `width + 1` and `height + 1`, not
    // `width` and `height`: the head may sit one column/row past the last
    // playable cell before the game ends.
    fn is_outside(&self, p: Position) -> bool {
        p.x == self.board.width + 1 || p.x == -1 || p.y == self.board.height + 1 || p.y == -1
    }

    fn spawn_fruit(&mut self) {
        let kind = self.next_fruit_kind();

        if !self.has_free_cell() {
            warn!(kind = kind.as_str(), "no free cell for fruit");
            self.fruit = None;
            return;
        }

        let position = loop {
            let candidate = Position::new(
                self.rng.random_range(0..self.board.width),
                self.rng.random_range(0..self.board.height),
            );
            if !self.is_occupied(candidate) {
                break candidate;
            }
        };

        self.fruit = Some(Fruit { kind, position });
    }

    fn next_fruit_kind(&mut self) -> FruitKind {
        if !self.has_spawned_first_fruit {
            self.has_spawned_first_fruit = true;
            return FruitKind::Growth;
        }

        let candidates: &[FruitKind] = if self.worm.len() > self.tuning.effect_floor {
            &KINDS_WITH_SHRINK
        } else {
            &KINDS_WITHOUT_SHRINK
        };
        candidates[self.rng.random_range(0..candidates.len())]
    }

    fn is_occupied(&self, p: Position) -> bool {
        self.worm.runs_into(p) || self.fruit.is_some_and(|fruit| fruit.position == p)
    }

    fn has_free_cell(&self) -> bool {
        // Worm plus one fruit cannot cover the board while this holds.
        if self.worm.len() + 1 < self.board.cell_count() {
            return true;
        }

        (0..self.board.width)
            .flat_map(|x| (0..self.board.height).map(move |y| Position::new(x, y)))
            .any(|p| !self.is_occupied(p))
    }

    #[cfg(test)]
    pub(crate) fn place_fruit(&mut self, kind: FruitKind, position: Position) {
        self.has_spawned_first_fruit = true;
        self.fruit = Some(Fruit { kind, position });
    }
}
