/// Gameplay tuning for the worm.
///
/// Keep this separate from runtime/server configuration (ports, start delay, etc.).
#[derive(Debug, Clone, Copy)]
pub struct WormTuning {
    /// Milliseconds shared across one tick per segment (interval = budget / length).
    pub tick_budget_ms: u64,

    /// Shrink and reverse effects only apply above this length. Also the tail-trim
    /// threshold for movement and the offset subtracted from length for the score.
    pub effect_floor: usize,
}

impl Default for WormTuning {
    fn default() -> Self {
        Self {
            tick_budget_ms: 1000,
            effect_floor: 3,
        }
    }
}
