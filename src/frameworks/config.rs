use std::{env, time::Duration};

// Runtime/server settings read from the environment (not gameplay tuning).
// Values that fail to parse, or are not positive, fall back to the default.

fn positive<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default,
{
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}

pub fn http_port() -> u16 {
    positive("WORM_SERVER_PORT", 8080)
}

pub fn board_width() -> i32 {
    positive("WORM_BOARD_WIDTH", 20)
}

pub fn board_height() -> i32 {
    positive("WORM_BOARD_HEIGHT", 20)
}

/// Edge length in pixels of one board cell on the rendered screen.
pub fn cell_size() -> u32 {
    positive("WORM_CELL_SIZE", 20)
}

pub fn start_delay() -> Duration {
    Duration::from_millis(positive("WORM_START_DELAY_MS", 2000))
}

/// Fixed seed for the first game. Unset means a fresh seed per process.
pub fn seed() -> Option<u64> {
    env::var("WORM_SEED")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
}
