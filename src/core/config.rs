use serde::{Deserialize, Serialize};

pub const EPSILON: f64 = 1e-9;

/// How rotated coordinates are snapped back onto the integer grid.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round to the nearest integer, halves away from zero.
    #[default]
    Nearest,
    /// Truncate towards zero, which biases rotated corners towards the origin. Only the final
    /// snap truncates: rotation is still about the exact centre of the normal pose, so rotated
    /// corners can differ by a pixel from code that rotates about a truncated centre.
    Truncate,
}

pub const DEFAULT_ROUNDING: RoundingMode = RoundingMode::Nearest;

pub const LOG_FILE: &str = "run.log";

// Used by the demo host only.
pub const DEMO_TICKS: u64 = 240;
pub const DEMO_TICK_INTERVAL_MS: u64 = 16;
pub const DEMO_DEGREES_PER_TICK: f64 = 3.;
