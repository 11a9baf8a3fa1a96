use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod collision;
pub mod linalg;
pub mod log;

pub mod gg_float {
    use crate::core::config::RoundingMode;

    /// Converts to `i32` according to `rounding`. Out-of-range values saturate, and `NaN` becomes
    /// zero, as with an `as` cast.
    #[allow(clippy::cast_possible_truncation)]
    pub fn f64_to_i32(x: f64, rounding: RoundingMode) -> i32 {
        match rounding {
            RoundingMode::Nearest => x.round() as i32,
            RoundingMode::Truncate => x.trunc() as i32,
        }
    }

    /// Clamps onto the `i32` range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn saturate_i32(x: i64) -> i32 {
        x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Wraps an angle in degrees into `[0, 360)`.
    pub fn normalise_degrees(degrees: f64) -> f64 {
        let rv = degrees.rem_euclid(360.);
        // rem_euclid() can return exactly 360 for tiny negative inputs.
        if rv >= 360. { 0. } else { rv }
    }
}

pub mod gg_range {
    use std::ops::RangeInclusive;

    /// Closed intervals overlap unless one lies strictly below the other, so touching endpoints
    /// count as overlapping.
    pub fn overlaps_inclusive(r1: &RangeInclusive<i64>, r2: &RangeInclusive<i64>) -> bool {
        if r1.start() < r2.start() {
            r1.end() >= r2.start()
        } else if r2.start() < r1.start() {
            r2.end() >= r1.start()
        } else {
            true
        }
    }
}

/// Installs a `tracing` subscriber writing to [`LOG_FILE`]. Intended for host binaries; the
/// library itself never installs one.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)
        .with_context(|| format!("could not open log file {LOG_FILE}"))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("could not install tracing subscriber: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_to_i32_modes() {
        assert_eq!(gg_float::f64_to_i32(2.5, RoundingMode::Nearest), 3);
        assert_eq!(gg_float::f64_to_i32(-2.5, RoundingMode::Nearest), -3);
        assert_eq!(gg_float::f64_to_i32(2.9, RoundingMode::Truncate), 2);
        assert_eq!(gg_float::f64_to_i32(-2.9, RoundingMode::Truncate), -2);
        assert_eq!(gg_float::f64_to_i32(99.999_999, RoundingMode::Nearest), 100);
        assert_eq!(gg_float::f64_to_i32(1e12, RoundingMode::Nearest), i32::MAX);
    }

    #[test]
    fn saturate_i32_clamps() {
        assert_eq!(gg_float::saturate_i32(5), 5);
        assert_eq!(gg_float::saturate_i32(-5), -5);
        assert_eq!(gg_float::saturate_i32(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(gg_float::saturate_i32(3_000_000_000), i32::MAX);
        assert_eq!(gg_float::saturate_i32(-3_000_000_000), i32::MIN);
    }

    #[test]
    fn normalise_degrees_wraps() {
        assert!((gg_float::normalise_degrees(370.) - 10.).abs() < EPSILON);
        assert!((gg_float::normalise_degrees(-90.) - 270.).abs() < EPSILON);
        assert!(gg_float::normalise_degrees(720.).abs() < EPSILON);
    }

    #[test]
    fn inclusive_overlap() {
        assert!(gg_range::overlaps_inclusive(&(0..=10), &(5..=15)));
        assert!(gg_range::overlaps_inclusive(&(5..=15), &(0..=10)));
        // Touching.
        assert!(gg_range::overlaps_inclusive(&(0..=10), &(10..=20)));
        assert!(gg_range::overlaps_inclusive(&(10..=20), &(0..=10)));
        // Same start.
        assert!(gg_range::overlaps_inclusive(&(3..=4), &(3..=100)));
        // Contained.
        assert!(gg_range::overlaps_inclusive(&(0..=100), &(40..=50)));
        assert!(!gg_range::overlaps_inclusive(&(0..=9), &(10..=20)));
        assert!(!gg_range::overlaps_inclusive(&(10..=20), &(0..=9)));
    }
}
