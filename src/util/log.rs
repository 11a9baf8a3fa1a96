use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};
use std::time::{Duration, Instant};

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if nothing has been logged from `loc` within the last `interval`, and if so
/// records now as the last time.
pub fn should_log(loc: String, interval: Duration) -> bool {
    let mut last_log = LAST_LOG.lock().unwrap_or_else(PoisonError::into_inner);
    if last_log
        .get(&loc)
        .map_or(true, |then| then.elapsed() >= interval)
    {
        last_log.insert(loc, Instant::now());
        true
    } else {
        false
    }
}

#[macro_export]
macro_rules! info_every_millis {
    ($millis:expr, $($args:expr),+) => {
        if $crate::util::log::should_log(
            $crate::util::assert::current_location!(),
            std::time::Duration::from_millis($millis),
        ) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log(
            $crate::util::assert::current_location!(),
            std::time::Duration::from_secs($seconds),
        ) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_log_rate_limits_per_location() {
        let loc = "log.rs:test".to_string();
        assert!(should_log(loc.clone(), Duration::from_secs(60)));
        assert!(!should_log(loc.clone(), Duration::from_secs(60)));
        assert!(should_log(loc, Duration::ZERO));
        assert!(should_log("log.rs:other".to_string(), Duration::from_secs(60)));
    }
}
