//! Randomized pause between rounds.

use std::time::Duration;
use rand::Rng;

/// Pick a delay uniformly from `[0, interval)` at nanosecond resolution.
///
/// A zero interval yields zero. Intervals beyond `u64::MAX` nanoseconds are capped.
pub fn random_delay<R: Rng + ?Sized>(interval: Duration, rng: &mut R) -> Duration {
    let nanos = u64::try_from(interval.as_nanos()).unwrap_or(u64::MAX);
    if nanos == 0 {
        return Duration::ZERO;
    }

    Duration::from_nanos(rng.gen_range(0..nanos))
}
