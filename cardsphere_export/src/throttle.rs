use std::time::Duration;

/// Lookups between pauses when talking to Multiverse Bridge
pub const DEFAULT_LOOKUPS_PER_PAUSE: u32 = 100;
/// Length of each pause
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(60);

/// Fixed-rate limiter for external lookups.
///
/// Counts lookups over the whole run and blocks the calling thread for
/// `pause` after every `every`-th one. It does not react to HTTP 429s.
#[derive(Debug, Clone)]
pub struct LookupThrottle {
    every: u32,
    pause: Duration,
    lookups: u32,
    pauses: u32,
}

impl LookupThrottle {
    /// `every == 0` disables pausing
    pub fn new(every: u32, pause: Duration) -> Self {
        LookupThrottle {
            every,
            pause,
            lookups: 0,
            pauses: 0,
        }
    }

    /// Count one lookup, sleeping if it completes a batch
    pub fn record_lookup(&mut self) {
        self.lookups += 1;
        if self.every > 0 && self.lookups % self.every == 0 {
            log::info!(
                "Hit {} Multiverse Bridge lookups, sleeping {}s to avoid throttling.",
                self.lookups,
                self.pause.as_secs()
            );
            std::thread::sleep(self.pause);
            self.pauses += 1;
            log::info!("...resuming");
        }
    }

    pub fn lookups(&self) -> u32 {
        self.lookups
    }

    pub fn pauses(&self) -> u32 {
        self.pauses
    }
}

impl Default for LookupThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUPS_PER_PAUSE, DEFAULT_PAUSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_after_every_hundredth_lookup() {
        let mut throttle = LookupThrottle::new(100, Duration::ZERO);
        for _ in 0..250 {
            throttle.record_lookup();
        }
        assert_eq!(throttle.lookups(), 250);
        assert_eq!(throttle.pauses(), 2);
    }

    #[test]
    fn no_pause_before_the_batch_completes() {
        let mut throttle = LookupThrottle::new(100, Duration::ZERO);
        for _ in 0..99 {
            throttle.record_lookup();
        }
        assert_eq!(throttle.pauses(), 0);
        throttle.record_lookup();
        assert_eq!(throttle.pauses(), 1);
    }

    #[test]
    fn zero_disables_pausing() {
        let mut throttle = LookupThrottle::new(0, Duration::from_secs(3600));
        for _ in 0..500 {
            throttle.record_lookup();
        }
        assert_eq!(throttle.pauses(), 0);
    }

    #[test]
    fn pause_actually_blocks() {
        let mut throttle = LookupThrottle::new(1, Duration::from_millis(20));
        let started = std::time::Instant::now();
        throttle.record_lookup();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn default_matches_multiverse_bridge_limits() {
        let throttle = LookupThrottle::default();
        assert_eq!(throttle.every, 100);
        assert_eq!(throttle.pause, Duration::from_secs(60));
    }
}
