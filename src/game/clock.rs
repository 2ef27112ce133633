use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed tick rate
///
/// `wait()` blocks for whatever is left of the current tick period, so a slow
/// tick is not punished with a full extra sleep.
pub struct FrameClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        FrameClock {
            period,
            last_tick: None,
        }
    }

    /// Time still to wait if the previous tick started at `last` and it is now `now`
    fn remaining(&self, last: Instant, now: Instant) -> Duration {
        self.period.saturating_sub(now.saturating_duration_since(last))
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last_tick {
            let remaining = self.remaining(last, Instant::now());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wait_does_not_sleep() {
        let mut clock = FrameClock::new(Duration::from_secs(10));
        let start = Instant::now();
        clock.wait();

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_time() {
        let clock = FrameClock::new(Duration::from_millis(50));
        let last = Instant::now();

        assert_eq!(clock.remaining(last, last + Duration::from_millis(20)), Duration::from_millis(30));
        assert_eq!(clock.remaining(last, last + Duration::from_millis(80)), Duration::ZERO);
    }

    #[test]
    fn test_wait_paces_ticks() {
        let mut clock = FrameClock::new(Duration::from_millis(20));
        clock.wait();
        let start = Instant::now();
        clock.wait();

        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
