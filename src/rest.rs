use std::time::{Duration, Instant};

/// Rest between sets when nothing else is configured.
pub const DEFAULT_REST: Duration = Duration::from_secs(180);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestTimer {
    duration: Duration,
}

impl RestTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        RestTimer { duration }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn start(&self, now: Instant) -> RunningRest {
        RunningRest {
            started: now,
            duration: self.duration,
        }
    }
}

impl Default for RestTimer {
    fn default() -> Self {
        RestTimer::new(DEFAULT_REST)
    }
}

/// A rest interval that has been started. Time is passed in so callers control the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunningRest {
    started: Instant,
    duration: Duration,
}

impl RunningRest {
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_stops_at_zero() {
        let start = Instant::now();
        let rest = RestTimer::new(Duration::from_secs(90)).start(start);

        assert_eq!(rest.remaining(start), Duration::from_secs(90));
        assert_eq!(
            rest.remaining(start + Duration::from_secs(30)),
            Duration::from_secs(60)
        );
        assert!(!rest.is_done(start + Duration::from_secs(89)));
        assert!(rest.is_done(start + Duration::from_secs(90)));
        assert_eq!(rest.remaining(start + Duration::from_secs(500)), Duration::ZERO);
    }
}
