//! Autoplay interval and the owned repeating timer

use std::time::Duration;

use crate::error::{CarouselError, Result};

/// Period between automatic advances. A zero period disables autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AutoplayInterval(Duration);

impl AutoplayInterval {
    pub const DISABLED: AutoplayInterval = AutoplayInterval(Duration::ZERO);

    /// Build from a signed millisecond count; negative values are rejected.
    pub fn from_millis(ms: i64) -> Result<Self> {
        u64::try_from(ms)
            .map(|ms| AutoplayInterval(Duration::from_millis(ms)))
            .map_err(|_| {
                CarouselError::InvalidConfiguration(format!(
                    "autoplay interval must not be negative (got {ms}ms)"
                ))
            })
    }

    pub const fn from_duration(period: Duration) -> Self {
        AutoplayInterval(period)
    }

    pub fn is_enabled(&self) -> bool {
        !self.0.is_zero()
    }

    /// `None` when autoplay is disabled.
    pub fn period(&self) -> Option<Duration> {
        self.is_enabled().then_some(self.0)
    }

    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

/// Repeating countdown owned by a single carousel.
///
/// The timer accumulates elapsed time and reports a tick each time a full
/// period has passed. It is armed on creation and re-armed from zero whenever
/// its interval changes. Missed periods are not replayed: a single
/// [`advance`](Self::advance) spanning several periods yields one tick and
/// keeps the remaining phase.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: AutoplayInterval,
    elapsed: Duration,
    armed: bool,
    generation: u64,
}

impl AutoplayTimer {
    pub fn new(interval: AutoplayInterval) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: true,
            generation: 0,
        }
    }

    pub fn interval(&self) -> AutoplayInterval {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// True while armed with a non-zero interval.
    pub fn is_running(&self) -> bool {
        self.armed && self.interval.is_enabled()
    }

    /// Time accumulated towards the next tick.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left until the next tick, if the timer is running.
    pub fn remaining(&self) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        self.interval
            .period()
            .map(|period| period.saturating_sub(self.elapsed))
    }

    /// Bumped on every re-arm so external drivers can restart their clocks.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swap the interval and restart the countdown from zero.
    pub fn set_interval(&mut self, interval: AutoplayInterval) {
        self.interval = interval;
        self.rearm();
    }

    /// Restart the countdown from zero.
    pub fn rearm(&mut self) {
        if !self.armed {
            return;
        }
        self.elapsed = Duration::ZERO;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Stop for good; later calls to `advance` never tick.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }

    /// Feed elapsed time. Returns true when a period boundary was crossed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(period) = self.interval.period() else {
            return false;
        };
        if !self.armed {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed < period {
            return false;
        }

        let phase = self.elapsed.as_nanos() % period.as_nanos();
        self.elapsed = Duration::from_nanos(phase as u64);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn negative_interval_is_rejected() {
        assert!(matches!(
            AutoplayInterval::from_millis(-1),
            Err(CarouselError::InvalidConfiguration(_))
        ));
        assert_eq!(
            AutoplayInterval::from_millis(0).unwrap(),
            AutoplayInterval::DISABLED
        );
    }

    #[test]
    fn ticks_once_per_period() {
        let mut timer =
            AutoplayTimer::new(AutoplayInterval::from_duration(ms(5_000)));
        assert!(!timer.advance(ms(4_999)));
        assert!(timer.advance(ms(1)));
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.advance(ms(2_500)));
        assert!(timer.advance(ms(2_500)));
    }

    #[test]
    fn missed_periods_are_not_replayed() {
        let mut timer =
            AutoplayTimer::new(AutoplayInterval::from_duration(ms(5_000)));
        assert!(timer.advance(ms(12_000)));
        assert_eq!(timer.elapsed(), ms(2_000));
        assert!(!timer.advance(ms(2_000)));
        assert!(timer.advance(ms(1_000)));
    }

    #[test]
    fn interval_change_restarts_countdown() {
        let mut timer =
            AutoplayTimer::new(AutoplayInterval::from_duration(ms(5_000)));
        timer.advance(ms(4_000));
        timer.set_interval(AutoplayInterval::from_duration(ms(3_000)));
        assert_eq!(timer.generation(), 1);
        assert!(!timer.advance(ms(2_999)));
        assert!(timer.advance(ms(1)));
    }

    #[test]
    fn disabled_interval_never_ticks() {
        let mut timer = AutoplayTimer::new(AutoplayInterval::DISABLED);
        assert!(!timer.is_running());
        assert!(!timer.advance(ms(60_000)));
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn disarmed_timer_stays_silent() {
        let mut timer =
            AutoplayTimer::new(AutoplayInterval::from_duration(ms(1_000)));
        timer.disarm();
        assert!(!timer.advance(ms(10_000)));
        timer.rearm();
        assert!(!timer.is_armed());
        assert!(!timer.advance(ms(10_000)));
    }
}
