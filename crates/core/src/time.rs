use chrono::{DateTime, Duration, Utc};

/// Time source for session transitions.
///
/// Sessions never read the system clock themselves; the services layer asks a
/// `Clock` for `now` and passes it into every transition.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Elapsed time between two instants, clamped at zero when `to` precedes `from`.
#[must_use]
pub fn elapsed_between(from: DateTime<Utc>, to: DateTime<Utc>) -> Duration {
    let delta = to - from;
    if delta < Duration::zero() {
        Duration::zero()
    } else {
        delta
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = fixed_clock();
        clock.advance(Duration::milliseconds(2_000));
        assert_eq!(clock.now() - fixed_now(), Duration::milliseconds(2_000));
    }

    #[test]
    fn elapsed_never_negative() {
        let now = fixed_now();
        let earlier = now - Duration::seconds(5);
        assert_eq!(elapsed_between(now, earlier), Duration::zero());
        assert_eq!(elapsed_between(earlier, now), Duration::seconds(5));
    }
}
