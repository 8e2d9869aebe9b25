//! Deadline timers on a caller-driven monotonic clock.
//!
//! Nothing here sleeps or spawns: a timer is just the instant it is due,
//! measured from the owner's mount. The owner advances its clock and fires
//! whatever came due, which keeps cancellation trivial (drop the value).

use std::time::Duration;

/// Lower bound on any period so an interval can never fire twice at one instant.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fires once when the clock reaches the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OneShot {
    deadline: Duration,
}

impl OneShot {
    #[must_use]
    pub(crate) fn after(now: Duration, delay: Duration) -> Self {
        Self {
            deadline: now.saturating_add(delay),
        }
    }

    #[must_use]
    pub(crate) fn due_at(self) -> Duration {
        self.deadline
    }
}

/// Fires every period, the first time one full period after being armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interval {
    period: Duration,
    next: Duration,
}

impl Interval {
    #[must_use]
    pub(crate) fn starting_at(now: Duration, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next: now.saturating_add(period),
        }
    }

    #[must_use]
    pub(crate) fn due_at(self) -> Duration {
        self.next
    }

    pub(crate) fn reschedule(&mut self) {
        self.next = self.next.saturating_add(self.period);
    }
}

/// Clamp a configured period to something an [`Interval`] accepts.
#[must_use]
pub(crate) fn sanitize_period(period: Duration) -> Duration {
    period.max(MIN_PERIOD)
}
