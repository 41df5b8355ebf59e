use crate::error::{Error, ErrorKind, Result};
use crate::instant::Instant;

/// Immutable closed interval `[start, end]` between two instants.
///
/// Both endpoints belong to the interval and `start == end` is a valid,
/// zero-length timespan.
#[derive(Debug, Clone, Copy)]
pub struct Timespan {
    start: Instant,
    end: Instant,
}

impl Timespan {
    /// Makes a timespan, requires `start <= end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(Error::new(
                ErrorKind::InvalidInterval,
                "requires start <= end",
            ));
        }

        let span = Self { start, end };
        span.check_rep();
        Ok(span)
    }

    /// The starting point of the interval.
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// The ending point of the interval.
    #[inline]
    pub fn end(&self) -> Instant {
        self.end
    }

    #[inline]
    pub fn into_inner(self) -> (Instant, Instant) {
        (self.start, self.end)
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(!(self.end < self.start));
    }
}
