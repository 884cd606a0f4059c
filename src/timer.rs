use core::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time in whole microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elapsed(u64);

impl Elapsed {
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Elapsed(micros)
    }

    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0
    }
}

impl From<Duration> for Elapsed {
    /// Counts the whole duration, seconds included. Saturates at `u64::MAX`.
    #[inline]
    fn from(duration: Duration) -> Self {
        Elapsed(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monotonic single-sample timer.
/// # Example
/// ```
/// use cl_vecadd::Stopwatch;
///
/// let watch = Stopwatch::start();
/// let sum: u64 = (0..1000).sum();
/// let elapsed = watch.stop();
///
/// assert_eq!(sum, 499500);
/// assert!(elapsed.as_micros() < 1_000_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        Stopwatch {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn stop(self) -> Elapsed {
        self.start.elapsed().into()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Elapsed, Stopwatch};

    #[test]
    fn test_elapsed_spans_second_boundary() {
        // 0.999_990s -> 1.000_005s would give a negative microsecond-field delta
        let elapsed = Elapsed::from(Duration::new(1, 5_000) - Duration::new(0, 999_990_000));
        assert_eq!(elapsed.as_micros(), 15);

        let elapsed = Elapsed::from(Duration::new(3, 250_000));
        assert_eq!(elapsed.as_micros(), 3_000_250);
    }

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(Elapsed::from(Duration::MAX).as_micros(), u64::MAX);
    }

    #[test]
    fn test_stopwatch_measures_sleep() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(watch.stop() >= Elapsed::from_micros(2_000));
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(Elapsed::from_micros(42).to_string(), "42");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_elapsed() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Elapsed::from_micros(42),
            &[Token::NewtypeStruct { name: "Elapsed" }, Token::U64(42)],
        );
    }
}
