use core::fmt;

use crate::Render;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// A millisecond count split into hours, minutes, seconds and milliseconds
///
/// Renders as `h:m:s.ms` with only the milliseconds zero-padded: 131085 ms is `0:2:11.085`.
///
/// ```
/// let t = dbgout::Elapsed::from_millis(131_085);
/// assert_eq!((t.hours, t.minutes, t.seconds, t.millis), (0, 2, 11, 85));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed {
    /// Whole hours; not wrapped at 24
    pub hours: u64,
    /// `0..60`
    pub minutes: u8,
    /// `0..60`
    pub seconds: u8,
    /// `0..1000`
    pub millis: u16,
}

impl Elapsed {
    /// Decomposes a millisecond count.
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            hours: millis / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
            seconds: (millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
            millis: (millis % MILLIS_PER_SECOND) as u16,
        }
    }

    /// The millisecond count this was decomposed from.
    pub const fn as_millis(&self) -> u64 {
        self.hours * MILLIS_PER_HOUR
            + self.minutes as u64 * MILLIS_PER_MINUTE
            + self.seconds as u64 * MILLIS_PER_SECOND
            + self.millis as u64
    }
}

impl Render for Elapsed {
    fn render(&self) {
        self.hours.render();
        ":".render();
        self.minutes.render();
        ":".render();
        self.seconds.render();
        ".".render();
        if self.millis < 100 {
            "0".render();
        }
        if self.millis < 10 {
            "0".render();
        }
        self.millis.render();
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}
