//! Millisecond clocks and the gated timers that every animation is built on.
//!
//! Nothing here blocks. A gate is checked once per call and either fires or falls through.

#[cfg(feature = "std")]
use std::time::Instant;

/// A monotonic, free running source of milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the clock was created.
#[cfg(feature = "std")]
pub struct StdClock {
    start: Instant,
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Milliseconds since the embassy time driver started.
#[cfg(feature = "embassy")]
#[derive(Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

/// The result of checking a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The period elapsed and this call fired the gate. Advance state now.
    Fired,
    /// The gate already fired at this exact instant. Another segment of the same frame.
    SameFrame,
    Waiting,
}

impl Tick {
    /// true only for the call that fired
    pub fn fired(self) -> bool {
        self == Tick::Fired
    }

    /// true for every call made while the gate is open
    pub fn open(self) -> bool {
        self != Tick::Waiting
    }
}

/// Runs its body at most once per `period_ms`.
///
/// The first check arms the gate. It fires on the first check at least `period_ms` after it was armed or last fired.
/// A late check fires once and re-arms at that instant. Missed periods are not caught up.
#[derive(Debug, Clone)]
pub struct Every {
    period_ms: u64,
    last_ms: Option<u64>,
    /// false while `last_ms` only marks when the gate was armed
    fired: bool,
}

impl Every {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: None,
            fired: false,
        }
    }

    pub fn check(&mut self, now_ms: u64) -> Tick {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                Tick::Waiting
            }
            Some(last) if now_ms == last && self.fired => Tick::SameFrame,
            Some(last) if now_ms.saturating_sub(last) >= self.period_ms => {
                self.last_ms = Some(now_ms);
                self.fired = true;
                Tick::Fired
            }
            Some(_) => Tick::Waiting,
        }
    }
}
