//! Tick sources
//!
//! Host-driven timekeeping for the scheduler. The scheduler holds a
//! shared borrow of its time source, so these types advance through
//! interior mutability.

use core::cell::Cell;

use lumen_core::traits::{TickCount, TimeSource};

/// Counter-backed tick source
///
/// The host advances the counter from its timer context (systick
/// handler, periodic task) while the scheduler reads it through
/// [`TimeSource`]. `Cell`-based, so all accesses must come from a
/// single execution context.
#[derive(Debug, Default)]
pub struct TickCounter {
    ticks: Cell<TickCount>,
}

impl TickCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter starting at the given tick
    pub fn starting_at(ticks: TickCount) -> Self {
        Self {
            ticks: Cell::new(ticks),
        }
    }

    /// Advance the counter by `delta` ticks
    pub fn advance(&self, delta: TickCount) {
        self.ticks.set(self.ticks.get().saturating_add(delta));
    }

    /// Set the counter to an absolute tick value
    pub fn set(&self, ticks: TickCount) {
        self.ticks.set(ticks);
    }
}

impl TimeSource for TickCounter {
    fn ticks(&self) -> TickCount {
        self.ticks.get()
    }
}

// Manual impl: the derive cannot see through the Cell.
#[cfg(feature = "defmt")]
impl defmt::Format for TickCounter {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "TickCounter {{ ticks: {} }}", self.ticks.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = TickCounter::new();
        assert_eq!(counter.ticks(), 0);
    }

    #[test]
    fn advances_monotonically() {
        let counter = TickCounter::starting_at(10);
        counter.advance(5);
        assert_eq!(counter.ticks(), 15);

        counter.advance(0);
        assert_eq!(counter.ticks(), 15);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let counter = TickCounter::starting_at(TickCount::MAX - 1);
        counter.advance(10);
        assert_eq!(counter.ticks(), TickCount::MAX);
    }
}
