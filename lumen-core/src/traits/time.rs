//! Time source trait

/// Tick count reported by a [`TimeSource`]
///
/// The unit is defined by the time source (timer overflows, milliseconds,
/// scheduler polls) and is opaque to the core: the scheduler only ever
/// compares tick counts for exact equality against stored trigger times.
pub type TickCount = u32;

/// Trait for monotonic tick sources
///
/// Implementations typically wrap a hardware timer or a counter advanced
/// from the host's timer context.
pub trait TimeSource {
    /// Read the current tick count
    ///
    /// Must have no side effects; the scheduler may query it on every poll.
    fn ticks(&self) -> TickCount;
}

// Lets a shared, externally owned time source be injected by borrow.
impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn ticks(&self) -> TickCount {
        (**self).ticks()
    }
}
