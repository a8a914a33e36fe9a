//! Digital output group trait

/// Trait for a group of binary output channels
///
/// Implementations map channel indices onto physical outputs (GPIO pins,
/// relay banks, shift registers). Channel numbering and the valid range
/// are defined by the implementation, not by the scheduler.
pub trait DigitalOutputGroup {
    /// Set the named channel to the given state
    ///
    /// Write failures are not observable by callers; the scheduler treats
    /// this as fire-and-forget.
    fn write(&mut self, channel: u8, state: bool);
}

// Lets an externally owned output group be injected by borrow.
impl<G: DigitalOutputGroup + ?Sized> DigitalOutputGroup for &mut G {
    fn write(&mut self, channel: u8, state: bool) {
        (**self).write(channel, state);
    }
}
