//! embedded-hal pin adapter
//!
//! Wraps any `embedded-hal` digital output pin so it can populate a
//! [`GpioOutputGroup`](super::GpioOutputGroup).

use embedded_hal::digital::OutputPin as EhOutputPin;

use super::gpio::OutputPin;

/// Adapter from `embedded_hal::digital::OutputPin` to the driver pin trait
///
/// Pin errors are discarded: the output group is a fire-and-forget sink
/// from the scheduler's point of view, so there is nowhere for a write
/// error to go. The last commanded level is tracked locally because the
/// base `embedded-hal` trait cannot read it back.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin> HalPin<P> {
    /// Wrap a pin, driving it low
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, high: false }
    }
}

impl<P: EhOutputPin> OutputPin for HalPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
