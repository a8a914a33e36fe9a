//! GPIO output group
//!
//! Maps output-group channels onto a bank of GPIO pins (driven directly
//! or via relays/MOSFETs).

use heapless::Vec;
use lumen_core::traits::DigitalOutputGroup;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;

    /// Set the pin to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// GPIO output group
///
/// Channel x is the pin registered x-th via
/// [`add_channel`](Self::add_channel). The bank can be configured as
/// active-high (default) or active-low. Writes to channels without a
/// registered pin are ignored, matching the fire-and-forget output
/// contract of the scheduler.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioOutputGroup<P, const N: usize> {
    pins: Vec<P, N>,
    /// If true, channel ON = pin LOW
    inverted: bool,
}

impl<P: OutputPin, const N: usize> GpioOutputGroup<P, N> {
    /// Create an empty group
    ///
    /// # Arguments
    /// - `inverted`: if true, a channel is ON when its pin is LOW (for
    ///   active-low relay boards)
    pub fn new(inverted: bool) -> Self {
        Self {
            pins: Vec::new(),
            inverted,
        }
    }

    /// Create an empty group with active-high outputs
    pub fn new_active_high() -> Self {
        Self::new(false)
    }

    /// Create an empty group with active-low outputs
    pub fn new_active_low() -> Self {
        Self::new(true)
    }

    /// Register the next channel's pin, returning its channel index
    ///
    /// The pin is driven to the OFF level immediately. Returns the pin
    /// back when the bank is already full.
    pub fn add_channel(&mut self, mut pin: P) -> Result<u8, P> {
        pin.set_level(self.inverted);
        let channel = self.pins.len() as u8;
        self.pins.push(pin).map(|_| channel)
    }

    /// Number of registered channels
    pub fn channel_count(&self) -> usize {
        self.pins.len()
    }

    /// Check the logical state of a channel (None if unregistered)
    pub fn is_on(&self, channel: u8) -> Option<bool> {
        self.pins
            .get(channel as usize)
            .map(|pin| pin.is_set_high() != self.inverted)
    }
}

impl<P: OutputPin, const N: usize> DigitalOutputGroup for GpioOutputGroup<P, N> {
    fn write(&mut self, channel: u8, state: bool) {
        if let Some(pin) = self.pins.get_mut(channel as usize) {
            pin.set_level(state != self.inverted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestPin {
        high: bool,
    }

    impl TestPin {
        fn new() -> Self {
            // Pins come up high on many boards; the group must drive
            // them to OFF when the channel is registered.
            Self { high: true }
        }
    }

    impl OutputPin for TestPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn registering_a_channel_drives_the_pin_off() {
        let mut group: GpioOutputGroup<TestPin, 4> = GpioOutputGroup::new_active_high();
        let channel = group.add_channel(TestPin::new()).unwrap();

        assert_eq!(channel, 0);
        assert_eq!(group.is_on(channel), Some(false));
    }

    #[test]
    fn write_sets_the_mapped_pin() {
        let mut group: GpioOutputGroup<TestPin, 4> = GpioOutputGroup::new_active_high();
        let a = group.add_channel(TestPin::new()).unwrap();
        let b = group.add_channel(TestPin::new()).unwrap();

        group.write(b, true);

        assert_eq!(group.is_on(a), Some(false));
        assert_eq!(group.is_on(b), Some(true));
    }

    #[test]
    fn active_low_group_inverts_the_pin_level() {
        let mut group: GpioOutputGroup<TestPin, 4> = GpioOutputGroup::new_active_low();
        let channel = group.add_channel(TestPin::new()).unwrap();

        // OFF = pin high for an active-low bank.
        assert!(group.pins[channel as usize].is_set_high());
        assert_eq!(group.is_on(channel), Some(false));

        group.write(channel, true);
        assert!(!group.pins[channel as usize].is_set_high());
        assert_eq!(group.is_on(channel), Some(true));
    }

    #[test]
    fn write_to_an_unregistered_channel_is_ignored() {
        let mut group: GpioOutputGroup<TestPin, 4> = GpioOutputGroup::new_active_high();
        let channel = group.add_channel(TestPin::new()).unwrap();

        group.write(7, true);

        assert_eq!(group.is_on(channel), Some(false));
        assert_eq!(group.is_on(7), None);
    }

    #[test]
    fn full_bank_returns_the_pin() {
        let mut group: GpioOutputGroup<TestPin, 1> = GpioOutputGroup::new_active_high();
        group.add_channel(TestPin::new()).unwrap();

        assert!(group.add_channel(TestPin::new()).is_err());
        assert_eq!(group.channel_count(), 1);
    }
}
