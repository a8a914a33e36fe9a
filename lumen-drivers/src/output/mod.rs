//! Digital output group implementations

pub mod gpio;
pub mod hal;

pub use gpio::{GpioOutputGroup, OutputPin};
pub use hal::HalPin;
