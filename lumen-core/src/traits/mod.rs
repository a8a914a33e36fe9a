//! Hardware abstraction traits
//!
//! These traits define the interface between the scheduling logic
//! and hardware-specific implementations.

pub mod output;
pub mod time;

pub use output::DigitalOutputGroup;
pub use time::{TickCount, TimeSource};
