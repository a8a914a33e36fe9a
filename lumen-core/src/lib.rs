//! Board-agnostic scheduling core for Lumen lighting controllers
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (digital output group, time source)
//! - Time-triggered light scheduler
//!
//! The scheduler is polled by the host on its own cadence; there is no
//! internal timer or task.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod scheduler;
pub mod traits;
