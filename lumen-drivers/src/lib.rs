//! Driver implementations for Lumen lighting controllers
//!
//! Hardware-facing implementations of the `lumen-core` traits:
//!
//! - GPIO-backed digital output groups
//! - Tick sources for host-driven timekeeping

#![no_std]
#![deny(unsafe_code)]

pub mod output;
pub mod time;
