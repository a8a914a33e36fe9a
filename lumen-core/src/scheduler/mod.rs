//! Time-triggered light scheduler
//!
//! Holds a fixed-capacity table of one-shot rules ("set channel X to
//! state S when the clock reads tick T") and fires the due ones each
//! time the host polls.

pub mod light;

pub use light::{LightScheduler, ScheduleEntry, MAX_SCHEDULES};
