//! Light scheduler
//!
//! Fires one-shot rules against a digital output group when the time
//! source reaches their trigger tick. The host polls [`LightScheduler::run`]
//! on its own cadence; the scheduler keeps no internal timer.

use crate::traits::{DigitalOutputGroup, TickCount, TimeSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of concurrently active schedules
pub const MAX_SCHEDULES: usize = 10;

/// One slot of the schedule table
///
/// `active` is the sole authority on whether a slot participates in
/// matching or firing; the remaining fields of an inactive slot are
/// stale and never read.
#[derive(Debug, Clone, Copy)]
struct Slot {
    active: bool,
    channel: u8,
    state: bool,
    trigger: TickCount,
}

impl Slot {
    const INACTIVE: Self = Self {
        active: false,
        channel: 0,
        state: false,
        trigger: 0,
    };
}

/// A currently active schedule, as reported by [`LightScheduler::active_schedules`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    /// Output channel in the digital output group
    pub channel: u8,
    /// State written to the channel when the rule fires
    pub state: bool,
    /// Tick count at which the rule fires
    pub trigger: TickCount,
}

/// Time-triggered scheduler for binary outputs
///
/// Holds a fixed table of `MAX_SCHEDULES` slots plus the two injected
/// collaborators: a digital output group to write through and a time
/// source to poll. Collaborators are typically injected as borrows
/// (`&mut` group, `&` time source) via the blanket trait impls, so a
/// single output group can outlive several scheduler instances.
///
/// All operations are synchronous, O(`MAX_SCHEDULES`) linear scans. The
/// scheduler performs no locking; hosts calling in from more than one
/// execution context must serialize access themselves.
#[derive(Debug)]
pub struct LightScheduler<G, T> {
    lights: G,
    time_source: T,
    slots: [Slot; MAX_SCHEDULES],
}

impl<G: DigitalOutputGroup, T: TimeSource> LightScheduler<G, T> {
    /// Create a scheduler with all slots inactive
    ///
    /// # Arguments
    /// - `lights`: digital output group controlling the lights; light ID x
    ///   is channel x in the group
    /// - `time_source`: how the scheduler reads the current time
    pub fn new(lights: G, time_source: T) -> Self {
        Self {
            lights,
            time_source,
            slots: [Slot::INACTIVE; MAX_SCHEDULES],
        }
    }

    /// Schedule a light to be switched on or off
    ///
    /// Claims the lowest-index inactive slot. When all slots are active
    /// the new rule is dropped without any signal to the caller; existing
    /// slots are untouched. Duplicate rules are not coalesced: adding the
    /// same triple twice creates two entries that each fire on their own.
    pub fn add_schedule(&mut self, channel: u8, state: bool, time: TickCount) {
        match self.slots.iter_mut().find(|slot| !slot.active) {
            Some(slot) => {
                *slot = Slot {
                    active: true,
                    channel,
                    state,
                    trigger: time,
                };
            }
            None => {
                // Table full: the rule is deliberately dropped, not queued.
                #[cfg(feature = "defmt")]
                defmt::warn!("schedule table full, dropping rule for channel {}", channel);
            }
        }
    }

    /// Remove previously added schedules
    ///
    /// Deactivates every active slot whose (channel, state, time) triple
    /// matches exactly; partial matches are left alone. Removing a triple
    /// that was never added is a no-op. Freed slots are reused by later
    /// [`add_schedule`](Self::add_schedule) calls.
    pub fn remove_schedule(&mut self, channel: u8, state: bool, time: TickCount) {
        for slot in self.slots.iter_mut() {
            if slot.active && slot.channel == channel && slot.state == state && slot.trigger == time
            {
                slot.active = false;
            }
        }
    }

    /// Run all schedules that are due
    ///
    /// Queries the time source once, then writes every active slot whose
    /// trigger equals the current tick exactly (not "has passed"), in slot
    /// order. Firing does not deactivate a slot: if the host polls again
    /// while the time source still reports the same tick, the rule fires
    /// again. One-shot behavior therefore relies on the tick count
    /// advancing between polls.
    pub fn run(&mut self) {
        let now = self.time_source.ticks();

        for slot in &self.slots {
            if slot.active && slot.trigger == now {
                self.lights.write(slot.channel, slot.state);
            }
        }
    }

    /// Number of currently active schedules
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    /// Iterate over the currently active schedules in slot order
    pub fn active_schedules(&self) -> impl Iterator<Item = ScheduleEntry> + '_ {
        self.slots.iter().filter(|slot| slot.active).map(|slot| ScheduleEntry {
            channel: slot.channel,
            state: slot.state,
            trigger: slot.trigger,
        })
    }

    /// Get the injected output group
    pub fn lights(&self) -> &G {
        &self.lights
    }
}
