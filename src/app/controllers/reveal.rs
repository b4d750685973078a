use std::time::Duration;

use crate::app::domain::messages::{KeyChord, TimerEvent};
use crate::app::infrastructure::timers::{Scheduler, TimerToken, cancel_slot};

/// How long a press must be held to toggle the settings trigger.
pub const LONG_PRESS: Duration = Duration::from_millis(3000);

/// Ctrl+, on Windows/Linux, Cmd+, on macOS.
pub fn is_reveal_chord(chord: &KeyChord) -> bool {
    (chord.ctrl || chord.meta) && chord.key == ','
}

/// Hidden gestures that surface the settings trigger.
#[derive(Default)]
pub struct RevealGesture {
    long_press: Option<TimerToken>,
}

impl RevealGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the long-press timer, replacing any press still being held.
    pub fn press_started(&mut self, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.long_press);
        self.long_press = Some(scheduler.schedule(LONG_PRESS, TimerEvent::LongPressElapsed));
    }

    /// Release or movement before the timer fires.
    pub fn press_cancelled(&mut self, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.long_press);
    }

    /// Returns `true` if `token` completed the current long press.
    pub fn long_press_elapsed(&mut self, token: TimerToken) -> bool {
        if self.long_press == Some(token) {
            self.long_press = None;
            true
        } else {
            false
        }
    }
}
