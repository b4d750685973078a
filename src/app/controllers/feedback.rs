use std::time::Duration;

use crate::app::domain::messages::TimerEvent;
use crate::app::infrastructure::timers::{Scheduler, TimerToken, cancel_slot};
use crate::app::view::PuzzleView;

/// How long the error flash stays on after a wrong code.
pub const FAILURE_FLASH: Duration = Duration::from_millis(300);
/// Time for the entry UI to fade before the riddle appears.
pub const SUCCESS_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Timers for the wrong-code flash and the success transition.
#[derive(Default)]
pub struct Feedback {
    flash: Option<TimerToken>,
    reveal: Option<TimerToken>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the error flash.
    pub fn failure(&mut self, view: &mut dyn PuzzleView, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.flash);
        view.set_entry_error(true);
        self.flash = Some(scheduler.schedule(FAILURE_FLASH, TimerEvent::FailureFlashElapsed));
    }

    /// Returns `true` if `token` ended the current flash.
    pub fn flash_elapsed(&mut self, token: TimerToken, view: &mut dyn PuzzleView) -> bool {
        if self.flash != Some(token) {
            return false;
        }
        self.flash = None;
        view.set_entry_error(false);
        true
    }

    /// Hide the pad and schedule the riddle reveal.
    pub fn success(&mut self, view: &mut dyn PuzzleView, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.reveal);
        view.set_entry_visible(false);
        view.set_settings_trigger_visible(false);
        self.reveal = Some(scheduler.schedule(SUCCESS_REVEAL_DELAY, TimerEvent::RevealRiddle));
    }

    /// Returns `true` if `token` is the pending reveal; the caller starts the typewriter.
    pub fn reveal_due(&mut self, token: TimerToken, view: &mut dyn PuzzleView) -> bool {
        if self.reveal != Some(token) {
            return false;
        }
        self.reveal = None;
        view.set_riddle_visible(true);
        true
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Drop both timers and clear any flash still showing.
    pub fn cancel(&mut self, view: &mut dyn PuzzleView, scheduler: &mut dyn Scheduler) {
        if self.flash.is_some() {
            view.set_entry_error(false);
        }
        cancel_slot(scheduler, &mut self.flash);
        cancel_slot(scheduler, &mut self.reveal);
    }
}
