use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use crate::app::domain::messages::{Message, TimerEvent};

/// Identity of one scheduled delayed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Schedules one-shot delayed events back into the message loop.
///
/// A fired timer arrives as [`Message::Timer`] carrying the token returned
/// here. A cancelled timer never arrives.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken;
    fn cancel(&mut self, token: TimerToken);
}

/// Cancel the timer in `slot`, if any, leaving the slot empty.
pub fn cancel_slot(scheduler: &mut dyn Scheduler, slot: &mut Option<TimerToken>) {
    if let Some(token) = slot.take() {
        scheduler.cancel(token);
    }
}

/// Scheduler backed by FLTK timeouts on the UI thread.
pub struct FltkScheduler {
    sender: Sender<Message>,
    handles: Rc<RefCell<HashMap<TimerToken, TimeoutHandle>>>,
    next_token: u64,
}

impl FltkScheduler {
    pub fn new(sender: Sender<Message>) -> Self {
        Self {
            sender,
            handles: Rc::new(RefCell::new(HashMap::new())),
            next_token: 1,
        }
    }

    /// Number of timeouts scheduled but not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }
}

impl Scheduler for FltkScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;

        let sender = self.sender;
        let handles = self.handles.clone();
        let handle = app::add_timeout3(delay.as_secs_f64(), move |_| {
            handles.borrow_mut().remove(&token);
            sender.send(Message::Timer(token, event));
        });
        self.handles.borrow_mut().insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.handles.borrow_mut().remove(&token) {
            app::remove_timeout3(handle);
        }
    }
}
