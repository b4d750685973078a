use std::time::Duration;

use crate::app::domain::messages::TimerEvent;
use crate::app::infrastructure::timers::{Scheduler, TimerToken, cancel_slot};
use crate::app::view::PuzzleView;

/// Delay between the last revealed character and hiding the cursor.
pub const CURSOR_HIDE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterState {
    Idle,
    Typing,
    Finished,
    CursorHidden,
}

/// Reveals the riddle one character per tick.
///
/// Owns at most one timer at a time: the next tick while `Typing`, the cursor
/// hide while `Finished`. Every transition cancels it first.
pub struct Typewriter {
    state: TypewriterState,
    chars: Vec<char>,
    index: usize,
    interval: Duration,
    timer: Option<TimerToken>,
}

impl Typewriter {
    pub fn new() -> Self {
        Self {
            state: TypewriterState::Idle,
            chars: Vec::new(),
            index: 0,
            interval: Duration::from_millis(1),
            timer: None,
        }
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// Characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.index
    }

    /// Restart from the first character of `riddle`.
    pub fn start(
        &mut self,
        riddle: &str,
        type_speed_ms: u64,
        view: &mut dyn PuzzleView,
        scheduler: &mut dyn Scheduler,
    ) {
        cancel_slot(scheduler, &mut self.timer);
        self.chars = riddle.chars().collect();
        self.index = 0;
        self.interval = Duration::from_millis(type_speed_ms.max(1));

        view.clear_riddle();
        view.set_cursor_visible(true);

        tracing::debug!(chars = self.chars.len(), interval_ms = type_speed_ms, "Typewriter started");
        if self.chars.is_empty() {
            self.finish(scheduler);
        } else {
            self.state = TypewriterState::Typing;
            self.timer = Some(scheduler.schedule(self.interval, TimerEvent::TypewriterTick));
        }
    }

    /// Reveal the next character. Ticks not owned by this typewriter are ignored.
    pub fn tick(&mut self, token: TimerToken, view: &mut dyn PuzzleView, scheduler: &mut dyn Scheduler) {
        if self.state != TypewriterState::Typing || self.timer != Some(token) {
            return;
        }
        self.timer = None;

        if let Some(&ch) = self.chars.get(self.index) {
            if ch == '\n' {
                view.append_riddle_line_break();
            } else {
                view.append_riddle_char(ch);
            }
            self.index += 1;
        }

        if self.index >= self.chars.len() {
            self.finish(scheduler);
        } else {
            self.timer = Some(scheduler.schedule(self.interval, TimerEvent::TypewriterTick));
        }
    }

    pub fn hide_cursor(&mut self, token: TimerToken, view: &mut dyn PuzzleView) {
        if self.state != TypewriterState::Finished || self.timer != Some(token) {
            return;
        }
        self.timer = None;
        self.state = TypewriterState::CursorHidden;
        view.set_cursor_visible(false);
    }

    /// Stop wherever we are and return to `Idle`.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.timer);
        self.state = TypewriterState::Idle;
        self.chars.clear();
        self.index = 0;
    }

    fn finish(&mut self, scheduler: &mut dyn Scheduler) {
        self.state = TypewriterState::Finished;
        self.timer = Some(scheduler.schedule(CURSOR_HIDE_DELAY, TimerEvent::HideCursor));
        tracing::debug!("Typewriter finished");
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{ManualScheduler, RecordingView, ViewEvent};

    fn run(
        typewriter: &mut Typewriter,
        view: &mut RecordingView,
        scheduler: &mut ManualScheduler,
        until_ms: u64,
    ) {
        while let Some((token, event)) = scheduler.pop_due(until_ms) {
            match event {
                TimerEvent::TypewriterTick => typewriter.tick(token, view, scheduler),
                TimerEvent::HideCursor => typewriter.hide_cursor(token, view),
                other => panic!("unexpected timer {other:?}"),
            }
        }
        scheduler.advance_to(until_ms);
    }

    #[test]
    fn test_one_character_per_tick() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("abc", 10, &mut view, &mut sched);
        assert_eq!(tw.state(), TypewriterState::Typing);

        run(&mut tw, &mut view, &mut sched, 9);
        assert_eq!(view.riddle_text, "");
        run(&mut tw, &mut view, &mut sched, 10);
        assert_eq!(view.riddle_text, "a");
        run(&mut tw, &mut view, &mut sched, 25);
        assert_eq!(view.riddle_text, "ab");
        run(&mut tw, &mut view, &mut sched, 30);
        assert_eq!(view.riddle_text, "abc");
        assert_eq!(tw.state(), TypewriterState::Finished);
    }

    #[test]
    fn test_newline_is_one_line_break() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("a\nb", 5, &mut view, &mut sched);
        run(&mut tw, &mut view, &mut sched, 100);

        let appends: Vec<&ViewEvent> = view
            .events
            .iter()
            .filter(|e| matches!(e, ViewEvent::RiddleChar(_) | ViewEvent::RiddleLineBreak))
            .collect();
        assert_eq!(
            appends,
            vec![
                &ViewEvent::RiddleChar('a'),
                &ViewEvent::RiddleLineBreak,
                &ViewEvent::RiddleChar('b'),
            ]
        );
    }

    #[test]
    fn test_cursor_hides_after_delay() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("hello", 20, &mut view, &mut sched);
        run(&mut tw, &mut view, &mut sched, 5 * 20 + 1499);
        assert!(view.cursor_visible);
        assert_eq!(tw.state(), TypewriterState::Finished);

        run(&mut tw, &mut view, &mut sched, 5 * 20 + 1500);
        assert!(!view.cursor_visible);
        assert_eq!(tw.state(), TypewriterState::CursorHidden);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_restart_cancels_previous_run() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("first", 10, &mut view, &mut sched);
        run(&mut tw, &mut view, &mut sched, 20);
        assert_eq!(view.riddle_text, "fi");

        tw.start("xy", 10, &mut view, &mut sched);
        assert_eq!(sched.pending_count(), 1);
        run(&mut tw, &mut view, &mut sched, 1000);
        assert_eq!(view.riddle_text, "xy");
    }

    #[test]
    fn test_empty_riddle_finishes_immediately() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("", 10, &mut view, &mut sched);
        assert_eq!(tw.state(), TypewriterState::Finished);
        run(&mut tw, &mut view, &mut sched, 1500);
        assert!(!view.cursor_visible);
    }

    #[test]
    fn test_zero_speed_is_clamped() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("ab", 0, &mut view, &mut sched);
        run(&mut tw, &mut view, &mut sched, 2);
        assert_eq!(view.riddle_text, "ab");
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut tw = Typewriter::new();
        let mut view = RecordingView::default();
        let mut sched = ManualScheduler::default();

        tw.start("abcdef", 10, &mut view, &mut sched);
        run(&mut tw, &mut view, &mut sched, 10);
        tw.cancel(&mut sched);
        assert_eq!(sched.pending_count(), 0);
        assert_eq!(tw.state(), TypewriterState::Idle);
        assert_eq!(view.riddle_text, "a");
    }
}
