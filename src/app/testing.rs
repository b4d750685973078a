//! Test doubles: a view that records what it was told and a scheduler on a
//! virtual millisecond clock.

use std::time::Duration;

use crate::app::controllers::settings_panel::PanelFields;
use crate::app::domain::entry::CELL_COUNT;
use crate::app::domain::messages::TimerEvent;
use crate::app::domain::settings::TextAlignment;
use crate::app::infrastructure::timers::{Scheduler, TimerToken};
use crate::app::view::PuzzleView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    RiddleChar(char),
    RiddleLineBreak,
    RiddleCleared,
    Focus(usize),
    Select(usize),
    Theme(String),
}

#[derive(Debug)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
    pub cells: [String; CELL_COUNT],
    pub focused: Option<usize>,
    pub entry_error: bool,
    pub entry_visible: bool,
    pub prompt: String,
    pub riddle_visible: bool,
    pub riddle_text: String,
    pub cursor_visible: bool,
    pub theme: String,
    pub alignment: TextAlignment,
    pub trigger_visible: bool,
    pub panel_visible: bool,
    pub panel_fields: PanelFields,
    pub code_field_error: bool,
    pub code_field_focused: bool,
    pub confirm_answer: bool,
    pub confirm_asked: usize,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            cells: Default::default(),
            focused: None,
            entry_error: false,
            entry_visible: true,
            prompt: String::new(),
            riddle_visible: false,
            riddle_text: String::new(),
            cursor_visible: true,
            theme: String::new(),
            alignment: TextAlignment::Left,
            trigger_visible: false,
            panel_visible: false,
            panel_fields: PanelFields::default(),
            code_field_error: false,
            code_field_focused: false,
            confirm_answer: true,
            confirm_asked: 0,
        }
    }
}

impl RecordingView {
    pub fn appended_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::RiddleChar(_) | ViewEvent::RiddleLineBreak))
            .count()
    }

    pub fn cells_empty(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

impl PuzzleView for RecordingView {
    fn set_cell_value(&mut self, index: usize, value: &str) {
        self.cells[index] = value.to_string();
    }

    fn focus_cell(&mut self, index: usize) {
        self.focused = Some(index);
        self.events.push(ViewEvent::Focus(index));
    }

    fn select_cell_contents(&mut self, index: usize) {
        self.events.push(ViewEvent::Select(index));
    }

    fn set_entry_error(&mut self, active: bool) {
        self.entry_error = active;
    }

    fn set_entry_visible(&mut self, visible: bool) {
        self.entry_visible = visible;
    }

    fn set_prompt(&mut self, text: &str) {
        self.prompt = text.to_string();
    }

    fn set_riddle_visible(&mut self, visible: bool) {
        self.riddle_visible = visible;
    }

    fn clear_riddle(&mut self) {
        self.riddle_text.clear();
        self.events.push(ViewEvent::RiddleCleared);
    }

    fn append_riddle_char(&mut self, ch: char) {
        self.riddle_text.push(ch);
        self.events.push(ViewEvent::RiddleChar(ch));
    }

    fn append_riddle_line_break(&mut self) {
        self.riddle_text.push('\n');
        self.events.push(ViewEvent::RiddleLineBreak);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn apply_theme(&mut self, name: &str) {
        self.theme = name.to_string();
        self.events.push(ViewEvent::Theme(name.to_string()));
    }

    fn apply_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    fn set_settings_trigger_visible(&mut self, visible: bool) {
        self.trigger_visible = visible;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    fn set_panel_fields(&mut self, fields: &PanelFields) {
        self.panel_fields = fields.clone();
    }

    fn panel_fields(&self) -> PanelFields {
        self.panel_fields.clone()
    }

    fn select_panel_theme(&mut self, name: &str) {
        self.panel_fields.theme = name.to_string();
    }

    fn set_code_field_error(&mut self, active: bool) {
        self.code_field_error = active;
    }

    fn focus_code_field(&mut self) {
        self.code_field_focused = true;
    }

    fn confirm(&mut self, _question: &str) -> bool {
        self.confirm_asked += 1;
        self.confirm_answer
    }
}

/// One-shot timers on a virtual clock, fired explicitly with [`pop_due`].
///
/// [`pop_due`]: ManualScheduler::pop_due
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    next_token: u64,
    pending: Vec<(u64, TimerToken, TimerEvent)>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self, event: TimerEvent) -> bool {
        self.pending.iter().any(|(_, _, e)| *e == event)
    }

    /// Remove and return the earliest timer due at or before `until_ms`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerToken, TimerEvent)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= until_ms)
            .min_by_key(|(_, (due, token, _))| (*due, token.0))
            .map(|(i, _)| i)?;
        let (due, token, event) = self.pending.remove(idx);
        self.now = self.now.max(due);
        Some((token, event))
    }

    pub fn advance_to(&mut self, ms: u64) {
        self.now = self.now.max(ms);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        let due = self.now + delay.as_millis() as u64;
        self.pending.push((due, token, event));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t, _)| *t != token);
    }
}
