use std::time::Duration;

use crate::app::domain::messages::TimerEvent;
use crate::app::domain::settings::{
    DEFAULT_PROMPT, DEFAULT_RIDDLE, DEFAULT_TYPE_SPEED, PuzzleSettings, TextAlignment,
    parse_type_speed, validate_code,
};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::timers::{Scheduler, TimerToken, cancel_slot};
use crate::app::view::PuzzleView;

/// How long the code field stays flagged after a rejected save.
pub const CODE_FIELD_CUE: Duration = Duration::from_millis(1000);

/// Raw contents of the settings panel's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelFields {
    pub theme: String,
    pub code: String,
    pub prompt: String,
    pub riddle: String,
    pub type_speed: String,
    pub alignment: String,
}

impl PanelFields {
    pub fn from_settings(settings: &PuzzleSettings) -> Self {
        Self {
            theme: settings.theme.clone(),
            code: settings.code.clone(),
            prompt: settings.prompt.clone(),
            riddle: settings.riddle.clone(),
            type_speed: settings.type_speed.to_string(),
            alignment: settings.alignment.name().to_string(),
        }
    }

    /// Build the record a save would commit.
    ///
    /// Only the code is validated. Empty prompt or riddle fall back to the
    /// defaults, and a type speed that is not a positive integer falls back
    /// to the default interval.
    pub fn commit(&self) -> Result<PuzzleSettings> {
        let code = validate_code(&self.code)?;

        let type_speed = parse_type_speed(&self.type_speed).unwrap_or_else(|| {
            tracing::warn!(value = %self.type_speed, "Invalid type speed, using {DEFAULT_TYPE_SPEED} ms");
            DEFAULT_TYPE_SPEED
        });

        Ok(PuzzleSettings {
            code,
            prompt: non_empty_or(&self.prompt, DEFAULT_PROMPT),
            riddle: non_empty_or(&self.riddle, DEFAULT_RIDDLE),
            theme: self.theme.clone(),
            type_speed,
            alignment: TextAlignment::from_name(&self.alignment),
        })
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Open/closed state of the panel and the code field's error cue.
#[derive(Default)]
pub struct SettingsPanel {
    open: bool,
    code_cue: Option<TimerToken>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, settings: &PuzzleSettings, view: &mut dyn PuzzleView) {
        view.set_panel_fields(&PanelFields::from_settings(settings));
        view.set_panel_visible(true);
        self.open = true;
    }

    pub fn close(&mut self, view: &mut dyn PuzzleView) {
        view.set_panel_visible(false);
        self.open = false;
    }

    /// Flag the code field and give it focus again.
    pub fn reject_code(&mut self, view: &mut dyn PuzzleView, scheduler: &mut dyn Scheduler) {
        cancel_slot(scheduler, &mut self.code_cue);
        view.set_code_field_error(true);
        view.focus_code_field();
        self.code_cue = Some(scheduler.schedule(CODE_FIELD_CUE, TimerEvent::CodeFieldCueElapsed));
    }

    pub fn code_cue_elapsed(&mut self, token: TimerToken, view: &mut dyn PuzzleView) {
        if self.code_cue == Some(token) {
            self.code_cue = None;
            view.set_code_field_error(false);
        }
    }
}
