use crate::app::controllers::code_entry::{CellOutcome, CodeEntry};
use crate::app::controllers::feedback::Feedback;
use crate::app::controllers::reveal::{RevealGesture, is_reveal_chord};
use crate::app::controllers::settings_panel::SettingsPanel;
use crate::app::controllers::typewriter::{Typewriter, TypewriterState};
use crate::app::domain::entry::CELL_COUNT;
use crate::app::domain::messages::{Message, TimerEvent};
use crate::app::domain::settings::{DEFAULT_PROMPT, PuzzleSettings, TextAlignment};
use crate::app::infrastructure::timers::{Scheduler, TimerToken};
use crate::app::services::settings_store::SettingsStore;
use crate::app::view::PuzzleView;

/// Main application coordinator.
///
/// Owns the settings record and every controller, and turns each `Message`
/// from the event loop into controller calls and view updates.
pub struct AppState<V: PuzzleView, S: Scheduler> {
    view: V,
    scheduler: S,
    store: SettingsStore,
    settings: PuzzleSettings,
    entry: CodeEntry,
    feedback: Feedback,
    typewriter: Typewriter,
    panel: SettingsPanel,
    reveal: RevealGesture,
    trigger_visible: bool,
}

impl<V: PuzzleView, S: Scheduler> AppState<V, S> {
    /// Load settings from `store`. Call [`init`](Self::init) once the window is shown.
    pub fn new(view: V, scheduler: S, store: SettingsStore) -> Self {
        let settings = store.load();
        tracing::info!(path = %store.path().display(), theme = %settings.theme, "Settings loaded");
        Self {
            view,
            scheduler,
            store,
            settings,
            entry: CodeEntry::new(),
            feedback: Feedback::new(),
            typewriter: Typewriter::new(),
            panel: SettingsPanel::new(),
            reveal: RevealGesture::new(),
            trigger_visible: false,
        }
    }

    /// Apply the loaded settings and put the puzzle in its initial state.
    pub fn init(&mut self) {
        let theme = self.settings.theme.clone();
        self.apply_theme(&theme);
        self.apply_prompt();
        self.apply_alignment(self.settings.alignment);
        self.reset_puzzle();
    }

    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn typewriter_state(&self) -> TypewriterState {
        self.typewriter.state()
    }

    pub fn settings_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn settings_trigger_visible(&self) -> bool {
        self.trigger_visible
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::CellInput(index, raw) => self.cell_input(index, &raw),
            Message::CellBackspace(index) => {
                if let Some(previous) = self.entry.backspace(index) {
                    self.view.focus_cell(previous);
                }
            }
            Message::CellEnter(_) | Message::Submit => self.submit(),
            Message::CellFocused(index) => self.view.select_cell_contents(index),

            Message::KeyPressed(chord) => {
                if !self.panel.is_open() && is_reveal_chord(&chord) {
                    self.toggle_settings_trigger();
                }
            }
            Message::PressStarted => {
                if self.panel.is_open() {
                    self.reveal.press_cancelled(&mut self.scheduler);
                } else {
                    self.reveal.press_started(&mut self.scheduler);
                }
            }
            Message::PressCancelled => self.reveal.press_cancelled(&mut self.scheduler),

            Message::OpenSettings => self.open_settings(),
            Message::CloseSettings => self.close_settings(),
            Message::PreviewTheme(name) => {
                if self.panel.is_open() {
                    self.apply_theme(&name);
                }
            }
            Message::SaveSettings => self.save_settings(),
            Message::ResetSettings => self.reset_settings(),

            Message::Timer(token, event) => self.timer_fired(token, event),
            Message::Quit => {}
        }
    }

    // --- Code pad ---

    fn cell_input(&mut self, index: usize, raw: &str) {
        if index >= CELL_COUNT {
            return;
        }
        let outcome = self.entry.input(index, raw);
        self.view.set_cell_value(index, &self.entry.cell_value(index));

        match outcome {
            CellOutcome::Rejected => {}
            CellOutcome::Advance(next) => self.view.focus_cell(next),
            CellOutcome::Submit => self.submit(),
        }
    }

    /// Compare the pad against the stored code.
    pub fn submit(&mut self) {
        if self.entry.matches(&self.settings.code) {
            tracing::info!("Access code accepted");
            self.clear_cells();
            self.feedback.success(&mut self.view, &mut self.scheduler);
            self.trigger_visible = false;
        } else {
            tracing::debug!(entered_len = self.entry.entered().len(), "Access code rejected");
            self.feedback.failure(&mut self.view, &mut self.scheduler);
            self.clear_cells();
            self.view.focus_cell(0);
        }
    }

    fn clear_cells(&mut self) {
        self.entry.clear();
        for index in 0..CELL_COUNT {
            self.view.set_cell_value(index, "");
        }
    }

    // --- Timers ---

    fn timer_fired(&mut self, token: TimerToken, event: TimerEvent) {
        match event {
            TimerEvent::FailureFlashElapsed => {
                self.feedback.flash_elapsed(token, &mut self.view);
            }
            TimerEvent::RevealRiddle => {
                if self.feedback.reveal_due(token, &mut self.view) {
                    self.typewriter.start(
                        &self.settings.riddle,
                        self.settings.type_speed,
                        &mut self.view,
                        &mut self.scheduler,
                    );
                }
            }
            TimerEvent::TypewriterTick => {
                self.typewriter.tick(token, &mut self.view, &mut self.scheduler);
            }
            TimerEvent::HideCursor => self.typewriter.hide_cursor(token, &mut self.view),
            TimerEvent::CodeFieldCueElapsed => self.panel.code_cue_elapsed(token, &mut self.view),
            TimerEvent::LongPressElapsed => {
                if self.reveal.long_press_elapsed(token) && !self.panel.is_open() {
                    self.toggle_settings_trigger();
                }
            }
        }
    }

    // --- Presentation ---

    /// Apply a theme to the view and record it in the in-memory settings.
    ///
    /// Also used for live preview, so the record may hold a theme that was
    /// never persisted.
    pub fn apply_theme(&mut self, name: &str) {
        self.view.apply_theme(name);
        self.view.select_panel_theme(name);
        self.settings.theme = name.to_string();
    }

    pub fn apply_alignment(&mut self, alignment: TextAlignment) {
        self.view.apply_alignment(alignment);
    }

    fn apply_prompt(&mut self) {
        if self.settings.prompt.is_empty() {
            self.view.set_prompt(DEFAULT_PROMPT);
        } else {
            self.view.set_prompt(&self.settings.prompt);
        }
    }

    fn set_settings_trigger_visible(&mut self, visible: bool) {
        self.trigger_visible = visible;
        self.view.set_settings_trigger_visible(visible);
    }

    fn toggle_settings_trigger(&mut self) {
        self.set_settings_trigger_visible(!self.trigger_visible);
    }

    // --- Settings ---

    pub fn open_settings(&mut self) {
        self.reveal.press_cancelled(&mut self.scheduler);
        self.panel.open(&self.settings, &mut self.view);
    }

    pub fn close_settings(&mut self) {
        self.panel.close(&mut self.view);
    }

    /// Validate the panel, then commit, persist and restart the puzzle.
    pub fn save_settings(&mut self) {
        let fields = self.view.panel_fields();
        let committed = match fields.commit() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Settings not saved: {e}");
                self.panel.reject_code(&mut self.view, &mut self.scheduler);
                return;
            }
        };

        self.settings = committed;
        self.apply_prompt();
        self.apply_alignment(self.settings.alignment);
        let theme = self.settings.theme.clone();
        self.apply_theme(&theme);

        if let Err(e) = self.store.save(&self.settings) {
            tracing::warn!(path = %self.store.path().display(), "Failed to persist settings: {e}");
        }
        tracing::info!(theme = %self.settings.theme, type_speed = self.settings.type_speed, "Settings saved");

        self.close_settings();
        self.reset_puzzle();
    }

    /// Ask, then restore the defaults everywhere.
    pub fn reset_settings(&mut self) {
        if !self.view.confirm("Reset all settings to defaults?") {
            return;
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(path = %self.store.path().display(), "Failed to clear settings: {e}");
        }
        self.settings = PuzzleSettings::default();
        let theme = self.settings.theme.clone();
        self.apply_theme(&theme);
        self.apply_alignment(self.settings.alignment);
        self.apply_prompt();
        tracing::info!("Settings reset to defaults");

        self.close_settings();
        self.reset_puzzle();
    }

    /// Tear down whatever the success path or typewriter did and show the
    /// empty code pad again.
    pub fn reset_puzzle(&mut self) {
        self.typewriter.cancel(&mut self.scheduler);
        self.feedback.cancel(&mut self.view, &mut self.scheduler);

        self.view.clear_riddle();
        self.view.set_cursor_visible(true);
        self.view.set_entry_visible(true);
        self.view.set_riddle_visible(false);
        self.set_settings_trigger_visible(false);
        self.clear_cells();
        self.view.focus_cell(0);
        tracing::debug!("Puzzle reset");
    }
}
