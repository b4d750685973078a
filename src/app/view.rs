//! The presentation surface the puzzle drives.
//!
//! `AppState` only ever talks to the screen through this trait; the FLTK
//! implementation lives in `ui::fltk_view`.

use crate::app::controllers::settings_panel::PanelFields;
use crate::app::domain::settings::TextAlignment;

pub trait PuzzleView {
    // Code pad
    fn set_cell_value(&mut self, index: usize, value: &str);
    fn focus_cell(&mut self, index: usize);
    fn select_cell_contents(&mut self, index: usize);
    /// Error flash over the window plus red cells.
    fn set_entry_error(&mut self, active: bool);
    fn set_entry_visible(&mut self, visible: bool);
    fn set_prompt(&mut self, text: &str);

    // Riddle
    fn set_riddle_visible(&mut self, visible: bool);
    fn clear_riddle(&mut self);
    fn append_riddle_char(&mut self, ch: char);
    fn append_riddle_line_break(&mut self);
    fn set_cursor_visible(&mut self, visible: bool);

    // Presentation
    fn apply_theme(&mut self, name: &str);
    fn apply_alignment(&mut self, alignment: TextAlignment);

    // Settings
    fn set_settings_trigger_visible(&mut self, visible: bool);
    fn set_panel_visible(&mut self, visible: bool);
    fn set_panel_fields(&mut self, fields: &PanelFields);
    fn panel_fields(&self) -> PanelFields;
    fn select_panel_theme(&mut self, name: &str);
    fn set_code_field_error(&mut self, active: bool);
    fn focus_code_field(&mut self);
    /// Ask a yes/no question; `true` means confirmed.
    fn confirm(&mut self, question: &str) -> bool;
}
