use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, dialog, enums::Align, frame::Frame, prelude::*};

use super::main_window::MainWidgets;
use super::settings_panel::{alignment_index, index_to_alignment};
use super::theme::{Palette, index_to_theme, palette, theme_index};
#[cfg(target_os = "windows")]
use super::theme::set_windows_titlebar_theme;
use crate::app::controllers::settings_panel::PanelFields;
use crate::app::domain::settings::{DEFAULT_THEME, TextAlignment};
use crate::app::view::PuzzleView;

pub const CURSOR_GLYPH: char = '\u{258C}';
const BLINK_SECS: f64 = 0.53;

/// FLTK labels treat `@` as a symbol prefix; double it to print it literally.
pub fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// Label for the riddle frame: the escaped text plus the cursor when shown.
pub fn riddle_label(text: &str, show_cursor: bool) -> String {
    let mut label = escape_label(text);
    if show_cursor {
        label.push(CURSOR_GLYPH);
    }
    label
}

struct RiddleSurface {
    frame: Frame,
    text: String,
    cursor_visible: bool,
    blink_on: bool,
}

impl RiddleSurface {
    fn render(&mut self) {
        let label = riddle_label(&self.text, self.cursor_visible && self.blink_on);
        self.frame.set_label(&label);
        self.frame.redraw();
    }
}

/// [`PuzzleView`] over the FLTK widgets built by `build_main_window`.
pub struct FltkView {
    widgets: MainWidgets,
    riddle: Rc<RefCell<RiddleSurface>>,
    palette: Palette,
    entry_error: bool,
    code_field_error: bool,
}

impl FltkView {
    pub fn new(widgets: MainWidgets) -> Self {
        let riddle = Rc::new(RefCell::new(RiddleSurface {
            frame: widgets.riddle.clone(),
            text: String::new(),
            cursor_visible: true,
            blink_on: true,
        }));

        let blink = riddle.clone();
        app::add_timeout3(BLINK_SECS, move |handle| {
            {
                let mut surface = blink.borrow_mut();
                surface.blink_on = !surface.blink_on;
                if surface.cursor_visible {
                    surface.render();
                }
            }
            app::repeat_timeout3(BLINK_SECS, handle);
        });

        let mut view = Self {
            widgets,
            riddle,
            palette: palette(DEFAULT_THEME),
            entry_error: false,
            code_field_error: false,
        };
        view.paint();
        view
    }

    pub fn show(&mut self) {
        self.widgets.wind.show();
    }

    fn paint(&mut self) {
        let p = self.palette;
        let w = &mut self.widgets;

        w.wind.set_color(p.background);
        w.stage.set_color(if self.entry_error { p.error } else { p.background });
        w.prompt.set_label_color(p.text);
        for cell in w.cells.iter_mut() {
            cell.set_color(if self.entry_error { p.error } else { p.surface });
            cell.set_text_color(p.text);
            cell.set_cursor_color(p.text);
            cell.set_selection_color(p.accent);
        }
        w.submit.set_color(p.accent);
        w.submit.set_label_color(p.background);
        w.riddle.set_color(p.background);
        w.riddle.set_label_color(p.text);
        w.trigger.set_color(p.background);
        w.trigger.set_label_color(p.accent);

        let panel = &mut w.panel;
        panel.scrim.set_color(p.scrim);
        panel.body.set_color(p.surface);
        for label in panel.labels.iter_mut() {
            label.set_label_color(p.text);
        }
        panel.close.set_color(p.surface);
        panel.close.set_label_color(p.text);
        panel.code.set_color(if self.code_field_error { p.error } else { p.background });
        panel.code.set_text_color(p.text);
        panel.prompt.set_color(p.background);
        panel.prompt.set_text_color(p.text);
        panel.riddle.set_color(p.background);
        panel.riddle.set_text_color(p.text);
        panel.type_speed.set_color(p.background);
        panel.type_speed.set_text_color(p.text);
        panel.theme.set_color(p.background);
        panel.theme.set_text_color(p.text);
        panel.alignment.set_color(p.background);
        panel.alignment.set_text_color(p.text);
        for button in [&mut panel.save, &mut panel.reset] {
            button.set_color(p.accent);
            button.set_label_color(p.background);
        }

        w.wind.redraw();
    }
}

impl PuzzleView for FltkView {
    fn set_cell_value(&mut self, index: usize, value: &str) {
        if let Some(cell) = self.widgets.cells.get_mut(index) {
            cell.set_value(value);
        }
    }

    fn focus_cell(&mut self, index: usize) {
        if let Some(cell) = self.widgets.cells.get_mut(index) {
            let _ = cell.take_focus();
        }
    }

    fn select_cell_contents(&mut self, index: usize) {
        if let Some(cell) = self.widgets.cells.get_mut(index) {
            let len = cell.value().len() as i32;
            let _ = cell.set_position(len);
            let _ = cell.set_mark(0);
        }
    }

    fn set_entry_error(&mut self, active: bool) {
        self.entry_error = active;
        self.paint();
    }

    fn set_entry_visible(&mut self, visible: bool) {
        if visible {
            self.widgets.entry_group.show();
        } else {
            self.widgets.entry_group.hide();
        }
        self.widgets.wind.redraw();
    }

    fn set_prompt(&mut self, text: &str) {
        self.widgets.prompt.set_label(&escape_label(text));
        self.widgets.prompt.redraw();
    }

    fn set_riddle_visible(&mut self, visible: bool) {
        if visible {
            self.widgets.riddle_group.show();
        } else {
            self.widgets.riddle_group.hide();
        }
        self.widgets.wind.redraw();
    }

    fn clear_riddle(&mut self) {
        let mut surface = self.riddle.borrow_mut();
        surface.text.clear();
        surface.render();
    }

    fn append_riddle_char(&mut self, ch: char) {
        let mut surface = self.riddle.borrow_mut();
        surface.text.push(ch);
        surface.render();
    }

    fn append_riddle_line_break(&mut self) {
        let mut surface = self.riddle.borrow_mut();
        surface.text.push('\n');
        surface.render();
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        let mut surface = self.riddle.borrow_mut();
        surface.cursor_visible = visible;
        surface.blink_on = true;
        surface.render();
    }

    fn apply_theme(&mut self, name: &str) {
        self.palette = palette(name);
        self.paint();
        #[cfg(target_os = "windows")]
        if self.widgets.wind.shown() {
            set_windows_titlebar_theme(&self.widgets.wind, self.palette.is_dark);
        }
    }

    fn apply_alignment(&mut self, alignment: TextAlignment) {
        let horizontal = match alignment {
            TextAlignment::Left => Align::Left,
            TextAlignment::Center => Align::Center,
            TextAlignment::Right => Align::Right,
        };
        self.widgets
            .riddle
            .set_align(Align::Inside | Align::Top | Align::Wrap | horizontal);
        self.widgets.riddle.redraw();
    }

    fn set_settings_trigger_visible(&mut self, visible: bool) {
        if visible {
            self.widgets.trigger.show();
        } else {
            self.widgets.trigger.hide();
        }
        self.widgets.wind.redraw();
    }

    fn set_panel_visible(&mut self, visible: bool) {
        if visible {
            self.widgets.panel.overlay.show();
        } else {
            self.widgets.panel.overlay.hide();
        }
        self.widgets.wind.redraw();
    }

    fn set_panel_fields(&mut self, fields: &PanelFields) {
        let panel = &mut self.widgets.panel;
        panel.theme.set_value(theme_index(&fields.theme) as i32);
        panel.code.set_value(&fields.code);
        panel.prompt.set_value(&fields.prompt);
        panel.riddle.set_value(&fields.riddle);
        panel.type_speed.set_value(&fields.type_speed);
        panel
            .alignment
            .set_value(alignment_index(TextAlignment::from_name(&fields.alignment)));
    }

    fn panel_fields(&self) -> PanelFields {
        let panel = &self.widgets.panel;
        PanelFields {
            theme: index_to_theme(panel.theme.value())
                .unwrap_or(DEFAULT_THEME)
                .to_string(),
            code: panel.code.value(),
            prompt: panel.prompt.value(),
            riddle: panel.riddle.value(),
            type_speed: panel.type_speed.value(),
            alignment: index_to_alignment(panel.alignment.value()).name().to_string(),
        }
    }

    fn select_panel_theme(&mut self, name: &str) {
        self.widgets.panel.theme.set_value(theme_index(name) as i32);
    }

    fn set_code_field_error(&mut self, active: bool) {
        self.code_field_error = active;
        self.paint();
    }

    fn focus_code_field(&mut self) {
        let _ = self.widgets.panel.code.take_focus();
    }

    fn confirm(&mut self, question: &str) -> bool {
        dialog::choice2_default(question, "Cancel", "Reset", "") == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_label_doubles_at_signs() {
        assert_eq!(escape_label("mail me @ noon"), "mail me @@ noon");
        assert_eq!(escape_label("@@"), "@@@@");
        assert_eq!(escape_label("<b>plain</b>"), "<b>plain</b>");
    }

    #[test]
    fn test_riddle_label_appends_cursor() {
        assert_eq!(riddle_label("a\nb", false), "a\nb");
        assert_eq!(riddle_label("@", true), format!("@@{CURSOR_GLYPH}"));
    }
}
