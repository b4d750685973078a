use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, IntInput, MultilineInput},
    menu::Choice,
    prelude::*,
};

use super::theme::{THEMES, index_to_theme};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::TextAlignment;

const PANEL_X: i32 = 150;
const PANEL_Y: i32 = 30;
const PANEL_W: i32 = 420;
const PANEL_H: i32 = 460;
const LABEL_X: i32 = PANEL_X + 20;
const FIELD_X: i32 = PANEL_X + 140;
const FIELD_W: i32 = 260;

/// The settings overlay: a scrim over the whole window with the panel on top.
pub struct SettingsPanelWidgets {
    pub overlay: Group,
    pub scrim: Frame,
    pub body: Frame,
    pub labels: Vec<Frame>,
    pub close: Button,
    pub theme: Choice,
    pub code: Input,
    pub prompt: Input,
    pub riddle: MultilineInput,
    pub type_speed: IntInput,
    pub alignment: Choice,
    pub save: Button,
    pub reset: Button,
}

fn field_label(y: i32, text: &str) -> Frame {
    Frame::default()
        .with_pos(LABEL_X, y)
        .with_size(FIELD_X - LABEL_X - 10, 25)
        .with_label(text)
        .with_align(Align::Left | Align::Inside)
}

/// Build the hidden overlay. Must be called while the main window is the
/// current group, after every other widget, so it stacks on top.
pub fn build_settings_panel(width: i32, height: i32, sender: &Sender<Message>) -> SettingsPanelWidgets {
    let mut overlay = Group::new(0, 0, width, height, None);

    // Clicks that reach the scrim were outside the panel body
    let mut scrim = Frame::new(0, 0, width, height, None);
    scrim.set_frame(FrameType::FlatBox);
    scrim.handle({
        let s = *sender;
        move |_, event| match event {
            Event::Push => {
                s.send(Message::CloseSettings);
                true
            }
            _ => false,
        }
    });

    let mut body = Frame::new(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, None);
    body.set_frame(FrameType::BorderBox);
    body.handle(|_, event| event == Event::Push);

    let mut labels = Vec::new();

    let mut title = Frame::default()
        .with_pos(LABEL_X, PANEL_Y + 15)
        .with_size(200, 30)
        .with_label("Settings")
        .with_align(Align::Left | Align::Inside);
    title.set_label_size(18);
    labels.push(title);

    let mut close = Button::default()
        .with_pos(PANEL_X + PANEL_W - 45, PANEL_Y + 15)
        .with_size(30, 30)
        .with_label("\u{2715}");
    close.set_frame(FrameType::FlatBox);
    close.set_callback({
        let s = *sender;
        move |_| s.send(Message::CloseSettings)
    });

    labels.push(field_label(PANEL_Y + 65, "Theme:"));
    let mut theme = Choice::default().with_pos(FIELD_X, PANEL_Y + 65).with_size(FIELD_W, 25);
    for (_, display) in THEMES {
        theme.add_choice(display);
    }
    theme.set_value(0);
    // Live preview
    theme.set_callback({
        let s = *sender;
        move |c| {
            if let Some(name) = index_to_theme(c.value()) {
                s.send(Message::PreviewTheme(name.to_string()));
            }
        }
    });

    labels.push(field_label(PANEL_Y + 100, "Access code:"));
    let mut code = Input::default().with_pos(FIELD_X, PANEL_Y + 100).with_size(FIELD_W, 25);
    code.set_maximum_size(16);

    labels.push(field_label(PANEL_Y + 135, "Prompt:"));
    let prompt = Input::default().with_pos(FIELD_X, PANEL_Y + 135).with_size(FIELD_W, 25);

    labels.push(field_label(PANEL_Y + 170, "Riddle:"));
    let mut riddle = MultilineInput::default().with_pos(FIELD_X, PANEL_Y + 170).with_size(FIELD_W, 150);
    riddle.set_wrap(true);

    labels.push(field_label(PANEL_Y + 330, "Type speed (ms):"));
    let type_speed = IntInput::default().with_pos(FIELD_X, PANEL_Y + 330).with_size(FIELD_W, 25);

    labels.push(field_label(PANEL_Y + 365, "Alignment:"));
    let mut alignment = Choice::default().with_pos(FIELD_X, PANEL_Y + 365).with_size(FIELD_W, 25);
    for a in TextAlignment::all() {
        alignment.add_choice(a.display_name());
    }
    alignment.set_value(0);

    let mut save = Button::default()
        .with_pos(FIELD_X, PANEL_Y + PANEL_H - 50)
        .with_size(120, 32)
        .with_label("Save");
    save.set_callback({
        let s = *sender;
        move |_| s.send(Message::SaveSettings)
    });

    let mut reset = Button::default()
        .with_pos(FIELD_X + 140, PANEL_Y + PANEL_H - 50)
        .with_size(120, 32)
        .with_label("Reset Defaults");
    reset.set_callback({
        let s = *sender;
        move |_| s.send(Message::ResetSettings)
    });

    overlay.end();
    overlay.hide();

    SettingsPanelWidgets {
        overlay,
        scrim,
        body,
        labels,
        close,
        theme,
        code,
        prompt,
        riddle,
        type_speed,
        alignment,
        save,
        reset,
    }
}

/// Convert TextAlignment to dropdown index
pub fn alignment_index(alignment: TextAlignment) -> i32 {
    TextAlignment::all()
        .iter()
        .position(|a| *a == alignment)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to TextAlignment
pub fn index_to_alignment(index: i32) -> TextAlignment {
    if index < 0 {
        return TextAlignment::default();
    }
    TextAlignment::all()
        .get(index as usize)
        .copied()
        .unwrap_or_default()
}
