use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Event, EventState, FrameType, Key},
    frame::Frame,
    group::Group,
    input::Input,
    prelude::*,
    window::Window,
};

use super::settings_panel::{SettingsPanelWidgets, build_settings_panel};
use crate::app::controllers::reveal::is_reveal_chord;
use crate::app::domain::entry::CELL_COUNT;
use crate::app::domain::messages::{KeyChord, Message};

pub const WINDOW_W: i32 = 720;
pub const WINDOW_H: i32 = 520;

const CELL_W: i32 = 64;
const CELL_H: i32 = 80;
const CELL_GAP: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    /// Window background; presses that land here feed the long-press gesture.
    pub stage: Frame,
    pub trigger: Button,
    pub entry_group: Group,
    pub prompt: Frame,
    pub cells: Vec<Input>,
    pub submit: Button,
    pub riddle_group: Group,
    pub riddle: Frame,
    pub panel: SettingsPanelWidgets,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, "RiddleLock");
    wind.set_xclass("RiddleLock");

    let mut stage = Frame::new(0, 0, WINDOW_W, WINDOW_H, None);
    stage.set_frame(FrameType::FlatBox);
    stage.handle({
        let s = *sender;
        move |_, event| match event {
            Event::Push => {
                s.send(Message::PressStarted);
                true
            }
            Event::Drag | Event::Released => {
                s.send(Message::PressCancelled);
                true
            }
            _ => false,
        }
    });

    let mut entry_group = Group::new(0, 80, WINDOW_W, 320, None);

    let mut prompt = Frame::new(60, 110, WINDOW_W - 120, 40, None);
    prompt.set_label_size(24);

    let cells_x = (WINDOW_W - (CELL_COUNT as i32 * CELL_W + (CELL_COUNT as i32 - 1) * CELL_GAP)) / 2;
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for index in 0..CELL_COUNT {
        let x = cells_x + index as i32 * (CELL_W + CELL_GAP);
        let mut cell = Input::new(x, 180, CELL_W, CELL_H, None);
        cell.set_text_size(44);
        cell.set_frame(FrameType::BorderBox);
        cell.set_trigger(CallbackTrigger::Changed);
        cell.set_callback({
            let s = *sender;
            move |c| s.send(Message::CellInput(index, c.value()))
        });
        cell.handle({
            let s = *sender;
            move |_, event| match event {
                Event::KeyDown => match app::event_key() {
                    // Report before FLTK deletes, so an empty cell can step back
                    Key::BackSpace => {
                        s.send(Message::CellBackspace(index));
                        false
                    }
                    Key::Enter | Key::KPEnter => {
                        s.send(Message::CellEnter(index));
                        true
                    }
                    _ => false,
                },
                Event::Focus => {
                    s.send(Message::CellFocused(index));
                    false
                }
                _ => false,
            }
        });
        cells.push(cell);
    }

    let mut submit = Button::new((WINDOW_W - 140) / 2, 300, 140, 40, "UNLOCK");
    submit.set_callback({
        let s = *sender;
        move |_| s.send(Message::Submit)
    });

    entry_group.end();

    let mut riddle_group = Group::new(60, 60, WINDOW_W - 120, WINDOW_H - 120, None);
    let mut riddle = Frame::new(60, 60, WINDOW_W - 120, WINDOW_H - 120, None);
    riddle.set_frame(FrameType::FlatBox);
    riddle.set_label_size(22);
    riddle.set_align(Align::Inside | Align::Top | Align::Left | Align::Wrap);
    riddle_group.end();
    riddle_group.hide();

    let mut trigger = Button::new(WINDOW_W - 52, 12, 40, 40, "@menu");
    trigger.set_frame(FrameType::FlatBox);
    trigger.set_tooltip("Settings");
    trigger.set_callback({
        let s = *sender;
        move |_| s.send(Message::OpenSettings)
    });
    trigger.hide();

    let panel = build_settings_panel(WINDOW_W, WINDOW_H, sender);

    wind.end();

    // Keys nobody else consumed arrive here as shortcuts
    wind.handle({
        let s = *sender;
        move |_, event| {
            if event != Event::Shortcut {
                return false;
            }
            let state = app::event_state();
            let Some(key) = app::event_key().to_char() else {
                return false;
            };
            let chord = KeyChord {
                ctrl: state.contains(EventState::Ctrl),
                meta: state.contains(EventState::Meta),
                key,
            };
            if is_reveal_chord(&chord) {
                s.send(Message::KeyPressed(chord));
                true
            } else {
                false
            }
        }
    });

    // Closing the window ends the loop in main
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    MainWidgets {
        wind,
        stage,
        trigger,
        entry_group,
        prompt,
        cells,
        submit,
        riddle_group,
        riddle,
        panel,
    }
}
