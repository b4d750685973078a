use fltk::app;

use riddle_lock::app::infrastructure::logging::init_tracing;
use riddle_lock::app::{AppState, FltkScheduler, Message, SettingsStore};
use riddle_lock::ui::fltk_view::FltkView;
use riddle_lock::ui::main_window::build_main_window;

fn main() {
    init_tracing();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&sender);
    let mut view = FltkView::new(widgets);
    view.show();

    let scheduler = FltkScheduler::new(sender);
    let mut state = AppState::new(view, scheduler, SettingsStore::at_default_location());
    state.init();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if matches!(msg, Message::Quit) {
                tracing::debug!(pending_timers = state.scheduler().pending(), "Shutting down");
                app.quit();
                break;
            }
            state.handle(msg);
        }
    }
}
