pub mod fltk_view;
pub mod main_window;
pub mod settings_panel;
pub mod theme;
