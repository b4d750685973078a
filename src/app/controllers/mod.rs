//! Controllers layer - the puzzle's interaction flow.
//!
//! Each controller owns its own slice of state and the timer tokens it
//! scheduled; `AppState` wires them to the view:
//! - Code pad entry and matching
//! - Failure flash and success transition
//! - Riddle typewriter
//! - Settings panel
//! - Hidden reveal gestures

pub mod code_entry;
pub mod feedback;
pub mod reveal;
pub mod settings_panel;
pub mod typewriter;
