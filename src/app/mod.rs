//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (PuzzleSettings, EntryBuffer, Messages)
//! - `controllers/` - Interaction flow (code entry, feedback, typewriter, settings panel, reveal)
//! - `services/` - Settings persistence
//! - `infrastructure/` - External integrations (FLTK timeouts, logging, error)
//! - `view.rs` - The presentation seam
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use controllers::settings_panel::PanelFields;
pub use domain::{KeyChord, Message, PuzzleSettings, TextAlignment, TimerEvent};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::timers::{FltkScheduler, Scheduler, TimerToken};
pub use services::settings_store::SettingsStore;
pub use state::AppState;
pub use view::PuzzleView;
