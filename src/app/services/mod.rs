//! Services layer - persistence.
//!
//! - Settings store (load, merge with defaults, save, clear)

pub mod settings_store;
