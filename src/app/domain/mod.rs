//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Puzzle settings and their validation rules
//! - The four-cell entry buffer
//! - Message types for the event system

pub mod entry;
pub mod messages;
pub mod settings;

pub use entry::{CELL_COUNT, EntryBuffer};
pub use messages::{KeyChord, Message, TimerEvent};
pub use settings::{PuzzleSettings, TextAlignment};
