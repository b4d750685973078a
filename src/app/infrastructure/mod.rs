//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK timeouts behind the scheduler seam
//! - Logging setup
//! - Error types

pub mod error;
pub mod logging;
pub mod timers;
