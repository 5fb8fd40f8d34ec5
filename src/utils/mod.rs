//! Utility functions
//!
//! Provides logging and input validation helpers.

pub mod logging;
pub mod validation;
