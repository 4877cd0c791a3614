//! Utility functions and helpers
//!
//! This module contains the clock helpers and the ID/token generator.

pub mod id;
pub mod time;

pub use id::generate_id;
pub use time::{expires_in, now};
