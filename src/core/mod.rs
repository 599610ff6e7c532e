//! Core Module - Deterministic Geometry Logic
//!
//! Otak aplikasi: rule table + validator. No I/O, no shared state.

pub mod rules;
pub mod validator;

pub use rules::*;
pub use validator::*;
