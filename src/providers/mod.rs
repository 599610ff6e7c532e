//! Providers Module - External Validation Path
//!
//! Jalur data keluar: prompt/schema contract dan klien validasi remote
//! (backend function atau Gemini langsung).

pub mod prompt;
pub mod remote;

pub use prompt::*;
pub use remote::*;
