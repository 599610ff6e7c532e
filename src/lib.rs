//! bangun_check - Geometric measurement validator
//!
//! Validates user-supplied measurements against four shape definitions
//! (persegi, persegi panjang, segitiga siku-siku, trapesium siku-siku) and
//! computes the keliling when valid. Two interchangeable strategies:
//! - Deterministic in-process geometry rules
//! - Gemini-backed validation, prompted with the same rule table, either
//!   directly (local API key) or through a backend-owned function

pub mod core;
pub mod models;
pub mod providers;
pub mod strategy;

pub use crate::core::{
    GeometryValidator, EPSILON, MSG_POSITIVE_INPUTS, MSG_UNKNOWN_SHAPE, SUCCESS_MARKER,
};
pub use models::{
    AppError, AppResult, ErrorCode, NumericInputs, RawInputs, RemoteConfig, RemoteMode, ShapeKind,
    StrategyKind, ValidationResult, ValidatorConfig,
};
pub use providers::{generate_prompt, response_schema, strip_code_fence, RemoteValidationClient};
pub use strategy::{select_validator, ShapeValidator};
