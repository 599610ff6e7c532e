//! Type definitions for the shape validator
//! Shared data contract between the deterministic and remote strategies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw user-typed inputs: field name → string, no numeric guarantee yet.
pub type RawInputs = BTreeMap<String, String>;

/// Parsed inputs: field name → finite, strictly positive f64.
/// BTreeMap so serialized payloads and prompts have a stable field order.
pub type NumericInputs = BTreeMap<String, f64>;

/// The four supported shapes (bangun datar). Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Square,
    Rectangle,
    RightTriangle,
    RightTrapezoid,
}

impl ShapeKind {
    /// Wire token used by the delegated backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RightTriangle => "right_triangle",
            ShapeKind::RightTrapezoid => "right_trapezoid",
        }
    }

    /// Human-readable display label (Bahasa Indonesia, as shown in the UI)
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Square => "Persegi",
            ShapeKind::Rectangle => "Persegi Panjang",
            ShapeKind::RightTriangle => "Segitiga Siku-Siku",
            ShapeKind::RightTrapezoid => "Trapesium Siku-Siku",
        }
    }
}

/// Outcome of a validation request, shared verbatim with the remote contract.
///
/// Invariant: `is_valid == false` implies `keliling == 0.0`. When valid,
/// `keliling` is the closed-form perimeter rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub explanation: String,
    pub keliling: f64,
}

impl ValidationResult {
    /// Build a valid result; the perimeter is rounded to 2 decimals here.
    pub fn valid(explanation: impl Into<String>, perimeter: f64) -> Self {
        Self {
            is_valid: true,
            explanation: explanation.into(),
            keliling: round2(perimeter),
        }
    }

    /// Build an invalid result; keliling is forced to 0.
    pub fn invalid(explanation: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            explanation: explanation.into(),
            keliling: 0.0,
        }
    }
}

/// Round to 2 decimal places (keliling display precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
