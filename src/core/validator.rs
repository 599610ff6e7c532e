//! Deterministic geometry validator
//!
//! Pure, synchronous, side-effect-free. Never returns an error: every
//! failure path is a normal `ValidationResult` with `is_valid == false`.

use tracing::debug;

use crate::core::rules::{rule_for, RuleOutcome};
use crate::models::{round2, NumericInputs, RawInputs, ShapeKind, ValidationResult};

/// Literal marker the remote contract requires in every success explanation
pub const SUCCESS_MARKER: &str = "Mantap, Anda dapat proyek!";

/// Positivity-gate failure message (same for every shape and field)
pub const MSG_POSITIVE_INPUTS: &str = "all inputs must be positive numbers";

/// Fallback for a shape with no rule entry
pub const MSG_UNKNOWN_SHAPE: &str = "shape not recognized";

/// Local deterministic validation strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct GeometryValidator;

impl GeometryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw measurements against the claimed shape.
    ///
    /// Step 1: parse every required field and gate on positivity.
    /// Step 2: run the shape rule from the table.
    /// Step 3: assemble the result (perimeter rounded to 2 decimals).
    pub fn validate(&self, shape: ShapeKind, inputs: &RawInputs) -> ValidationResult {
        let Some(rule) = rule_for(shape) else {
            return ValidationResult::invalid(MSG_UNKNOWN_SHAPE);
        };

        let Some(numeric) = parse_inputs(rule.fields, inputs) else {
            debug!("⛔ {} rejected at the positivity gate", rule.label);
            return ValidationResult::invalid(MSG_POSITIVE_INPUTS);
        };

        match (rule.check)(&numeric) {
            RuleOutcome::Valid => {
                let keliling = round2((rule.perimeter)(&numeric));
                ValidationResult::valid(
                    format!(
                        "{} {} valid dengan keliling {:.2}.",
                        SUCCESS_MARKER, rule.label, keliling
                    ),
                    keliling,
                )
            }
            RuleOutcome::Invalid(reason) => {
                debug!("⛔ {} failed rule check: {}", rule.label, reason);
                ValidationResult::invalid(reason)
            }
        }
    }
}

/// Parse every required field to a finite, strictly positive f64.
/// Missing fields, parse failures, non-finite values and values ≤ 0 all
/// invalidate the whole request; no shape rule runs after a gate failure.
pub(crate) fn parse_inputs(fields: &[&str], raw: &RawInputs) -> Option<NumericInputs> {
    let mut numeric = NumericInputs::new();
    for &name in fields {
        let value: f64 = raw.get(name)?.trim().parse().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        numeric.insert(name.to_string(), value);
    }
    Some(numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawInputs {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_square_valid() {
        let validator = GeometryValidator::new();
        let result = validator.validate(
            ShapeKind::Square,
            &raw(&[("sisi1", "5"), ("sisi2", "5"), ("sisi3", "5"), ("sisi4", "5")]),
        );
        assert!(result.is_valid);
        assert_eq!(result.keliling, 20.0);
        assert!(result.explanation.contains(SUCCESS_MARKER));
    }

    #[test]
    fn test_positivity_gate_non_numeric() {
        let validator = GeometryValidator::new();
        let result = validator.validate(
            ShapeKind::Square,
            &raw(&[("sisi1", "5"), ("sisi2", "lima"), ("sisi3", "5"), ("sisi4", "5")]),
        );
        assert!(!result.is_valid);
        assert_eq!(result.explanation, MSG_POSITIVE_INPUTS);
        assert_eq!(result.keliling, 0.0);
    }

    #[test]
    fn test_positivity_gate_zero_and_negative() {
        let validator = GeometryValidator::new();
        for bad in ["0", "-3"] {
            let result = validator.validate(
                ShapeKind::RightTriangle,
                &raw(&[("a", bad), ("b", "4"), ("c", "5")]),
            );
            assert!(!result.is_valid, "value {} must fail the gate", bad);
            assert_eq!(result.explanation, MSG_POSITIVE_INPUTS);
            assert_eq!(result.keliling, 0.0);
        }
    }

    #[test]
    fn test_positivity_gate_non_finite() {
        let validator = GeometryValidator::new();
        let result = validator.validate(
            ShapeKind::RightTriangle,
            &raw(&[("a", "inf"), ("b", "4"), ("c", "5")]),
        );
        assert!(!result.is_valid);
        assert_eq!(result.explanation, MSG_POSITIVE_INPUTS);
    }

    #[test]
    fn test_missing_field_fails_gate() {
        let validator = GeometryValidator::new();
        let result = validator.validate(ShapeKind::RightTriangle, &raw(&[("a", "3"), ("b", "4")]));
        assert!(!result.is_valid);
        assert_eq!(result.explanation, MSG_POSITIVE_INPUTS);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let validator = GeometryValidator::new();
        let result = validator.validate(
            ShapeKind::RightTriangle,
            &raw(&[("a", " 3 "), ("b", "4"), ("c", "5")]),
        );
        assert!(result.is_valid);
        assert_eq!(result.keliling, 12.0);
    }

    #[test]
    fn test_idempotence() {
        let validator = GeometryValidator::new();
        let inputs = raw(&[("atas", "3"), ("bawah", "7"), ("tinggi", "4"), ("miring", "5.657")]);
        let first = validator.validate(ShapeKind::RightTrapezoid, &inputs);
        let second = validator.validate(ShapeKind::RightTrapezoid, &inputs);
        assert_eq!(first, second, "pure function: identical inputs, identical results");
    }

    #[test]
    fn test_trapezoid_perimeter_rounding() {
        let validator = GeometryValidator::new();
        let result = validator.validate(
            ShapeKind::RightTrapezoid,
            &raw(&[("atas", "3"), ("bawah", "7"), ("tinggi", "4"), ("miring", "5.657")]),
        );
        assert!(result.is_valid, "{}", result.explanation);
        assert_eq!(result.keliling, 19.66);
    }
}
