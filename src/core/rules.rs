//! Shape rule table
//!
//! Each shape is a data-driven entry: required fields, validity predicate,
//! perimeter formula, and the prose rule line rendered into the Gemini
//! prompt. Both strategies read the same table, so the deterministic check
//! and the prompt text cannot drift apart.

use crate::models::{NumericInputs, ShapeKind};

/// Fixed tolerance for equality checks. Absolute, not magnitude-scaled.
pub const EPSILON: f64 = 0.01;

/// Epsilon-equality: |a - b| < 0.01
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Outcome of a shape-specific validity check
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Valid,
    Invalid(String),
}

/// One per-shape strategy entry
pub struct ShapeRule {
    pub kind: ShapeKind,
    /// Display label, duplicated here so rule rendering needs no extra lookup
    pub label: &'static str,
    /// Ordered list of required numeric fields
    pub fields: &'static [&'static str],
    /// Validity predicate; inputs are already parsed and positive
    pub check: fn(&NumericInputs) -> RuleOutcome,
    /// Closed-form perimeter, only meaningful when check passed
    pub perimeter: fn(&NumericInputs) -> f64,
    /// Prose restatement for the model prompt (Bahasa Indonesia)
    pub prompt_rule: &'static str,
}

/// Field accessor. The parse gate guarantees presence; NaN on a miss fails
/// every epsilon comparison rather than panicking.
fn field(inputs: &NumericInputs, name: &str) -> f64 {
    inputs.get(name).copied().unwrap_or(f64::NAN)
}

fn check_square(inputs: &NumericInputs) -> RuleOutcome {
    let s1 = field(inputs, "sisi1");
    let s2 = field(inputs, "sisi2");
    let s3 = field(inputs, "sisi3");
    let s4 = field(inputs, "sisi4");
    if approx_eq(s1, s2) && approx_eq(s2, s3) && approx_eq(s3, s4) {
        RuleOutcome::Valid
    } else {
        RuleOutcome::Invalid(format!(
            "sides are not all equal: sisi1={}, sisi2={}, sisi3={}, sisi4={}",
            s1, s2, s3, s4
        ))
    }
}

fn perimeter_square(inputs: &NumericInputs) -> f64 {
    4.0 * field(inputs, "sisi1")
}

fn check_rectangle(inputs: &NumericInputs) -> RuleOutcome {
    let s1 = field(inputs, "sisi1");
    let s2 = field(inputs, "sisi2");
    let s3 = field(inputs, "sisi3");
    let s4 = field(inputs, "sisi4");
    if approx_eq(s1, s3) && approx_eq(s2, s4) {
        RuleOutcome::Valid
    } else {
        RuleOutcome::Invalid(format!(
            "opposite sides are not equal: sisi1={} vs sisi3={}, sisi2={} vs sisi4={}",
            s1, s3, s2, s4
        ))
    }
}

fn perimeter_rectangle(inputs: &NumericInputs) -> f64 {
    2.0 * (field(inputs, "sisi1") + field(inputs, "sisi2"))
}

fn check_right_triangle(inputs: &NumericInputs) -> RuleOutcome {
    let a = field(inputs, "a");
    let b = field(inputs, "b");
    let c = field(inputs, "c");

    // Exact comparison, NOT epsilon. The ordering gate is intentionally
    // stricter than the Pythagorean check below. Strictly greater: a tie
    // (e.g. c equal to one of the legs) already disqualifies the hypotenuse.
    if c <= a.max(b) {
        return RuleOutcome::Invalid(format!(
            "hypotenuse must be the longest side (a={}, b={}, c={})",
            a, b, c
        ));
    }

    if approx_eq(a * a + b * b, c * c) {
        RuleOutcome::Valid
    } else {
        RuleOutcome::Invalid(format!(
            "not a right triangle: a²={:.2}, b²={:.2}, c²={:.2} (a²+b²={:.2} does not match c²)",
            a * a,
            b * b,
            c * c,
            a * a + b * b,
        ))
    }
}

fn perimeter_right_triangle(inputs: &NumericInputs) -> f64 {
    field(inputs, "a") + field(inputs, "b") + field(inputs, "c")
}

fn check_right_trapezoid(inputs: &NumericInputs) -> RuleOutcome {
    let atas = field(inputs, "atas");
    let bawah = field(inputs, "bawah");
    let tinggi = field(inputs, "tinggi");
    let miring = field(inputs, "miring");

    // Strict inequality: equal parallel sides is not a trapezoid
    if bawah <= atas {
        return RuleOutcome::Invalid(format!(
            "bawah must exceed atas (bawah={}, atas={})",
            bawah, atas
        ));
    }

    let leg_short = bawah - atas;
    if approx_eq(tinggi * tinggi + leg_short * leg_short, miring * miring) {
        RuleOutcome::Valid
    } else {
        let required_miring = (tinggi * tinggi + leg_short * leg_short).sqrt();
        RuleOutcome::Invalid(format!(
            "not a right trapezoid: required miring ≈ {:.3}, got {}",
            required_miring, miring
        ))
    }
}

fn perimeter_right_trapezoid(inputs: &NumericInputs) -> f64 {
    field(inputs, "atas") + field(inputs, "bawah") + field(inputs, "tinggi") + field(inputs, "miring")
}

/// The rule table. Prompt lines are the exact sentences the original prompt
/// used, so the model is instructed with the same rules the local path runs.
static RULES: [ShapeRule; 4] = [
    ShapeRule {
        kind: ShapeKind::Square,
        label: "Persegi",
        fields: &["sisi1", "sisi2", "sisi3", "sisi4"],
        check: check_square,
        perimeter: perimeter_square,
        prompt_rule: "Untuk Persegi, verifikasi bahwa semua empat sisi (sisi1, sisi2, sisi3, sisi4) memiliki panjang yang sama dan positif. Jika valid, kelilingnya adalah 4 * sisi1.",
    },
    ShapeRule {
        kind: ShapeKind::Rectangle,
        label: "Persegi Panjang",
        fields: &["sisi1", "sisi2", "sisi3", "sisi4"],
        check: check_rectangle,
        perimeter: perimeter_rectangle,
        prompt_rule: "Untuk Persegi Panjang, verifikasi bahwa sisi yang berhadapan memiliki panjang yang sama (sisi1 sama dengan sisi3, dan sisi2 sama dengan sisi4) dan semua sisi positif. Jika valid, kelilingnya adalah 2 * (sisi1 + sisi2).",
    },
    ShapeRule {
        kind: ShapeKind::RightTriangle,
        label: "Segitiga Siku-Siku",
        fields: &["a", "b", "c"],
        check: check_right_triangle,
        perimeter: perimeter_right_triangle,
        prompt_rule: "Untuk Segitiga Siku-Siku, verifikasi teorema Pythagoras (a² + b² = c², dimana c adalah sisi terpanjang/miring). Jika valid, kelilingnya adalah a + b + c.",
    },
    ShapeRule {
        kind: ShapeKind::RightTrapezoid,
        label: "Trapesium Siku-Siku",
        fields: &["atas", "bawah", "tinggi", "miring"],
        check: check_right_trapezoid,
        perimeter: perimeter_right_trapezoid,
        prompt_rule: "Untuk Trapesium Siku-Siku, verifikasi hubungan pythagoras antara tinggi, selisih sisi sejajar, dan sisi miring (tinggi² + (bawah - atas)² = miring²). Pastikan juga sisi bawah lebih panjang dari sisi atas dan semua ukuran positif. Jika valid, kelilingnya adalah atas + bawah + tinggi + miring.",
    },
];

/// Look up the rule entry for a shape
pub fn rule_for(kind: ShapeKind) -> Option<&'static ShapeRule> {
    RULES.iter().find(|rule| rule.kind == kind)
}

/// All rule entries, in declaration order (used for prompt rendering)
pub fn all_rules() -> &'static [ShapeRule] {
    &RULES
}
