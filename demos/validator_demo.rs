//! Shape Validator Demo
//!
//! Runs the configured strategy over a handful of sample measurements.
//! Strategy comes from the environment: VALIDATION_STRATEGY=local|remote,
//! GEMINI_API_KEY for remote direct mode.
//!
//! Run with: cargo run --example validator_demo

use bangun_check::{select_validator, RawInputs, ShapeKind, ValidatorConfig};
use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn raw(pairs: &[(&str, &str)]) -> RawInputs {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    println!(
        r#"
    ╔══════════════════════════════════════════════════════════════╗
    ║                                                              ║
    ║   📐 BANGUN CHECK DEMO                                       ║
    ║   Validasi ukuran bangun datar + hitung keliling             ║
    ║                                                              ║
    ╚══════════════════════════════════════════════════════════════╝
    "#
    );

    let config = ValidatorConfig::from_env();
    println!("🔧 Strategy: {:?} | Remote mode: {:?}", config.strategy, config.remote.mode());
    println!();

    let validator = select_validator(&config)?;

    let cases: Vec<(&str, ShapeKind, RawInputs)> = vec![
        (
            "Persegi 5-5-5-5",
            ShapeKind::Square,
            raw(&[("sisi1", "5"), ("sisi2", "5"), ("sisi3", "5"), ("sisi4", "5")]),
        ),
        (
            "Segitiga 3-4-5",
            ShapeKind::RightTriangle,
            raw(&[("a", "3"), ("b", "4"), ("c", "5")]),
        ),
        (
            "Segitiga dengan c bukan sisi terpanjang",
            ShapeKind::RightTriangle,
            raw(&[("a", "3"), ("b", "4"), ("c", "4")]),
        ),
        (
            "Trapesium 3-7-4-5.657",
            ShapeKind::RightTrapezoid,
            raw(&[("atas", "3"), ("bawah", "7"), ("tinggi", "4"), ("miring", "5.657")]),
        ),
        (
            "Input tidak positif",
            ShapeKind::Rectangle,
            raw(&[("sisi1", "-8"), ("sisi2", "3"), ("sisi3", "8"), ("sisi4", "3")]),
        ),
    ];

    for (name, shape, inputs) in cases {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📋 {}", name);
        match validator.validate(shape, &inputs).await {
            Ok(result) => {
                let badge = if result.is_valid { "✅" } else { "❌" };
                println!("   {} valid={} keliling={:.2}", badge, result.is_valid, result.keliling);
                println!("   {}", result.explanation);
            }
            Err(e) => {
                println!("   ⚠️  Fault [{}]: {}", e.code_str(), e.message);
            }
        }
        println!();
    }

    Ok(())
}
