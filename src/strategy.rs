//! Shared validation contract and strategy selection
//!
//! Both strategies implement one trait; the caller resolves the strategy
//! once at process start from configuration, not per call.

use async_trait::async_trait;
use tracing::info;

use crate::core::GeometryValidator;
use crate::models::{AppResult, RawInputs, ShapeKind, StrategyKind, ValidationResult, ValidatorConfig};
use crate::providers::RemoteValidationClient;

/// One contract over the deterministic and the model-backed strategies.
///
/// An `Err` is always a transport/configuration fault; geometric invalidity
/// is a normal `Ok` result with `is_valid == false`.
#[async_trait]
pub trait ShapeValidator: Send + Sync {
    async fn validate(&self, shape: ShapeKind, inputs: &RawInputs) -> AppResult<ValidationResult>;
}

#[async_trait]
impl ShapeValidator for GeometryValidator {
    async fn validate(&self, shape: ShapeKind, inputs: &RawInputs) -> AppResult<ValidationResult> {
        Ok(GeometryValidator::validate(self, shape, inputs))
    }
}

#[async_trait]
impl ShapeValidator for RemoteValidationClient {
    async fn validate(&self, shape: ShapeKind, inputs: &RawInputs) -> AppResult<ValidationResult> {
        RemoteValidationClient::validate(self, shape, inputs).await
    }
}

/// Resolve the configured strategy into a validator instance
pub fn select_validator(config: &ValidatorConfig) -> AppResult<Box<dyn ShapeValidator>> {
    match config.strategy {
        StrategyKind::Local => {
            info!("📐 Using local deterministic validator");
            Ok(Box::new(GeometryValidator::new()))
        }
        StrategyKind::Remote => {
            info!("🤖 Using remote validator ({:?} mode)", config.remote.mode());
            Ok(Box::new(RemoteValidationClient::new(config.remote.clone())?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawInputs {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_local_strategy_through_trait() {
        let config = ValidatorConfig::default();
        let validator = select_validator(&config).unwrap();
        let result = validator
            .validate(
                ShapeKind::Square,
                &raw(&[("sisi1", "5"), ("sisi2", "5"), ("sisi3", "5"), ("sisi4", "5")]),
            )
            .await
            .unwrap();
        assert!(result.is_valid);
        assert_eq!(result.keliling, 20.0);
    }

    #[test]
    fn test_remote_strategy_constructs() {
        let config = ValidatorConfig {
            strategy: StrategyKind::Remote,
            ..ValidatorConfig::default()
        };
        assert!(select_validator(&config).is_ok());
    }
}
