use std::env;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::underwriting::EligibilityConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for embedding the underwriting engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub underwriting: UnderwritingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_installment_to_income = match env::var("LOAN_MAX_EMI_TO_INCOME") {
            Ok(raw) => parse_ratio(&raw)?,
            Err(_) => DEFAULT_MAX_INSTALLMENT_TO_INCOME,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            underwriting: UnderwritingConfig {
                max_installment_to_income,
            },
        })
    }
}

const DEFAULT_MAX_INSTALLMENT_TO_INCOME: Decimal = dec!(0.5);

fn parse_ratio(raw: &str) -> Result<Decimal, ConfigError> {
    let invalid = || ConfigError::InvalidInstallmentRatio {
        value: raw.to_string(),
    };
    let ratio = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
        return Err(invalid());
    }
    Ok(ratio)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Policy overrides applied on top of the default eligibility rules.
#[derive(Debug, Clone)]
pub struct UnderwritingConfig {
    pub max_installment_to_income: Decimal,
}

impl UnderwritingConfig {
    pub fn eligibility_config(&self) -> EligibilityConfig {
        EligibilityConfig::default().with_max_installment_to_income(self.max_installment_to_income)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidInstallmentRatio { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInstallmentRatio { value } => write!(
                f,
                "LOAN_MAX_EMI_TO_INCOME must be a decimal in (0, 1], got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
