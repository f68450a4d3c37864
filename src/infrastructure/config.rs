use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::domain::billing::{BillingConfig, TaxRate, ValueObjectError};

fn default_tax_rate() -> Decimal {
  // 5% clinic tax, matching BillingConfig::default()
  Decimal::new(5, 2)
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub billing: BillingSettings,
}

/// Billing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BillingSettings {
  /// Tax rate as a fraction of the post-discount base, e.g. 0.05 for 5%.
  #[serde(default = "default_tax_rate")]
  pub tax_rate: Decimal,
}

impl Default for BillingSettings {
  fn default() -> Self {
    Self {
      tax_rate: default_tax_rate(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml (optional; built-in defaults apply without it)
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with MEDIBILL_ prefix
  ///
  /// Environment variables use the MEDIBILL_ prefix and double underscores
  /// as the section separator:
  /// - `MEDIBILL_BILLING__TAX_RATE=0.05`
  pub fn load() -> Result<Self, ConfigError> {
    // Pick up a .env file the same way an embedding binary would
    dotenvy::dotenv().ok();

    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("MEDIBILL")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }

  /// Validate the raw settings into the domain billing configuration.
  pub fn billing_config(&self) -> Result<BillingConfig, ValueObjectError> {
    Ok(BillingConfig {
      tax_rate: TaxRate::new(self.billing.tax_rate)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [billing]
            tax_rate = 0.07
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");
    assert_eq!(config.billing.tax_rate, dec!(0.07));
  }

  #[test]
  fn test_tax_rate_defaults_to_five_percent() {
    let config: Config = toml::from_str("").expect("Failed to parse config");
    assert_eq!(config.billing.tax_rate, dec!(0.05));

    let billing = config.billing_config().unwrap();
    assert_eq!(billing.tax_rate.value(), dec!(0.05));
  }

  #[test]
  fn test_out_of_range_tax_rate_is_rejected() {
    let config = Config {
      billing: BillingSettings {
        tax_rate: dec!(1.5),
      },
    };
    assert!(config.billing_config().is_err());
  }
}
