use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid item name: {0}")]
  InvalidItemName(String),
  #[error("Invalid quantity: {0}")]
  InvalidQuantity(String),
  #[error("Invalid unit price: {0}")]
  InvalidUnitPrice(String),
  #[error("Invalid tax rate: {0}")]
  InvalidTaxRate(String),
  #[error("Invalid insurance policy: {0}")]
  InvalidInsurancePolicy(String),
  #[error("Invalid payment status: {0}")]
  InvalidPaymentStatus(String),
}

// Item Name - billable service or medicine name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName(String);

impl ItemName {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidItemName(
        "Item name cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidItemName(
        "Item name cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for ItemName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Quantity - whole units billed per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
  pub fn new(value: u32) -> Result<Self, ValueObjectError> {
    if value == 0 {
      return Err(ValueObjectError::InvalidQuantity(
        "Quantity must be at least 1".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> u32 {
    self.0
  }

  pub fn as_decimal(&self) -> Decimal {
    Decimal::from(self.0)
  }
}

// Unit Price - non-negative monetary amount per unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value.is_sign_negative() {
      return Err(ValueObjectError::InvalidUnitPrice(
        "Unit price cannot be negative".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

impl fmt::Display for UnitPrice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.2}", self.0)
  }
}

// Tax Rate - fraction of the post-discount base, e.g. 0.05 for 5%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate must be between 0 and 1".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Insurance Policy - per-patient discount rule, exactly one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsurancePolicy {
  /// Percentage of the subtotal, as a fraction in [0, 1].
  Percentage(Decimal),
  /// Flat amount deducted from the subtotal.
  FixedAmount(Decimal),
}

impl InsurancePolicy {
  pub fn percentage(rate: Decimal) -> Result<Self, ValueObjectError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
      return Err(ValueObjectError::InvalidInsurancePolicy(
        "Discount rate must be between 0 and 1".to_string(),
      ));
    }
    Ok(Self::Percentage(rate))
  }

  pub fn fixed_amount(amount: Decimal) -> Result<Self, ValueObjectError> {
    if amount.is_sign_negative() {
      return Err(ValueObjectError::InvalidInsurancePolicy(
        "Fixed discount cannot be negative".to_string(),
      ));
    }
    Ok(Self::FixedAmount(amount))
  }

  /// Build a policy from the two optional raw fields a caller submits.
  /// Exactly one mode must be present.
  pub fn from_parts(
    discount_rate: Option<Decimal>,
    fixed_discount: Option<Decimal>,
  ) -> Result<Self, ValueObjectError> {
    match (discount_rate, fixed_discount) {
      (Some(_), Some(_)) => Err(ValueObjectError::InvalidInsurancePolicy(
        "Ambiguous discount mode: both rate and fixed amount set".to_string(),
      )),
      (None, None) => Err(ValueObjectError::InvalidInsurancePolicy(
        "Policy must set either a discount rate or a fixed amount".to_string(),
      )),
      (Some(rate), None) => Self::percentage(rate),
      (None, Some(amount)) => Self::fixed_amount(amount),
    }
  }

  /// Discount before clamping to the [0, subtotal] interval.
  pub fn raw_discount(&self, subtotal: Decimal) -> Decimal {
    match self {
      Self::Percentage(rate) => subtotal * rate,
      Self::FixedAmount(amount) => *amount,
    }
  }
}

// Payment Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Pending,
  Paid,
}

impl PaymentStatus {
  pub fn can_transition_to(&self, new_status: PaymentStatus) -> bool {
    // Pending is initial, Paid is terminal; the only edge is Pending -> Paid.
    matches!((self, new_status), (PaymentStatus::Pending, PaymentStatus::Paid))
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentStatus::Pending => "pending",
      PaymentStatus::Paid => "paid",
    }
  }
}

impl FromStr for PaymentStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "pending" => Ok(PaymentStatus::Pending),
      "paid" => Ok(PaymentStatus::Paid),
      _ => Err(ValueObjectError::InvalidPaymentStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
