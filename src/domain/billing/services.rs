use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::entities::{BillLineItem, Invoice, PatientDetails};
use super::errors::BillingError;
use super::value_objects::{InsurancePolicy, TaxRate};

/// Billing configuration. Tax and discount rules are deliberately simple
/// percentage rules, not a rules engine; the rate is configurable pending
/// real insurance requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingConfig {
  pub tax_rate: TaxRate,
}

impl Default for BillingConfig {
  fn default() -> Self {
    Self {
      // 5% clinic tax
      tax_rate: TaxRate::new(dec!(0.05)).expect("default tax rate is valid"),
    }
  }
}

/// Pure invoice calculator: (line items, policy) -> invoice snapshot.
///
/// Holds no mutable state, so a single instance is safely shared across
/// callers. Persistence of the result is the caller's responsibility.
pub struct BillingService {
  config: BillingConfig,
}

impl BillingService {
  pub fn new(config: BillingConfig) -> Self {
    Self { config }
  }

  pub fn tax_rate(&self) -> TaxRate {
    self.config.tax_rate
  }

  /// Compute a finalized invoice: subtotal -> clamped insurance discount ->
  /// tax on the post-discount base -> total. All aggregates are rounded
  /// half-up to 2 decimal places; line totals stay exact.
  ///
  /// A missing policy means zero discount and is not an error.
  pub fn generate_invoice(
    &self,
    patient: PatientDetails,
    line_items: Vec<BillLineItem>,
    policy: Option<&InsurancePolicy>,
  ) -> Result<Invoice, BillingError> {
    if line_items.is_empty() {
      return Err(BillingError::NoLineItems);
    }

    let subtotal = round_amount(line_items.iter().map(BillLineItem::line_total).sum());

    let raw_discount = policy
      .map(|p| p.raw_discount(subtotal))
      .unwrap_or(Decimal::ZERO);
    let discount = round_amount(raw_discount.clamp(Decimal::ZERO, subtotal));

    let taxable_base = subtotal - discount;
    let tax_amount = round_amount(taxable_base * self.config.tax_rate.value());
    let total_amount = subtotal - discount + tax_amount;

    tracing::debug!(
      %subtotal,
      %discount,
      %tax_amount,
      %total_amount,
      "invoice computed"
    );

    Ok(Invoice::new(
      patient,
      line_items,
      subtotal,
      discount,
      tax_amount,
      total_amount,
    ))
  }
}

/// Round half-up to the fixed 2-decimal currency precision.
fn round_amount(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::billing::value_objects::{ItemName, PaymentStatus, Quantity, UnitPrice};

  fn patient() -> PatientDetails {
    PatientDetails::new("Jane Roe".to_string(), "P-001".to_string(), "Dr. Smith".to_string())
  }

  fn line(name: &str, qty: u32, price: Decimal) -> BillLineItem {
    BillLineItem::new(
      ItemName::new(name.to_string()).unwrap(),
      Quantity::new(qty).unwrap(),
      UnitPrice::new(price).unwrap(),
    )
  }

  fn sample_lines() -> Vec<BillLineItem> {
    vec![
      line("Paracetamol", 2, dec!(1.50)),
      line("Amoxicillin", 1, dec!(0.80)),
    ]
  }

  fn service() -> BillingService {
    BillingService::new(BillingConfig::default())
  }

  #[test]
  fn test_invoice_without_policy() {
    // Scenario: no insurance, 5% tax on the full subtotal
    let invoice = service()
      .generate_invoice(patient(), sample_lines(), None)
      .unwrap();

    assert_eq!(invoice.subtotal, dec!(3.80));
    assert_eq!(invoice.discount, dec!(0.00));
    assert_eq!(invoice.tax_amount, dec!(0.19));
    assert_eq!(invoice.total_amount, dec!(3.99));
    assert_eq!(invoice.status, PaymentStatus::Pending);
  }

  #[test]
  fn test_invoice_with_percentage_discount() {
    // 10% insurance: tax applies to 3.42, 0.171 rounds to 0.17
    let policy = InsurancePolicy::percentage(dec!(0.10)).unwrap();
    let invoice = service()
      .generate_invoice(patient(), sample_lines(), Some(&policy))
      .unwrap();

    assert_eq!(invoice.subtotal, dec!(3.80));
    assert_eq!(invoice.discount, dec!(0.38));
    assert_eq!(invoice.tax_amount, dec!(0.17));
    assert_eq!(invoice.total_amount, dec!(3.59));
  }

  #[test]
  fn test_fixed_discount_clamped_to_subtotal() {
    // A 10.00 fixed discount on a 3.80 bill clamps, never a negative total
    let policy = InsurancePolicy::fixed_amount(dec!(10.00)).unwrap();
    let invoice = service()
      .generate_invoice(patient(), sample_lines(), Some(&policy))
      .unwrap();

    assert_eq!(invoice.subtotal, dec!(3.80));
    assert_eq!(invoice.discount, dec!(3.80));
    assert_eq!(invoice.tax_amount, dec!(0.00));
    assert_eq!(invoice.total_amount, dec!(0.00));
  }

  #[test]
  fn test_empty_bill_is_rejected() {
    let err = service()
      .generate_invoice(patient(), Vec::new(), None)
      .unwrap_err();
    assert_eq!(err, BillingError::NoLineItems);
  }

  #[test]
  fn test_zero_price_lines_contribute_nothing() {
    let lines = vec![line("Consultation", 1, dec!(0)), line("Bandage", 4, dec!(0.25))];
    let invoice = service().generate_invoice(patient(), lines, None).unwrap();

    assert_eq!(invoice.subtotal, dec!(1.00));
    assert_eq!(invoice.total_amount, dec!(1.05));
  }

  #[test]
  fn test_tax_rounds_half_up() {
    // subtotal 2.50 at 5% -> 0.125 -> 0.13
    let lines = vec![line("Syrup", 1, dec!(2.50))];
    let invoice = service().generate_invoice(patient(), lines, None).unwrap();

    assert_eq!(invoice.tax_amount, dec!(0.13));
    assert_eq!(invoice.total_amount, dec!(2.63));
  }

  #[test]
  fn test_computation_is_deterministic() {
    let policy = InsurancePolicy::percentage(dec!(0.10)).unwrap();
    let a = service()
      .generate_invoice(patient(), sample_lines(), Some(&policy))
      .unwrap();
    let b = service()
      .generate_invoice(patient(), sample_lines(), Some(&policy))
      .unwrap();

    // Identical monetary fields; only identity and timestamp differ
    assert_eq!(a.subtotal, b.subtotal);
    assert_eq!(a.discount, b.discount);
    assert_eq!(a.tax_amount, b.tax_amount);
    assert_eq!(a.total_amount, b.total_amount);
    assert_eq!(a.line_items, b.line_items);
  }

  #[test]
  fn test_custom_tax_rate() {
    let config = BillingConfig {
      tax_rate: TaxRate::new(dec!(0.25)).unwrap(),
    };
    let invoice = BillingService::new(config)
      .generate_invoice(patient(), sample_lines(), None)
      .unwrap();

    assert_eq!(invoice.tax_amount, dec!(0.95));
    assert_eq!(invoice.total_amount, dec!(4.75));
  }
}
