use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::billing::{
  BillLineItem, BillingError, BillingService, InsurancePolicy, Invoice, ItemName, PatientDetails,
  Quantity, UnitPrice, ValueObjectError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct BillLineItemDto {
  pub name: String,
  pub quantity: u32,
  pub unit_price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateInvoiceCommand {
  pub patient_name: String,
  pub patient_id: String,
  pub doctor: String,
  pub line_items: Vec<BillLineItemDto>,
  /// Percentage mode, fraction in [0, 1]. At most one mode may be set.
  pub insurance_discount_rate: Option<Decimal>,
  /// Fixed-amount mode.
  pub insurance_fixed_discount: Option<Decimal>,
}

pub struct GenerateInvoiceUseCase {
  billing_service: Arc<BillingService>,
}

impl GenerateInvoiceUseCase {
  pub fn new(billing_service: Arc<BillingService>) -> Self {
    Self { billing_service }
  }

  /// Validates the raw request into domain values and computes the invoice.
  /// The returned invoice is the caller's to persist or export.
  pub fn execute(&self, command: GenerateInvoiceCommand) -> Result<Invoice, BillingError> {
    let policy = match (command.insurance_discount_rate, command.insurance_fixed_discount) {
      // No policy at all means zero discount, not an error
      (None, None) => None,
      (rate, fixed) => Some(InsurancePolicy::from_parts(rate, fixed)?),
    };

    let line_items: Vec<_> = command
      .line_items
      .into_iter()
      .enumerate()
      .map(|(i, item)| {
        let raw_name = item.name.clone();
        let build = || -> Result<BillLineItem, ValueObjectError> {
          let name = ItemName::new(item.name)?;
          let quantity = Quantity::new(item.quantity)?;
          let unit_price = UnitPrice::new(item.unit_price)?;
          Ok(BillLineItem::new(name, quantity, unit_price))
        };
        // Failures name the offending item so a multi-line bill is fixable
        build().map_err(|source| BillingError::InvalidLineItem {
          index: i + 1,
          name: raw_name,
          source,
        })
      })
      .collect::<Result<Vec<_>, BillingError>>()?;

    let patient = PatientDetails::new(command.patient_name, command.patient_id, command.doctor);

    let invoice = self
      .billing_service
      .generate_invoice(patient, line_items, policy.as_ref())?;

    tracing::info!(
      invoice_id = %invoice.id,
      total = %invoice.total_amount,
      "invoice generated"
    );
    Ok(invoice)
  }
}
