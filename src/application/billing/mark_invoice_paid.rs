use crate::domain::billing::{BillingError, Invoice};

/// Settles a pending invoice. PENDING -> PAID is the only legal transition
/// and it is one-way; a refund or void is a distinct invoice, not a
/// transition back.
#[derive(Debug, Default)]
pub struct MarkInvoicePaidUseCase;

impl MarkInvoicePaidUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, mut invoice: Invoice) -> Result<Invoice, BillingError> {
    invoice.mark_paid()?;
    tracing::info!(invoice_id = %invoice.id, "invoice marked paid");
    Ok(invoice)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::billing::{BillingConfig, BillingService, PaymentStatus};
  use crate::domain::billing::{BillLineItem, ItemName, PatientDetails, Quantity, UnitPrice};
  use rust_decimal_macros::dec;

  fn pending_invoice() -> Invoice {
    let line = BillLineItem::new(
      ItemName::new("Paracetamol".to_string()).unwrap(),
      Quantity::new(2).unwrap(),
      UnitPrice::new(dec!(1.50)).unwrap(),
    );
    BillingService::new(BillingConfig::default())
      .generate_invoice(
        PatientDetails::new("Jane Roe".to_string(), "P-001".to_string(), "Dr. Smith".to_string()),
        vec![line],
        None,
      )
      .unwrap()
  }

  #[test]
  fn test_marks_pending_invoice_paid() {
    let paid = MarkInvoicePaidUseCase::new().execute(pending_invoice()).unwrap();
    assert_eq!(paid.status, PaymentStatus::Paid);
  }

  #[test]
  fn test_second_payment_fails() {
    let use_case = MarkInvoicePaidUseCase::new();
    let paid = use_case.execute(pending_invoice()).unwrap();

    let err = use_case.execute(paid).unwrap_err();
    assert_eq!(
      err,
      BillingError::InvalidStatusTransition {
        from: PaymentStatus::Paid,
        to: PaymentStatus::Paid,
      }
    );
  }
}
