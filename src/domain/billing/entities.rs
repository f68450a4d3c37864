use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::BillingError;
use super::value_objects::{ItemName, PaymentStatus, Quantity, UnitPrice};

// Patient Details - captured on the bill, opaque to the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
  pub name: String,
  pub patient_id: String,
  pub doctor: String,
}

impl PatientDetails {
  pub fn new(name: String, patient_id: String, doctor: String) -> Self {
    Self {
      name,
      patient_id,
      doctor,
    }
  }
}

// Bill Line Item - one billable service or medicine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLineItem {
  pub name: ItemName,
  pub quantity: Quantity,
  pub unit_price: UnitPrice,
}

impl BillLineItem {
  pub fn new(name: ItemName, quantity: Quantity, unit_price: UnitPrice) -> Self {
    Self {
      name,
      quantity,
      unit_price,
    }
  }

  /// Exact line total; rounding happens once at the invoice aggregates.
  pub fn line_total(&self) -> Decimal {
    self.quantity.as_decimal() * self.unit_price.value()
  }
}

// Invoice - computed billing snapshot
//
// Line items copy name/price at add time; later inventory changes never
// retroactively alter an issued invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub patient: PatientDetails,
  pub line_items: Vec<BillLineItem>,
  pub subtotal: Decimal,
  pub discount: Decimal,
  pub tax_amount: Decimal,
  pub total_amount: Decimal,
  pub status: PaymentStatus,
  pub created_at: DateTime<Utc>,
}

impl Invoice {
  pub(crate) fn new(
    patient: PatientDetails,
    line_items: Vec<BillLineItem>,
    subtotal: Decimal,
    discount: Decimal,
    tax_amount: Decimal,
    total_amount: Decimal,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      patient,
      line_items,
      subtotal,
      discount,
      tax_amount,
      total_amount,
      status: PaymentStatus::Pending,
      created_at: Utc::now(),
    }
  }

  /// The one legal status transition. A second call fails: no double-payment.
  pub fn mark_paid(&mut self) -> Result<(), BillingError> {
    if !self.status.can_transition_to(PaymentStatus::Paid) {
      return Err(BillingError::InvalidStatusTransition {
        from: self.status,
        to: PaymentStatus::Paid,
      });
    }
    self.status = PaymentStatus::Paid;
    Ok(())
  }

  pub fn is_paid(&self) -> bool {
    self.status == PaymentStatus::Paid
  }
}
