use super::value_objects::{PaymentStatus, ValueObjectError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invalid line item {index} ('{name}'): {source}")]
  InvalidLineItem {
    /// 1-based position of the offending item in the submitted bill.
    index: usize,
    name: String,
    source: ValueObjectError,
  },

  #[error("No line items provided")]
  NoLineItems,

  #[error("Invalid status transition: {from} -> {to}")]
  InvalidStatusTransition {
    from: PaymentStatus,
    to: PaymentStatus,
  },
}
