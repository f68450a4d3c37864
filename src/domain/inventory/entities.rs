use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Medicine - one stockable pharmacy item
//
// Owned exclusively by the ledger; billing copies name and price at
// bill-time instead of referencing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
  pub id: Uuid,
  pub name: String,
  pub unit_price: Decimal,
  pub stock_quantity: u32,
}

impl Medicine {
  pub(crate) fn new(name: String, unit_price: Decimal, stock_quantity: u32) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      unit_price,
      stock_quantity,
    }
  }

  pub fn is_low_stock(&self, threshold: u32) -> bool {
    self.stock_quantity < threshold
  }
}
