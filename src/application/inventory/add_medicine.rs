use rust_decimal::Decimal;
use serde::Deserialize;

use super::search_medicines::MedicineDto;
use crate::domain::inventory::{InventoryError, InventoryLedger};

#[derive(Debug, Clone, Deserialize)]
pub struct AddMedicineCommand {
  pub name: String,
  pub unit_price: Decimal,
  pub stock_quantity: u32,
}

#[derive(Debug, Default)]
pub struct AddMedicineUseCase;

impl AddMedicineUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    ledger: &mut InventoryLedger,
    command: AddMedicineCommand,
  ) -> Result<MedicineDto, InventoryError> {
    let medicine = ledger.add(command.name, command.unit_price, command.stock_quantity)?;
    Ok(MedicineDto::from(medicine))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_add_medicine() {
    let mut ledger = InventoryLedger::new();
    let dto = AddMedicineUseCase::new()
      .execute(
        &mut ledger,
        AddMedicineCommand {
          name: "Ibuprofen 200mg".to_string(),
          unit_price: dec!(0.60),
          stock_quantity: 120,
        },
      )
      .unwrap();

    assert_eq!(dto.name, "Ibuprofen 200mg");
    assert_eq!(ledger.get(dto.id).unwrap().stock_quantity, 120);
  }

  #[test]
  fn test_duplicate_is_rejected() {
    let mut ledger = InventoryLedger::with_sample_stock();
    let err = AddMedicineUseCase::new()
      .execute(
        &mut ledger,
        AddMedicineCommand {
          name: "paracetamol 500MG".to_string(),
          unit_price: dec!(2.00),
          stock_quantity: 10,
        },
      )
      .unwrap_err();

    assert!(matches!(err, InventoryError::DuplicateName(_)));
  }
}
