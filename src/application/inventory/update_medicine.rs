use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::search_medicines::MedicineDto;
use crate::domain::inventory::{InventoryError, InventoryLedger, MedicineUpdate};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedicineCommand {
  pub id: Uuid,
  pub name: Option<String>,
  pub unit_price: Option<Decimal>,
  pub stock_quantity: Option<u32>,
}

#[derive(Debug, Default)]
pub struct UpdateMedicineUseCase;

impl UpdateMedicineUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    ledger: &mut InventoryLedger,
    command: UpdateMedicineCommand,
  ) -> Result<MedicineDto, InventoryError> {
    let medicine = ledger.update(
      command.id,
      MedicineUpdate {
        name: command.name,
        unit_price: command.unit_price,
        stock_quantity: command.stock_quantity,
      },
    )?;
    Ok(MedicineDto::from(medicine))
  }
}
