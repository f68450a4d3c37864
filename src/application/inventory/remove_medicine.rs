use serde::Deserialize;
use uuid::Uuid;

use super::search_medicines::MedicineDto;
use crate::domain::inventory::{InventoryError, InventoryLedger};

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveMedicineCommand {
  pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct RemoveMedicineUseCase;

impl RemoveMedicineUseCase {
  pub fn new() -> Self {
    Self
  }

  /// Deletes the item for good; the ledger keeps no history or undo.
  pub fn execute(
    &self,
    ledger: &mut InventoryLedger,
    command: RemoveMedicineCommand,
  ) -> Result<MedicineDto, InventoryError> {
    let removed = ledger.remove(command.id)?;
    Ok(MedicineDto::from(&removed))
  }
}
