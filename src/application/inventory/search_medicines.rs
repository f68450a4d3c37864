use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::inventory::{InventoryError, InventoryLedger, Medicine};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicineDto {
  pub id: Uuid,
  pub name: String,
  pub unit_price: Decimal,
  pub stock_quantity: u32,
}

impl From<&Medicine> for MedicineDto {
  fn from(medicine: &Medicine) -> Self {
    Self {
      id: medicine.id,
      name: medicine.name.clone(),
      unit_price: medicine.unit_price,
      stock_quantity: medicine.stock_quantity,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMedicinesCommand {
  /// Case-insensitive substring filter; absent or empty matches everything.
  pub query: Option<String>,
  /// When set, list items with stock strictly below this threshold instead.
  pub low_stock_below: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchMedicinesResponse {
  pub medicines: Vec<MedicineDto>,
}

#[derive(Debug, Default)]
pub struct SearchMedicinesUseCase;

impl SearchMedicinesUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    ledger: &InventoryLedger,
    command: SearchMedicinesCommand,
  ) -> Result<SearchMedicinesResponse, InventoryError> {
    let medicines: Vec<MedicineDto> = if let Some(threshold) = command.low_stock_below {
      ledger.find_low_stock(threshold).map(MedicineDto::from).collect()
    } else {
      ledger
        .find_by_name_contains(command.query.as_deref().unwrap_or(""))
        .map(MedicineDto::from)
        .collect()
    };

    Ok(SearchMedicinesResponse { medicines })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_search_by_substring() {
    let ledger = InventoryLedger::with_sample_stock();
    let response = SearchMedicinesUseCase::new()
      .execute(
        &ledger,
        SearchMedicinesCommand {
          query: Some("PARA".to_string()),
          low_stock_below: None,
        },
      )
      .unwrap();

    assert_eq!(response.medicines.len(), 1);
    assert_eq!(response.medicines[0].name, "Paracetamol 500mg");
  }

  #[test]
  fn test_no_filters_lists_everything() {
    let ledger = InventoryLedger::with_sample_stock();
    let response = SearchMedicinesUseCase::new()
      .execute(&ledger, SearchMedicinesCommand::default())
      .unwrap();

    assert_eq!(response.medicines.len(), 3);
  }

  #[test]
  fn test_low_stock_filter_takes_precedence() {
    let ledger = InventoryLedger::with_sample_stock();
    let response = SearchMedicinesUseCase::new()
      .execute(
        &ledger,
        SearchMedicinesCommand {
          query: Some("mg".to_string()),
          low_stock_below: Some(180),
        },
      )
      .unwrap();

    assert_eq!(response.medicines.len(), 1);
    assert_eq!(response.medicines[0].name, "Amoxicillin 250mg");
  }
}
