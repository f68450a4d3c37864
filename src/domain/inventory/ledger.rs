use rust_decimal::Decimal;
use uuid::Uuid;

use super::entities::Medicine;
use super::errors::InventoryError;

/// Partial update for a stocked medicine; only set fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineUpdate {
  pub name: Option<String>,
  pub unit_price: Option<Decimal>,
  pub stock_quantity: Option<u32>,
}

/// Authoritative in-memory record of pharmacy stock backing billing lookups.
///
/// Items keep insertion order, which is also the order every query yields.
/// The ledger holds no history and does no locking; an embedding host must
/// serialize mutating access to one instance.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
  items: Vec<Medicine>,
}

impl InventoryLedger {
  pub fn new() -> Self {
    Self::default()
  }

  /// Ledger pre-seeded with the demo pharmacy stock.
  pub fn with_sample_stock() -> Self {
    let mut ledger = Self::new();
    for (name, price, qty) in [
      ("Paracetamol 500mg", Decimal::new(150, 2), 200),
      ("Amoxicillin 250mg", Decimal::new(80, 2), 150),
      ("Cetrizine 10mg", Decimal::new(40, 2), 300),
    ] {
      ledger
        .add(name.to_string(), price, qty)
        .expect("sample stock is valid");
    }
    ledger
  }

  pub fn add(
    &mut self,
    name: String,
    unit_price: Decimal,
    stock_quantity: u32,
  ) -> Result<&Medicine, InventoryError> {
    let name = self.validate_name(name, None)?;
    if unit_price.is_sign_negative() {
      return Err(InventoryError::NegativePrice);
    }

    self.items.push(Medicine::new(name, unit_price, stock_quantity));
    let created = self.items.last().expect("just pushed");
    tracing::debug!(medicine_id = %created.id, name = %created.name, "medicine added");
    Ok(created)
  }

  /// Apply only the supplied fields. Validation runs before any field is
  /// touched, so a failed update leaves the item unchanged.
  pub fn update(
    &mut self,
    id: Uuid,
    update: MedicineUpdate,
  ) -> Result<&Medicine, InventoryError> {
    // Resolve the id first so an unknown item always reports NotFound,
    // whatever else is wrong with the request
    let index = self
      .items
      .iter()
      .position(|m| m.id == id)
      .ok_or(InventoryError::NotFound(id))?;

    let name = update
      .name
      .map(|n| self.validate_name(n, Some(id)))
      .transpose()?;
    if let Some(price) = update.unit_price {
      if price.is_sign_negative() {
        return Err(InventoryError::NegativePrice);
      }
    }

    let item = &mut self.items[index];
    if let Some(name) = name {
      item.name = name;
    }
    if let Some(price) = update.unit_price {
      item.unit_price = price;
    }
    if let Some(qty) = update.stock_quantity {
      item.stock_quantity = qty;
    }
    Ok(item)
  }

  /// Removes irrevocably; there is no soft-delete or undo.
  pub fn remove(&mut self, id: Uuid) -> Result<Medicine, InventoryError> {
    let index = self
      .items
      .iter()
      .position(|m| m.id == id)
      .ok_or(InventoryError::NotFound(id))?;
    let removed = self.items.remove(index);
    tracing::debug!(medicine_id = %removed.id, name = %removed.name, "medicine removed");
    Ok(removed)
  }

  pub fn get(&self, id: Uuid) -> Option<&Medicine> {
    self.items.iter().find(|m| m.id == id)
  }

  /// Case-insensitive substring search in insertion order. An empty query
  /// matches every item.
  pub fn find_by_name_contains<'a>(
    &'a self,
    query: &str,
  ) -> impl Iterator<Item = &'a Medicine> {
    let query = query.to_lowercase();
    self
      .items
      .iter()
      .filter(move |m| m.name.to_lowercase().contains(&query))
  }

  /// Items whose stock is strictly below the threshold, in insertion order.
  pub fn find_low_stock(&self, threshold: u32) -> impl Iterator<Item = &Medicine> {
    self.items.iter().filter(move |m| m.is_low_stock(threshold))
  }

  pub fn iter(&self) -> impl Iterator<Item = &Medicine> {
    self.items.iter()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  fn validate_name(
    &self,
    name: String,
    exclude_id: Option<Uuid>,
  ) -> Result<String, InventoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
      return Err(InventoryError::EmptyName);
    }
    let duplicate = self.items.iter().any(|m| {
      Some(m.id) != exclude_id && m.name.to_lowercase() == trimmed.to_lowercase()
    });
    if duplicate {
      return Err(InventoryError::DuplicateName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
  }
}
