use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
  #[error("Medicine name cannot be empty")]
  EmptyName,

  #[error("Medicine name '{0}' already exists")]
  DuplicateName(String),

  #[error("Unit price cannot be negative")]
  NegativePrice,

  #[error("Medicine not found: {0}")]
  NotFound(Uuid),
}
