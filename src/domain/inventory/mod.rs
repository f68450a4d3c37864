pub mod entities;
pub mod errors;
pub mod ledger;

pub use entities::Medicine;
pub use errors::InventoryError;
pub use ledger::{InventoryLedger, MedicineUpdate};
