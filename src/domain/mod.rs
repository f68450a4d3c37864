pub mod billing;
pub mod inventory;
