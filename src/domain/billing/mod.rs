pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::{BillLineItem, Invoice, PatientDetails};
pub use errors::BillingError;
pub use services::{BillingConfig, BillingService};
pub use value_objects::{
  InsurancePolicy, ItemName, PaymentStatus, Quantity, TaxRate, UnitPrice, ValueObjectError,
};
