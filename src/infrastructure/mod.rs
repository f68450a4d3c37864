//! Infrastructure layer
//!
//! Everything that wires the core to its surroundings. Persistence, HTTP,
//! and presentation live in separate collaborators; this crate only carries
//! configuration loading.

pub mod config;

pub use config::{BillingSettings, Config};
