//! Application layer
//!
//! Use cases that orchestrate domain logic into application workflows:
//! they translate raw request data into domain value objects, invoke the
//! billing and inventory components, and hand the results back to whatever
//! surrounds the core (HTTP handlers, a desktop shell, export writers).

pub mod billing;
pub mod inventory;
