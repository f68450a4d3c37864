//! medibill: patient billing & pharmacy inventory management core.
//!
//! Two leaf components with no concurrency between them:
//! - [`domain::billing::BillingService`] computes an immutable invoice
//!   snapshot (subtotal -> insurance discount -> tax -> total) from billable
//!   line items, with the one-way PENDING -> PAID payment transition.
//! - [`domain::inventory::InventoryLedger`] is the in-memory stock record
//!   that feeds billing lookups: add/update/remove/query plus low-stock
//!   detection.
//!
//! All money is [`rust_decimal::Decimal`], rounded half-up to 2 decimal
//! places at the invoice aggregates. HTTP routing, persistence, and
//! presentation are external collaborators; the [`application`] use cases
//! are the seam they call through.

pub mod application;
pub mod domain;
pub mod infrastructure;
