use std::fmt::Write as _;
use thiserror::Error;

use crate::domain::billing::Invoice;

#[derive(Debug, Error)]
pub enum ExportError {
  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("Failed to finalize CSV output: {0}")]
  Finalize(String),

  #[error("CSV output was not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Render an invoice as CSV for file export.
///
/// Field order is the downstream rendering contract:
/// `PatientName,PatientID,Doctor,Item,Qty,UnitPrice,Total`, one row per line
/// item, then a summary row with `Subtotal` in the item column and the
/// subtotal/total amounts in the last two columns.
pub fn invoice_to_csv(invoice: &Invoice) -> Result<String, ExportError> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record([
    "PatientName",
    "PatientID",
    "Doctor",
    "Item",
    "Qty",
    "UnitPrice",
    "Total",
  ])?;

  for item in &invoice.line_items {
    let quantity = item.quantity.value().to_string();
    let unit_price = format!("{:.2}", item.unit_price.value());
    let line_total = format!("{:.2}", item.line_total());
    writer.write_record([
      invoice.patient.name.as_str(),
      invoice.patient.patient_id.as_str(),
      invoice.patient.doctor.as_str(),
      item.name.value(),
      quantity.as_str(),
      unit_price.as_str(),
      line_total.as_str(),
    ])?;
  }

  let subtotal = format!("{:.2}", invoice.subtotal);
  let total = format!("{:.2}", invoice.total_amount);
  writer.write_record(["", "", "", "Subtotal", "", subtotal.as_str(), total.as_str()])?;

  let bytes = writer
    .into_inner()
    .map_err(|e| ExportError::Finalize(e.to_string()))?;
  Ok(String::from_utf8(bytes)?)
}

/// Fixed-width plain-text preview of an invoice, suitable for display or
/// printing.
pub fn invoice_to_text(invoice: &Invoice) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Clinic Invoice");
  let _ = writeln!(out, "Date: {}", invoice.created_at.format("%Y-%m-%d %H:%M"));
  let _ = writeln!(out, "Patient: {}", invoice.patient.name);
  let _ = writeln!(out, "Patient ID: {}", invoice.patient.patient_id);
  let _ = writeln!(out, "Doctor: {}", invoice.patient.doctor);
  let _ = writeln!(out);
  let _ = writeln!(out, "{:<40} {:>6} {:>10} {:>10}", "Item", "Qty", "Unit", "Total");
  let _ = writeln!(out, "{}", "-".repeat(69));
  for item in &invoice.line_items {
    let _ = writeln!(
      out,
      "{:<40} {:>6} {:>10} {:>10}",
      item.name.value(),
      item.quantity.value(),
      format!("{:.2}", item.unit_price.value()),
      format!("{:.2}", item.line_total())
    );
  }
  let _ = writeln!(out, "{}", "-".repeat(69));
  for (label, amount) in [
    ("Subtotal:", invoice.subtotal),
    ("Discount:", invoice.discount),
    ("Tax:", invoice.tax_amount),
    ("Total:", invoice.total_amount),
  ] {
    let _ = writeln!(out, "{:<58} {:>10}", label, format!("{:.2}", amount));
  }
  out
}
