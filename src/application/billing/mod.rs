pub mod export_invoice;
pub mod generate_invoice;
pub mod mark_invoice_paid;

pub use export_invoice::{ExportError, invoice_to_csv, invoice_to_text};
pub use generate_invoice::{BillLineItemDto, GenerateInvoiceCommand, GenerateInvoiceUseCase};
pub use mark_invoice_paid::MarkInvoicePaidUseCase;
