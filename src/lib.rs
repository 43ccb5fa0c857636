//! # Recibo - Thermal Receipt and Label Printing
//!
//! Recibo turns images and receipt content into the two wire formats spoken
//! by small Bluetooth thermal printers:
//!
//! - **Raster images**: ESC/POS `GS v 0` bitmaps (packed monochrome bits)
//! - **Label markup**: ZPL directives placed by a cursor that moves down the
//!   label as content is added
//! - **Logos**: images converted to `~DG` graphic definitions, and authored
//!   logo blocks moved to the current cursor
//! - **Transport**: any byte sink, including a Bluetooth RFCOMM tty
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{BluetoothTransport, LabelDocument, PrintLayoutConfig, printer::Printer};
//!
//! let mut layout = PrintLayoutConfig::default();
//! let mut doc = LabelDocument::new();
//!
//! doc.add_logo(&mut layout);
//! doc.add_text_line(&mut layout, "CAFE LUNA", true);
//! doc.add_divider(&mut layout);
//! doc.add_line_with_columns(&mut layout, &[(30, "2"), (80, "Espresso"), (450, "5.00")]);
//! doc.add_label_value_line(&mut layout, "Total", 5.0, 400, 10);
//! doc.add_qr_code(&mut layout, "https://example.com/r/1042", 5, true);
//!
//! let transport = BluetoothTransport::open("/dev/rfcomm0")?;
//! let mut printer = Printer::new(transport);
//! printer.print_document(&doc, &layout)?;
//!
//! # Ok::<(), recibo::ReciboError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS and ZPL command builders |
//! | [`render`] | Raster encoding and QR bitmaps |
//! | [`layout`] | Text centering, wrapping and padding |
//! | [`document`] | Cursor-driven label builder |
//! | [`logo`] | Graphic definitions and re-anchoring |
//! | [`json_api`] | Labels described as JSON |
//! | [`printer`] | Printer profile and print jobs |
//! | [`transport`] | Byte sinks |
//! | [`error`] | Error types |

pub mod document;
pub mod error;
pub mod json_api;
pub mod layout;
pub mod logo;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use document::{LabelDocument, PrintLayoutConfig};
pub use error::ReciboError;
pub use printer::PrinterConfig;
pub use transport::BluetoothTransport;
