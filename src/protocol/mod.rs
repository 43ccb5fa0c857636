//! # Printer Protocols
//!
//! Low-level builders for the two wire formats recibo speaks.
//!
//! ## Module Structure
//!
//! - [`commands`]: ESC/POS control bytes (alignment, line feed, LE helpers)
//! - [`graphics`]: ESC/POS raster bit image command (`GS v 0`)
//! - [`zpl`]: ZPL label markup (field text, boxes, graphics, QR)
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{commands, graphics, zpl};
//!
//! // Binary: an 8-dot wide, one row raster image with the first dot set
//! let mut data = graphics::raster(1, 1, &[0b1000_0000]);
//! data.extend(commands::line_feed());
//! data.extend(commands::align_left());
//!
//! // Text: a positioned field
//! let field = zpl::field_text(30, 400, "TOTAL");
//! assert_eq!(field, "^FO30,400^FDTOTAL^FS");
//! ```

pub mod commands;
pub mod graphics;
pub mod zpl;
