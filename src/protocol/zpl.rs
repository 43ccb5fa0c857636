//! # ZPL Label Markup
//!
//! Builders for the textual label commands. Every positioned element follows
//! the same shape: a field origin (`^FO x,y`), the element itself, and a
//! field separator (`^FS`).
//!
//! ```text
//! ^FO30,400^FDHello^FS
//! └──┬───┘ └───┬──┘└┬┘
//!  origin   data   end
//! ```
//!
//! Coordinates are in printer dots, measured from the top-left corner of the
//! label.

/// Start of a label format.
pub const LABEL_START: &str = "^XA";

/// End of a label format.
pub const LABEL_END: &str = "^XZ";

/// # Field Text (^FO x,y ^FD text ^FS)
///
/// ```
/// use recibo::protocol::zpl;
///
/// assert_eq!(zpl::field_text(30, 400, "Hola"), "^FO30,400^FDHola^FS");
/// ```
pub fn field_text(x: i32, y: i32, text: &str) -> String {
    format!("^FO{},{}^FD{}^FS", x, y, text)
}

/// # Graphic Box (^FO x,y ^GB w,t,f ^FS)
///
/// A box with a thickness of `thickness` dots. Used as a horizontal rule when
/// the height is left to the thickness.
pub fn graphic_box(x: i32, y: i32, width: i32, thickness: i32, fill: i32) -> String {
    format!("^FO{},{}^GB{},{},{}^FS", x, y, width, thickness, fill)
}

/// # Recall Stored Graphic (^FO x,y ^XG name,mx,my ^FS)
///
/// Prints a graphic previously downloaded with `~DG`. `mx`/`my` are the
/// magnification factors (1 or 2).
pub fn recall_graphic(x: i32, y: i32, name: &str, mx: u8, my: u8) -> String {
    format!("^FO{},{}^XG{},{},{}^FS", x, y, name, mx, my)
}

/// # QR Code Field (^FO x,y ^BQN,2,m ^FDLA,data ^FS)
///
/// Model 2 QR code with magnification `module_size`. The `LA,` prefix of the
/// field data selects error correction level L with automatic input mode.
///
/// ```
/// use recibo::protocol::zpl;
///
/// assert_eq!(
///     zpl::qr_field(140, 700, 8, "https://example.com"),
///     "^FO140,700^BQN,2,8^FDLA,https://example.com^FS"
/// );
/// ```
pub fn qr_field(x: i32, y: i32, module_size: u32, data: &str) -> String {
    format!("^FO{},{}^BQN,2,{}^FDLA,{}^FS", x, y, module_size, data)
}

/// # Download Graphic (~DG name.GRF,total,per_row,hex)
///
/// Stores a monochrome graphic in printer memory. `hex` is the packed bitmap
/// rendered as two uppercase hex digits per byte.
pub fn download_graphic(name: &str, total_bytes: usize, bytes_per_row: usize, hex: &str) -> String {
    format!("~DG{}.GRF,{},{},{}", name, total_bytes, bytes_per_row, hex)
}

/// Print width in dots (^PW).
pub fn print_width(dots: i32) -> String {
    format!("^PW{}", dots)
}

/// Label length in dots (^LL).
pub fn label_length(dots: i32) -> String {
    format!("^LL{}", dots)
}

/// Print rate token (^PR).
pub fn print_rate(speed: &str) -> String {
    format!("^PR{}", speed)
}

/// Media type token (^MT), `T` = thermal transfer, `D` = direct thermal.
pub fn media_type(mode: &str) -> String {
    format!("^MT{}", mode)
}
