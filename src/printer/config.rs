//! # Printer Configuration
//!
//! Hardware profile of the target printer: how wide the paper is, how wide
//! raster images are stretched, and how big QR images are printed.
//!
//! ## Usage
//!
//! ```
//! use recibo::printer::PrinterConfig;
//!
//! let config = PrinterConfig::DEFAULT;
//! println!("Paper: {} dots ({:.0} mm)", config.paper_width, config.paper_width_mm());
//! ```

/// # Printer Configuration
///
/// ## Widths
///
/// - **paper_width**: dots across the paper; QR and centered images are
///   centered within it
/// - **raster_width**: width full-width images are stretched to
///
/// Both must be multiples of 8 to be encodable.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// At 203 DPI:
///   dots_per_mm ≈ 8
///   paper 400 dots ≈ 50mm printable
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Printable paper width in dots
    pub paper_width: u32,

    /// Width images are scaled to before raster printing
    pub raster_width: u32,

    /// Side of the square QR image sent to the printer
    pub qr_size: u32,

    /// Side of the QR bitmap rendered before scaling to `qr_size`
    pub qr_render_size: u32,

    /// Resolution in dots per inch
    pub dpi: u16,
}

impl PrinterConfig {
    /// # Generic 58mm Bluetooth Receipt Printer
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 400 dots |
    /// | Raster width | 600 dots |
    /// | QR image | 400 × 400 dots |
    /// | Resolution | 203 DPI |
    pub const DEFAULT: Self = Self {
        name: "Generic ESC/POS",
        paper_width: 400,
        raster_width: 600,
        qr_size: 400,
        qr_render_size: 300,
        dpi: 203,
    };

    /// Calculate dots per millimeter
    ///
    /// ## Example
    ///
    /// ```
    /// use recibo::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig::default();
    /// assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Paper width in millimeters
    #[inline]
    pub fn paper_width_mm(&self) -> f32 {
        self.paper_width as f32 / self.dots_per_mm()
    }

    /// Convert millimeters to dots
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> u32 {
        (mm * self.dots_per_mm()).round() as u32
    }

    /// Convert dots to millimeters
    #[inline]
    pub fn dots_to_mm(&self, dots: u32) -> f32 {
        dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// TESTS
// ============================================================================
