//! # QR Symbol Rendering
//!
//! Wraps the `qrcode` crate: text → module matrix → grayscale bitmap that the
//! raster encoder can print. Used for printers whose firmware QR support is
//! unreliable, where sending the symbol as an image is the safer path.
//!
//! Encoding failures (data too long for any QR version) return `None` and
//! are logged; callers skip the symbol.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE: usize = 4;

/// A square matrix of QR modules (`true` = dark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side (without quiet zone).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (`x`, `y`) is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// Encode `text` at error correction level H.
pub fn encode_qr(text: &str) -> Option<QrMatrix> {
    let code = match QrCode::with_error_correction_level(text, EcLevel::H) {
        Ok(code) => code,
        Err(e) => {
            log::warn!("QR code generation failed: {}", e);
            return None;
        }
    };

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    Some(QrMatrix { width, modules })
}

/// Render `text` as a QR bitmap roughly `size` × `size` pixels.
///
/// Each module becomes an integer-scaled block (at least 1 pixel) and the
/// symbol is surrounded by a white quiet zone. The result is at most `size`
/// pixels wide unless the symbol itself needs more.
pub fn render_qr(text: &str, size: u32) -> Option<GrayImage> {
    let matrix = encode_qr(text)?;

    let modules = matrix.width() + 2 * QUIET_ZONE;
    let scale = (size as usize / modules).max(1);
    let side = (modules * scale) as u32;

    let image = GrayImage::from_fn(side, side, |px, py| {
        let mx = px as usize / scale;
        let my = py as usize / scale;
        let inside = (QUIET_ZONE..QUIET_ZONE + matrix.width()).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + matrix.width()).contains(&my);
        if inside && matrix.is_dark(mx - QUIET_ZONE, my - QUIET_ZONE) {
            Luma([0])
        } else {
            Luma([255])
        }
    });

    Some(image)
}
