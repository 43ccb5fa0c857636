//! # ESC/POS Raster Graphics
//!
//! This module implements the raster bit image command used to print
//! monochrome bitmaps on ESC/POS receipt printers.
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use super::commands::{GS, u16_le};

/// Length of the `GS v 0` header in bytes.
pub const RASTER_HEADER_LEN: usize = 8;

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal density)
/// - `xL, xH`: Width in bytes, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height
///
/// ## Example
///
/// ```
/// use recibo::protocol::graphics;
///
/// // 600 dots = 75 bytes wide, 2 rows
/// let header = graphics::raster_header(75, 2);
/// assert_eq!(header, [0x1D, 0x76, 0x30, 0x00, 75, 0, 2, 0]);
/// ```
pub fn raster_header(width_bytes: u16, height: u16) -> [u8; RASTER_HEADER_LEN] {
    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);
    [GS, b'v', b'0', 0, xl, xh, yl, yh]
}

/// Build a complete raster command: header followed by the packed rows.
pub fn raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let mut cmd = Vec::with_capacity(RASTER_HEADER_LEN + data.len());
    cmd.extend_from_slice(&raster_header(width_bytes, height));
    cmd.extend_from_slice(data);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let header = raster_header(50, 100);

        assert_eq!(header[0], 0x1D); // GS
        assert_eq!(header[1], 0x76); // 'v'
        assert_eq!(header[2], 0x30); // '0'
        assert_eq!(header[3], 0x00); // m = normal
        assert_eq!(header[4], 50); // xL
        assert_eq!(header[5], 0); // xH
        assert_eq!(header[6], 100); // yL
        assert_eq!(header[7], 0); // yH
    }

    #[test]
    fn test_raster_large_height() {
        // 500 = 0x01F4 -> [0xF4, 0x01] in little-endian
        let header = raster_header(75, 500);
        assert_eq!(header[6], 0xF4);
        assert_eq!(header[7], 0x01);
    }

    #[test]
    fn test_raster_preserves_data() {
        let data: Vec<u8> = (0..50 * 4).map(|i| (i % 256) as u8).collect();
        let cmd = raster(50, 4, &data);

        assert_eq!(cmd.len(), RASTER_HEADER_LEN + 50 * 4);
        assert_eq!(&cmd[RASTER_HEADER_LEN..], &data[..]);
    }
}
