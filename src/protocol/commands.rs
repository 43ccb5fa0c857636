//! # ESC/POS Protocol Commands
//!
//! Byte-level commands shared by the raster path. Receipt printers reached
//! over Bluetooth SPP speak an ESC/POS dialect where commands are short byte
//! sequences starting with an escape character.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for graphics commands such as `GS v 0` (print raster bit image).
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// ALIGNMENT
// ============================================================================

/// # Select Justification: Left (ESC a 0)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a 0  |
/// | Hex     | 1B 61 00 |
///
/// Sent after a raster image so the text that follows starts at the left
/// margin again.
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::align_left(), [0x1B, 0x61, 0x00]);
/// ```
#[inline]
pub const fn align_left() -> [u8; 3] {
    [ESC, b'a', 0]
}

/// Print and feed one line.
#[inline]
pub const fn line_feed() -> [u8; 1] {
    [LF]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(75), [0x4B, 0x00]); // 600 dots = 75 bytes
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_left() {
        assert_eq!(align_left(), [0x1B, 0x61, 0x00]);
    }

    #[test]
    fn test_line_feed() {
        assert_eq!(line_feed(), [0x0A]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        assert_eq!(u16_le(600), [0x58, 0x02]);
    }
}
