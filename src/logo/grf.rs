//! `~DG` graphic definitions (GRF bitmaps encoded as hex text).

use std::fmt::Write;

use image::{GenericImageView, Rgba};

use crate::error::{ReciboError, Result};
use crate::protocol::zpl;
use crate::render::raster::{self, Threshold};

/// A monochrome graphic ready to be downloaded to printer memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoDefinition {
    /// Graphic name, stored on the printer as `{name}.GRF`
    pub name: String,
    /// Total bitmap size in bytes (`bytes_per_row * height`)
    pub total_bytes: usize,
    /// Bytes per row (width rounded up to a multiple of 8, divided by 8)
    pub bytes_per_row: usize,
    /// Packed rows, MSB = leftmost dot, 1 = ink
    pub data: Vec<u8>,
}

impl LogoDefinition {
    /// Height in dots.
    pub fn height(&self) -> usize {
        if self.bytes_per_row == 0 {
            0
        } else {
            self.total_bytes / self.bytes_per_row
        }
    }

    /// Width in dots (always a multiple of 8).
    pub fn width(&self) -> usize {
        self.bytes_per_row * 8
    }

    /// Whether the dot at (`x`, `y`) prints.
    ///
    /// Dots outside `width()` × `height()` are paper.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        self.data
            .get(y * self.bytes_per_row + x / 8)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }

    /// The `~DG` block: header followed by two uppercase hex digits per byte.
    pub fn block(&self) -> String {
        let mut hex = String::with_capacity(self.data.len() * 2);
        for byte in &self.data {
            // writing to a String cannot fail
            let _ = write!(hex, "{:02X}", byte);
        }
        zpl::download_graphic(&self.name, self.total_bytes, self.bytes_per_row, &hex)
    }

    /// Parse a `~DG{name}.GRF,{total},{per_row},{hex}` block.
    ///
    /// Whitespace inside the hex payload (line-wrapped files) is ignored.
    /// Anything after the payload, such as a placement command, must start
    /// with `^`.
    pub fn parse(block: &str) -> Result<Self> {
        let body = block
            .trim_start()
            .strip_prefix("~DG")
            .ok_or_else(|| invalid("missing ~DG prefix"))?;

        let mut fields = body.splitn(4, ',');
        let name = fields.next().ok_or_else(|| invalid("missing name"))?;
        let name = name.strip_suffix(".GRF").unwrap_or(name).to_string();
        let total_bytes = parse_count(fields.next(), "total bytes")?;
        let bytes_per_row = parse_count(fields.next(), "bytes per row")?;
        if bytes_per_row == 0 {
            return Err(invalid("bytes per row must be at least 1"));
        }
        if total_bytes % bytes_per_row != 0 {
            return Err(invalid(&format!(
                "{} bytes is not a whole number of {} byte rows",
                total_bytes, bytes_per_row
            )));
        }
        let expected_digits = total_bytes
            .checked_mul(2)
            .ok_or_else(|| invalid(&format!("{} bytes is too large", total_bytes)))?;
        let payload = fields.next().ok_or_else(|| invalid("missing data"))?;
        let payload = payload.split('^').next().unwrap_or_default();

        let digits: Vec<u8> = payload
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        if digits.len() != expected_digits {
            return Err(invalid(&format!(
                "expected {} hex digits, found {}",
                expected_digits,
                digits.len()
            )));
        }

        let data = digits
            .chunks(2)
            .map(|pair| {
                let hi = hex_value(pair[0])?;
                let lo = hex_value(pair[1])?;
                Ok(hi << 4 | lo)
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self {
            name,
            total_bytes,
            bytes_per_row,
            data,
        })
    }
}

/// Convert `image` into a graphic definition named `name`.
///
/// The width is rounded up to the next multiple of 8; dots past the image's
/// right edge are white. A dot prints when its gray value `(R + G + B) / 3`
/// is below 128.
///
/// ## Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use recibo::logo;
///
/// let image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
/// let logo = logo::image_to_definition_block(&image, "logo").unwrap();
///
/// assert_eq!(logo.block(), "~DGlogo.GRF,1,1,C0");
/// assert_eq!((logo.total_bytes, logo.bytes_per_row), (1, 1));
/// ```
pub fn image_to_definition_block<I>(image: &I, name: &str) -> Result<LogoDefinition>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ReciboError::InvalidImage { width, height });
    }

    let bytes_per_row = width.div_ceil(8) as usize;
    let total_bytes = bytes_per_row * height as usize;

    let mut data = Vec::with_capacity(total_bytes);
    for y in 0..height {
        raster::pack_row(image, y, bytes_per_row, Threshold::LOGO, &mut data);
    }

    log::debug!(
        "logo '{}': {}x{} -> {} bytes ({} per row)",
        name,
        width,
        height,
        total_bytes,
        bytes_per_row
    );

    Ok(LogoDefinition {
        name: name.to_string(),
        total_bytes,
        bytes_per_row,
        data,
    })
}

fn parse_count(field: Option<&str>, what: &str) -> Result<usize> {
    field
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(|| invalid(&format!("bad {}", what)))
}

fn hex_value(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(invalid(&format!("invalid hex digit {:?}", digit as char))),
    }
}

fn invalid(reason: &str) -> ReciboError {
    ReciboError::Encoding(format!("graphic definition: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_width_rounded_up() {
        let image = RgbaImage::from_pixel(9, 2, BLACK);
        let logo = image_to_definition_block(&image, "logo").unwrap();
        assert_eq!(logo.bytes_per_row, 2);
        assert_eq!(logo.total_bytes, 4);
        assert_eq!(logo.block(), "~DGlogo.GRF,4,2,FF80FF80");
    }

    #[test]
    fn test_gray_threshold_128() {
        let dark = Rgba([127, 127, 127, 255]);
        let light = Rgba([128, 128, 128, 255]);
        let image = RgbaImage::from_fn(2, 1, |x, _| if x == 0 { dark } else { light });
        let logo = image_to_definition_block(&image, "g").unwrap();
        assert_eq!(logo.data, vec![0x80]);
    }

    #[test]
    fn test_transparent_black_is_ink() {
        let image = RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 0]));
        let logo = image_to_definition_block(&image, "l").unwrap();
        assert_eq!(logo.block(), "~DGl.GRF,1,1,FF");
    }

    #[test]
    fn test_uppercase_hex() {
        // 1010_1011 = 0xAB
        let image = RgbaImage::from_fn(8, 1, |x, _| {
            if [0, 2, 4, 6, 7].contains(&x) { BLACK } else { WHITE }
        });
        let logo = image_to_definition_block(&image, "hex").unwrap();
        assert_eq!(logo.block(), "~DGhex.GRF,1,1,AB");
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let image = RgbaImage::new(0, 0);
        assert!(matches!(
            image_to_definition_block(&image, "x"),
            Err(ReciboError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_parse_round_trip() {
        let image = RgbaImage::from_fn(13, 5, |x, y| if (x * y) % 3 == 0 { BLACK } else { WHITE });
        let logo = image_to_definition_block(&image, "logo").unwrap();
        let parsed = LogoDefinition::parse(&logo.block()).unwrap();
        assert_eq!(parsed, logo);
        assert_eq!(parsed.height(), 5);
        assert_eq!(parsed.width(), 16);
    }

    #[test]
    fn test_parse_ignores_line_breaks_and_trailing_placement() {
        let block = "~DGLOGO.GRF,4,2,\nFF00\n00FF\n^FO0,0^XGLOGO.GRF,1,1^FS";
        let parsed = LogoDefinition::parse(block).unwrap();
        assert_eq!(parsed.name, "LOGO");
        assert_eq!(parsed.data, vec![0xFF, 0x00, 0x00, 0xFF]);
        assert!(parsed.is_ink(7, 0));
        assert!(!parsed.is_ink(8, 0));
        assert!(parsed.is_ink(15, 1));
    }

    #[test]
    fn test_parse_rejects_short_payload() {
        assert!(LogoDefinition::parse("~DGx.GRF,2,1,FF").is_err());
        assert!(LogoDefinition::parse("^FO0,0").is_err());
        assert!(LogoDefinition::parse("~DGx.GRF,1,1,ZZ").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_byte_count() {
        let err = LogoDefinition::parse("~DGx.GRF,9223372036854775808,1,FF").unwrap_err();
        assert!(matches!(err, ReciboError::Encoding(_)));
        assert!(LogoDefinition::parse(&format!("~DGx.GRF,{},1,FF", usize::MAX)).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_bytes_per_row() {
        let err = LogoDefinition::parse("~DGx.GRF,0,0,").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoding error: graphic definition: bytes per row must be at least 1"
        );
    }

    #[test]
    fn test_parse_rejects_partial_row() {
        let err = LogoDefinition::parse("~DGx.GRF,3,2,FFFFFF").unwrap_err();
        assert!(matches!(err, ReciboError::Encoding(_)));
    }

    #[test]
    fn test_is_ink_outside_bitmap() {
        let logo = LogoDefinition::parse("~DGx.GRF,2,1,FFFF").unwrap();
        assert_eq!((logo.width(), logo.height()), (8, 2));
        assert!(logo.is_ink(7, 0));
        // past the right edge does not spill into the next row
        assert!(!logo.is_ink(8, 0));
        assert!(!logo.is_ink(0, 2));
        assert!(!logo.is_ink(usize::MAX, usize::MAX));
    }
}
