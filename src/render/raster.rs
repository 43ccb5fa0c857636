//! # Raster Encoding
//!
//! Converts a decoded color image into a printer-native `GS v 0` raster
//! command.
//!
//! ## Binarization
//!
//! Every pixel is classified as ink (print a dot) or paper (leave white)
//! according to a [`Threshold`]:
//!
//! | Mode | Ink when |
//! |------|----------|
//! | `NonWhite` | pixel is anything but opaque white |
//! | `Luminance(t)` | `(R + G + B) / 3 < t` |
//! | `OpaqueLuminance(t)` | alpha is not 0 and `(R + G + B) / 3 < t` |
//!
//! Alpha is ignored except by `OpaqueLuminance`, so a transparent black
//! pixel prints under the first two modes.
//!
//! ## Row Layout
//!
//! ```text
//! print_width = 24 dots (3 bytes per row)
//! image width = 10 dots
//!
//!  byte 0     byte 1     byte 2
//! ┌────────┬────────┬────────┐
//! │iiiiiiii│ii000000│00000000│   i = image column, 0 = white fill
//! └────────┴────────┴────────┘
//! ```
//!
//! ## Centered Rows
//!
//! [`encode_centered`] prepends whole blank bytes so narrow images (QR codes,
//! logos) sit in the middle of the paper:
//!
//! ```text
//! margin_bytes = ((print_width - width) / 2 + 7) / 8
//! row = [0; margin_bytes] ++ image_bytes, then padded/truncated at the end
//!       to exactly print_width / 8 bytes
//! ```

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};

use crate::error::{ReciboError, Result};
use crate::protocol::{commands, graphics};

/// Ink classification rule for a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threshold {
    /// Anything that is not pure white prints.
    #[default]
    NonWhite,
    /// Gray value `(R + G + B) / 3` below the threshold prints.
    Luminance(u8),
    /// As `Luminance`, but fully transparent pixels are paper.
    /// `OpaqueLuminance(255)` prints every visible pixel that is not white.
    OpaqueLuminance(u8),
}

impl Threshold {
    /// Threshold used for logo graphics.
    pub const LOGO: Self = Self::Luminance(128);

    /// Whether `pixel` should be printed as a dot.
    #[inline]
    pub fn is_ink(self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        match self {
            Self::NonWhite => !(r == 255 && g == 255 && b == 255 && a == 255),
            Self::Luminance(t) => gray(r, g, b) < t,
            Self::OpaqueLuminance(t) => a != 0 && gray(r, g, b) < t,
        }
    }
}

#[inline]
fn gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// A raster image command ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterCommand {
    /// Row width in bytes (`print_width / 8`)
    pub width_bytes: u16,
    /// Height in dots
    pub height: u16,
    /// Packed rows, `width_bytes * height` bytes
    pub data: Vec<u8>,
}

impl RasterCommand {
    /// The 8-byte `GS v 0` header.
    pub fn header(&self) -> [u8; graphics::RASTER_HEADER_LEN] {
        graphics::raster_header(self.width_bytes, self.height)
    }

    /// Header followed by the packed rows.
    pub fn to_bytes(&self) -> Vec<u8> {
        graphics::raster(self.width_bytes, self.height, &self.data)
    }

    /// Trailing command that restores left alignment after the image.
    ///
    /// Kept separate from [`to_bytes`](Self::to_bytes); the caller decides
    /// whether to forward it.
    pub fn trailer(&self) -> [u8; 3] {
        commands::align_left()
    }

    /// Print width in dots.
    pub fn width_dots(&self) -> u32 {
        self.width_bytes as u32 * 8
    }
}

/// Encode `image` into a raster command `print_width` dots wide.
///
/// `print_width` must be a positive multiple of 8. Columns past the image's
/// right edge are white; columns past `print_width` are cut off.
///
/// ## Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use recibo::render::raster::{self, Threshold};
///
/// let image = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
/// let cmd = raster::encode(&image, 8, Threshold::NonWhite).unwrap();
///
/// assert_eq!(cmd.header(), [0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0]);
/// assert_eq!(cmd.data, vec![0b1000_0000]);
/// ```
pub fn encode<I>(image: &I, print_width: u32, threshold: Threshold) -> Result<RasterCommand>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width_bytes, height) = check_dimensions(image, print_width)?;
    let row_bytes = width_bytes as usize;

    let mut data = Vec::with_capacity(row_bytes * height as usize);
    for y in 0..image.height() {
        pack_row(image, y, row_bytes, threshold, &mut data);
    }

    log::debug!(
        "raster: {}x{} image -> {} bytes x {} rows",
        image.width(),
        image.height(),
        row_bytes,
        height
    );

    Ok(RasterCommand {
        width_bytes,
        height,
        data,
    })
}

/// Encode `image` horizontally centered within `print_width` dots.
///
/// Images at least as wide as the print width encode exactly like
/// [`encode`]. Narrower images get `((print_width - width) / 2 + 7) / 8`
/// blank bytes in front of every row; the row is then padded with blank bytes
/// or truncated at its end so it is exactly `print_width / 8` bytes long.
pub fn encode_centered<I>(
    image: &I,
    print_width: u32,
    threshold: Threshold,
) -> Result<RasterCommand>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    if image.width() >= print_width {
        return encode(image, print_width, threshold);
    }

    let (width_bytes, height) = check_dimensions(image, print_width)?;
    let row_bytes = width_bytes as usize;
    let margin_bytes = ((print_width - image.width()) / 2 + 7) as usize / 8;
    let image_bytes = image.width().div_ceil(8) as usize;

    if margin_bytes + image_bytes != row_bytes {
        log::debug!(
            "centered raster: {} margin + {} image bytes adjusted to {} per row",
            margin_bytes,
            image_bytes,
            row_bytes
        );
    }

    let mut data = Vec::with_capacity(row_bytes * height as usize);
    for y in 0..image.height() {
        let row_start = data.len();
        data.resize(row_start + margin_bytes, 0x00);
        pack_row(image, y, image_bytes, threshold, &mut data);
        data.resize(row_start + row_bytes, 0x00);
    }

    Ok(RasterCommand {
        width_bytes,
        height,
        data,
    })
}

/// Pack one image row into `row_bytes` bytes, MSB = leftmost dot.
///
/// Columns at or past the image width are white.
pub(crate) fn pack_row<I>(
    image: &I,
    y: u32,
    row_bytes: usize,
    threshold: Threshold,
    out: &mut Vec<u8>,
) where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let width = image.width();
    for group in 0..row_bytes {
        let mut byte = 0u8;
        for bit in 0..8 {
            let x = (group * 8 + bit) as u32;
            if x < width && threshold.is_ink(image.get_pixel(x, y)) {
                byte |= 0x80 >> bit;
            }
        }
        out.push(byte);
    }
}

fn check_dimensions<I>(image: &I, print_width: u32) -> Result<(u16, u16)>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ReciboError::InvalidImage { width, height });
    }
    if print_width == 0 || print_width % 8 != 0 {
        return Err(ReciboError::UnsupportedDimensions(format!(
            "print width {} is not a positive multiple of 8",
            print_width
        )));
    }
    let width_bytes = u16::try_from(print_width / 8).map_err(|_| {
        ReciboError::UnsupportedDimensions(format!("print width {} exceeds 16-bit field", print_width))
    })?;
    let height = u16::try_from(height).map_err(|_| {
        ReciboError::UnsupportedDimensions(format!("height {} exceeds 16-bit field", height))
    })?;
    Ok((width_bytes, height))
}

// ============================================================================
// IMAGE PREPARATION
// ============================================================================

/// Stretch `image` to `width` dots keeping its height (nearest neighbour).
///
/// Receipt printers expect the full head width; stretching keeps the
/// bitmap's hard edges.
pub fn scale_to_width<I>(image: &I, width: u32) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    imageops::resize(image, width, image.height(), FilterType::Nearest)
}

/// Resize `image` to a `size` × `size` square (nearest neighbour).
pub fn scale_to_square<I>(image: &I, size: u32) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    imageops::resize(image, size, size, FilterType::Nearest)
}
