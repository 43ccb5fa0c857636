//! # Printer Jobs
//!
//! [`Printer`] pairs a [`ByteSink`] with a [`PrinterConfig`] and sends
//! complete jobs: label markup, raster images, QR images, plain text and
//! logo uploads.
//!
//! Images that cannot be encoded (zero size) and QR data that cannot be
//! encoded are logged and skipped; sink failures are returned.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware profile

pub mod config;

pub use config::PrinterConfig;

use image::{DynamicImage, GenericImageView, Rgba};

use crate::document::{LabelDocument, PrintLayoutConfig};
use crate::error::{ReciboError, Result};
use crate::logo;
use crate::protocol::commands;
use crate::render::qr;
use crate::render::raster::{self, RasterCommand, Threshold};
use crate::transport::ByteSink;

/// A printer reachable through `S`.
pub struct Printer<S: ByteSink> {
    sink: S,
    config: PrinterConfig,
}

impl<S: ByteSink> Printer<S> {
    /// Printer with the default hardware profile.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, PrinterConfig::default())
    }

    pub fn with_config(sink: S, config: PrinterConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Send label markup framed by line feeds, then flush.
    pub fn send_markup(&mut self, markup: &str) -> Result<()> {
        self.sink.write_bytes(&commands::line_feed())?;
        self.sink.write_bytes(markup.as_bytes())?;
        self.sink.write_bytes(&commands::line_feed())?;
        self.sink.flush_bytes()
    }

    /// Send `doc` as a complete label using `layout`'s media settings.
    pub fn print_document(&mut self, doc: &LabelDocument, layout: &PrintLayoutConfig) -> Result<()> {
        log::debug!(
            "printing label: {} directives, cursor at {}",
            doc.directives().len(),
            layout.y_start
        );
        self.send_markup(&doc.to_label(layout))
    }

    /// Send raw text bytes as-is.
    pub fn print_text(&mut self, text: &str) -> Result<()> {
        self.sink.write_bytes(text.as_bytes())?;
        self.sink.flush_bytes()
    }

    /// Send a raster command followed by a line feed and the align-left reset.
    pub fn print_raster(&mut self, command: &RasterCommand) -> Result<()> {
        self.sink.write_bytes(&command.to_bytes())?;
        self.sink.write_bytes(&commands::line_feed())?;
        self.sink.write_bytes(&command.trailer())?;
        self.sink.flush_bytes()
    }

    /// Stretch `image` to the raster width and print it.
    ///
    /// Every pixel that is not pure white prints.
    pub fn print_image<I>(&mut self, image: &I) -> Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let width = self.config.raster_width;
        if let Some(command) = skip_invalid(|| {
            let (w, h) = image.dimensions();
            if w == 0 || h == 0 {
                return Err(ReciboError::InvalidImage { width: w, height: h });
            }
            let scaled = raster::scale_to_width(image, width);
            raster::encode(&scaled, width, Threshold::NonWhite)
        })? {
            self.print_raster(&command)?;
        }
        Ok(())
    }

    /// Print `image` at its own size, centered on the paper.
    pub fn print_image_centered<I>(&mut self, image: &I, threshold: Threshold) -> Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let width = self.config.paper_width;
        if let Some(command) = skip_invalid(|| raster::encode_centered(image, width, threshold))? {
            self.print_raster(&command)?;
        }
        Ok(())
    }

    /// Render `data` as a QR image and print it centered on the paper.
    pub fn print_qr(&mut self, data: &str) -> Result<()> {
        let Some(symbol) = qr::render_qr(data, self.config.qr_render_size) else {
            log::warn!("skipping QR code: data could not be encoded");
            return Ok(());
        };

        let symbol = DynamicImage::ImageLuma8(symbol).to_rgba8();
        let scaled = raster::scale_to_square(&symbol, self.config.qr_size);
        self.print_image_centered(&scaled, Threshold::NonWhite)
    }

    /// Store `image` in printer memory as graphic `{name}.GRF`.
    pub fn upload_logo<I>(&mut self, image: &I, name: &str) -> Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let Some(definition) = skip_invalid(|| logo::image_to_definition_block(image, name))?
        else {
            return Ok(());
        };
        log::debug!(
            "uploading logo '{}' ({}x{})",
            name,
            definition.width(),
            definition.height()
        );
        self.sink.write_bytes(definition.block().as_bytes())?;
        self.sink.flush_bytes()
    }
}

/// Run an encoder, turning `InvalidImage` into a logged skip.
fn skip_invalid<T, F>(encode: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match encode() {
        Ok(encoded) => Ok(Some(encoded)),
        Err(ReciboError::InvalidImage { width, height }) => {
            log::warn!("skipping image with invalid dimensions {}x{}", width, height);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// TESTS
// ============================================================================
