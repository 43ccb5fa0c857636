//! # Recibo CLI
//!
//! Command-line interface for thermal receipt and label printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print a label described as JSON
//! recibo label receipt.json
//!
//! # Print an image stretched to the raster width
//! recibo raster photo.png
//!
//! # Print an image centered on the paper, dark pixels only
//! recibo raster --center --threshold 128 stamp.png
//!
//! # Leave the transparent background of a PNG unprinted
//! recibo raster --skip-transparent badge.png
//!
//! # Store a logo in printer memory as LOGO.GRF
//! recibo logo --name LOGO brand.png
//!
//! # Print a QR code as an image
//! recibo qr "https://example.com"
//!
//! # Write bytes to a file instead of the printer
//! recibo qr --output qr.bin "https://example.com"
//! ```
//!
//! Set `RUST_LOG=debug` for encoder details.

use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use recibo::{
    BluetoothTransport, PrinterConfig, ReciboError,
    json_api::JsonLabel,
    printer::Printer,
    render::raster::{self, Threshold},
    transport::bluetooth::DEFAULT_DEVICE,
};

/// Recibo - Thermal receipt and label printer utility
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a JSON label as ZPL markup
    Label {
        /// JSON label file
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Print an image as an ESC/POS raster bitmap
    Raster {
        /// Image file (PNG, JPEG, ...)
        image: PathBuf,

        /// Print width in dots (multiple of 8)
        #[arg(long)]
        width: Option<u32>,

        /// Center the image at its own size instead of stretching it
        #[arg(long)]
        center: bool,

        /// Gray level below which a pixel prints (default: any non-white pixel)
        #[arg(long)]
        threshold: Option<u8>,

        /// Treat fully transparent pixels as paper
        #[arg(long)]
        skip_transparent: bool,

        #[command(flatten)]
        target: Target,
    },

    /// Upload an image as a stored label graphic
    Logo {
        /// Image file
        image: PathBuf,

        /// Graphic name on the printer
        #[arg(long, default_value = "logo")]
        name: String,

        #[command(flatten)]
        target: Target,
    },

    /// Print a QR code as a raster image
    Qr {
        /// Data to encode
        text: String,

        #[command(flatten)]
        target: Target,
    },
}

/// Where bytes go.
#[derive(Args, Debug)]
struct Target {
    /// Write bytes to FILE instead of the printer
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Printer device path
    #[arg(long, default_value = DEFAULT_DEVICE)]
    device: String,
}

impl Target {
    fn open(&self) -> Result<Box<dyn Write>, ReciboError> {
        match &self.output {
            Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            None => Ok(Box::new(BluetoothTransport::open(&self.device)?)),
        }
    }

    fn describe(&self) -> String {
        match &self.output {
            Some(path) => path.display().to_string(),
            None => self.device.clone(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Label { file, target } => {
            let json = fs::read_to_string(&file)?;
            let label = JsonLabel::from_json(&json)?;
            let (doc, layout) = label
                .build()
                .map_err(|e| ReciboError::Encoding(e.to_string()))?;

            let mut printer = Printer::new(target.open()?);
            printer.print_document(&doc, &layout)?;
            println!(
                "Sent {} directives to {}",
                doc.directives().len(),
                target.describe()
            );
        }

        Commands::Raster {
            image,
            width,
            center,
            threshold,
            skip_transparent,
            target,
        } => {
            let image = image::open(&image)?.to_rgba8();
            let mut config = PrinterConfig::default();
            if let Some(width) = width {
                config.paper_width = width;
                config.raster_width = width;
            }
            let threshold = match (threshold, skip_transparent) {
                (t, true) => Threshold::OpaqueLuminance(t.unwrap_or(255)),
                (Some(t), false) => Threshold::Luminance(t),
                (None, false) => Threshold::NonWhite,
            };

            let mut printer = Printer::with_config(target.open()?, config);
            if center {
                printer.print_image_centered(&image, threshold)?;
            } else if threshold == Threshold::NonWhite {
                printer.print_image(&image)?;
            } else {
                let scaled = raster::scale_to_width(&image, config.raster_width);
                let command = raster::encode(&scaled, config.raster_width, threshold)?;
                printer.print_raster(&command)?;
            }
            println!("Sent image to {}", target.describe());
        }

        Commands::Logo {
            image,
            name,
            target,
        } => {
            let image = image::open(&image)?.to_rgba8();
            let mut printer = Printer::new(target.open()?);
            printer.upload_logo(&image, &name)?;
            println!("Stored {}.GRF on {}", name, target.describe());
        }

        Commands::Qr { text, target } => {
            let mut printer = Printer::new(target.open()?);
            printer.print_qr(&text)?;
            println!("Sent QR code to {}", target.describe());
        }
    }

    Ok(())
}
