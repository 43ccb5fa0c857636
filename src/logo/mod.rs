//! # Logos
//!
//! Logos travel to label printers as `~DG` graphic definitions: a header
//! naming the graphic and its size, followed by the packed bitmap written as
//! hex text. Once stored, a logo is placed with `^XG` like any other field.
//!
//! ```text
//! ~DGlogo.GRF,600,25,0000FFFF0000...
//!    │         │   │  └─ hex rows, 2 digits per byte
//!    │         │   └──── bytes per row
//!    │         └──────── total bytes
//!    └────────────────── name
//! ```
//!
//! - [`grf`]: image → definition block, and parsing a block back
//! - [`anchor`]: moving a previously authored block to the document cursor

pub mod anchor;
pub mod grf;

pub use anchor::{Placement, placements, reanchor};
pub use grf::{LogoDefinition, image_to_definition_block};
