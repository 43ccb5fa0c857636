//! # Label Documents
//!
//! A [`LabelDocument`] is an append-only list of label directives. Every
//! operation reads the cursor from a borrowed [`PrintLayoutConfig`], emits
//! zero or more directives at that position and moves the cursor down by a
//! fixed amount that depends only on the operation and its parameters, never
//! on the text.
//!
//! ```
//! use recibo::{LabelDocument, PrintLayoutConfig};
//!
//! let mut layout = PrintLayoutConfig::default();
//! let mut doc = LabelDocument::new();
//!
//! doc.add_text_line(&mut layout, "Hello", false);
//! doc.add_divider(&mut layout);
//!
//! assert_eq!(doc.to_zpl(), "^FO30,400^FDHello^FS\n^FO30,430^GB500,4,1^FS");
//! assert_eq!(layout.y_start, 460);
//! ```
//!
//! ## Cursor Advances
//!
//! | Operation | Advance |
//! |-----------|---------|
//! | `add_text_line` | `line_height` per chunk |
//! | `add_divider` | `line_height` |
//! | `add_empty_lines(n)` | `n × line_height` |
//! | `add_logo` | 220 |
//! | `add_qr_code(_, m, _)` | `23m + 40` |
//! | `add_logo_from_zpl_file(_, h)` | `h + 30` |
//! | `add_logo_definition(_, _, h)` | `h + 30` |
//! | `add_text_at` | 0 |
//! | columns, label/value, payment | `line_height` |
//!
//! Logo operations are no-ops (no directive, no advance) when
//! `use_logo` is false.
//!
//! Advances are unsigned and saturate at `i32::MAX`. A negative
//! `line_height` advances by zero, so `y_start` never decreases.

pub mod config;

use std::fmt;

pub use config::PrintLayoutConfig;

use crate::layout::{self, FillAlign};
use crate::logo::anchor;
use crate::protocol::zpl;

/// Width of the stored logo assumed by [`LabelDocument::add_logo`].
pub const LOGO_WIDTH: i32 = 200;

/// Cursor advance of [`LabelDocument::add_logo`].
pub const LOGO_ADVANCE: u32 = 220;

const QR_GAP: u32 = 40;
const LOGO_GAP: u32 = 30;

/// Modules per side assumed when estimating QR height.
const QR_MODULES: u32 = 23;

/// Fixed horizontal position of QR codes.
pub const QR_X: i32 = 140;

/// Fixed horizontal position of payment amounts.
pub const PAYMENT_X: i32 = 400;

/// Divider rule geometry: width, thickness, fill.
const DIVIDER: (i32, i32, i32) = (500, 4, 1);

// ============================================================================
// DIRECTIVES
// ============================================================================

/// One emitted label instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `^FOx,y^FDtext^FS`
    Text { x: i32, y: i32, text: String },
    /// `^FOx,y^GBw,t,f^FS`
    Divider {
        x: i32,
        y: i32,
        width: i32,
        thickness: i32,
        fill: i32,
    },
    /// `^FOx,y^XGname,mx,my^FS`
    Logo {
        x: i32,
        y: i32,
        name: String,
        mx: u8,
        my: u8,
    },
    /// `^FOx,y^BQN,2,m^FDLA,data^FS`
    QrCode {
        x: i32,
        y: i32,
        module_size: u32,
        data: String,
    },
    /// Pre-rendered markup (logo definition blocks)
    Raw(String),
}

impl Directive {
    /// Vertical position, if the directive has one.
    pub fn y(&self) -> Option<i32> {
        match self {
            Self::Text { y, .. }
            | Self::Divider { y, .. }
            | Self::Logo { y, .. }
            | Self::QrCode { y, .. } => Some(*y),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { x, y, text } => f.write_str(&zpl::field_text(*x, *y, text)),
            Self::Divider {
                x,
                y,
                width,
                thickness,
                fill,
            } => f.write_str(&zpl::graphic_box(*x, *y, *width, *thickness, *fill)),
            Self::Logo { x, y, name, mx, my } => {
                f.write_str(&zpl::recall_graphic(*x, *y, name, *mx, *my))
            }
            Self::QrCode {
                x,
                y,
                module_size,
                data,
            } => f.write_str(&zpl::qr_field(*x, *y, *module_size, data)),
            Self::Raw(markup) => f.write_str(markup),
        }
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// An ordered, append-only sequence of label directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDocument {
    directives: Vec<Directive>,
}

impl LabelDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directives in document order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Append a directive without touching any cursor.
    pub fn push(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    /// Emit `text`, split into hard chunks of `label_width / font_width`
    /// characters, one line per chunk.
    ///
    /// Centered chunks are placed at `(label_width - chars × font_width) / 2`,
    /// others at `x_start`. Empty text emits nothing.
    pub fn add_text_line(&mut self, layout: &mut PrintLayoutConfig, text: &str, centered: bool) {
        let per_line = layout.chars_per_line().max(1);
        let chars: Vec<char> = text.chars().collect();

        for chunk in chars.chunks(per_line) {
            let line: String = chunk.iter().collect();
            let x = if centered {
                let used = (chunk.len() as i32).saturating_mul(layout.font_width);
                layout.label_width.saturating_sub(used) / 2
            } else {
                layout.x_start
            };
            self.push(Directive::Text {
                x,
                y: layout.y_start,
                text: line,
            });
            layout.advance(layout.line_advance());
        }
    }

    /// Horizontal rule across the label.
    pub fn add_divider(&mut self, layout: &mut PrintLayoutConfig) {
        let (width, thickness, fill) = DIVIDER;
        self.push(Directive::Divider {
            x: layout.x_start,
            y: layout.y_start,
            width,
            thickness,
            fill,
        });
        layout.advance(layout.line_advance());
    }

    /// Skip `count` lines.
    pub fn add_empty_lines(&mut self, layout: &mut PrintLayoutConfig, count: u32) {
        layout.advance(layout.line_advance().saturating_mul(count));
    }

    /// Place the stored logo centered, assuming it is 200 dots wide.
    pub fn add_logo(&mut self, layout: &mut PrintLayoutConfig) {
        if !layout.use_logo {
            return;
        }
        self.push(Directive::Logo {
            x: layout.label_width.saturating_sub(LOGO_WIDTH) / 2,
            y: layout.y_start,
            name: layout.logo_name.clone(),
            mx: 1,
            my: 1,
        });
        layout.advance(LOGO_ADVANCE);
    }

    /// Place a QR code holding `data`.
    ///
    /// The symbol is always placed at x = 140; `centered` is accepted for
    /// call-site compatibility and has no effect. The cursor moves by the
    /// estimated symbol height (`23 × module_size`) plus a 40 dot gap.
    pub fn add_qr_code(
        &mut self,
        layout: &mut PrintLayoutConfig,
        data: &str,
        module_size: u32,
        _centered: bool,
    ) {
        let qr_width = module_size.saturating_mul(QR_MODULES);
        self.push(Directive::QrCode {
            x: QR_X,
            y: layout.y_start,
            module_size,
            data: data.to_string(),
        });
        layout.advance(qr_width.saturating_add(QR_GAP));
    }

    /// Append a previously authored logo block, moved to the cursor.
    ///
    /// The `y` of the block's first `^FOx,y` becomes the current cursor; `x`
    /// and everything else in the block are kept.
    pub fn add_logo_from_zpl_file(
        &mut self,
        layout: &mut PrintLayoutConfig,
        raw_block: &str,
        logo_height: u32,
    ) {
        if !layout.use_logo {
            return;
        }
        self.push(Directive::Raw(anchor::reanchor(raw_block, layout.y_start)));
        layout.advance(logo_height.saturating_add(LOGO_GAP));
    }

    /// Append a `~DG` definition block and place it centered.
    ///
    /// The graphic is recalled as `{logo_name}.GRF`, so `block` must define
    /// that name.
    pub fn add_logo_definition(
        &mut self,
        layout: &mut PrintLayoutConfig,
        block: &str,
        logo_width: i32,
        logo_height: u32,
    ) {
        if !layout.use_logo {
            return;
        }
        self.push(Directive::Raw(block.to_string()));
        self.push(Directive::Logo {
            x: layout.label_width.saturating_sub(logo_width) / 2,
            y: layout.y_start,
            name: format!("{}.GRF", layout.logo_name),
            mx: 1,
            my: 1,
        });
        layout.advance(logo_height.saturating_add(LOGO_GAP));
    }

    /// Text at an explicit `x` on the current line; the cursor stays put.
    pub fn add_text_at(&mut self, layout: &PrintLayoutConfig, x: i32, text: &str) {
        self.push(Directive::Text {
            x,
            y: layout.y_start,
            text: text.to_string(),
        });
    }

    /// Several texts on one line, each at its own `x`.
    pub fn add_line_with_columns(&mut self, layout: &mut PrintLayoutConfig, columns: &[(i32, &str)]) {
        for (x, text) in columns {
            self.add_text_at(layout, *x, text);
        }
        layout.advance(layout.line_advance());
    }

    /// `label` at the left margin, `value` (two decimals, padded to
    /// `fill_width` with trailing spaces) at `x_value`.
    pub fn add_label_value_line(
        &mut self,
        layout: &mut PrintLayoutConfig,
        label: &str,
        value: f64,
        x_value: i32,
        fill_width: usize,
    ) {
        let value = layout::fill(&format!("{:.2}", value), fill_width, FillAlign::Left);
        self.add_text_at(layout, layout.x_start, label);
        self.add_text_at(layout, x_value, &value);
        layout.advance(layout.line_advance());
    }

    /// `"{label}:"` at the left margin and the amount at x = 400.
    pub fn add_payment_line(&mut self, layout: &mut PrintLayoutConfig, label: &str, amount: f64) {
        self.add_text_at(layout, layout.x_start, &format!("{}:", label));
        self.add_text_at(layout, PAYMENT_X, &format!("{:.2}", amount));
        layout.advance(layout.line_advance());
    }

    /// Word-wrap `text` into lines of `width` characters, each centered with
    /// spaces, and emit them as text lines.
    pub fn add_paragraph(&mut self, layout: &mut PrintLayoutConfig, text: &str, width: usize) {
        for line in layout::wrap_and_center(text, width) {
            self.add_text_line(layout, &line, false);
        }
    }

    /// The directives as markup, one per line.
    pub fn to_zpl(&self) -> String {
        self.directives
            .iter()
            .map(Directive::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A complete label: format start with the layout's media settings, the
    /// directives, and the format end.
    ///
    /// ```
    /// use recibo::{LabelDocument, PrintLayoutConfig};
    ///
    /// let layout = PrintLayoutConfig::default();
    /// let doc = LabelDocument::new();
    /// assert_eq!(doc.to_label(&layout), "^XA^PW600^LL800^PR2^MTT\n^XZ");
    /// ```
    pub fn to_label(&self, layout: &PrintLayoutConfig) -> String {
        let header = format!(
            "{}{}{}{}{}",
            zpl::LABEL_START,
            zpl::print_width(layout.label_width),
            zpl::label_length(layout.label_length),
            zpl::print_rate(&layout.print_speed),
            zpl::media_type(&layout.media_mode)
        );

        let mut lines = Vec::with_capacity(self.directives.len() + 2);
        lines.push(header);
        lines.extend(self.directives.iter().map(Directive::to_string));
        lines.push(zpl::LABEL_END.to_string());
        lines.join("\n")
    }
}

impl fmt::Display for LabelDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_zpl())
    }
}

// ============================================================================
// TESTS
// ============================================================================
