//! Conversion from JSON schema types to a label document.

use std::fmt;

use crate::document::{LabelDocument, PrintLayoutConfig};
use crate::error::Result;

use super::schema::*;

/// Errors from JSON → document conversion.
#[derive(Debug)]
pub enum JsonApiError {
    /// A field value is invalid.
    InvalidField {
        line: &'static str,
        field: &'static str,
        message: String,
    },
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonApiError::InvalidField {
                line,
                field,
                message,
            } => write!(f, "{}: invalid {}: {}", line, field, message),
        }
    }
}

impl std::error::Error for JsonApiError {}

impl JsonLabel {
    /// Parse a JSON label.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the document, returning it with the layout as left by the last
    /// line (its `y_start` is where the next line would go).
    pub fn build(&self) -> std::result::Result<(LabelDocument, PrintLayoutConfig), JsonApiError> {
        let mut layout = self.layout.clone().unwrap_or_default();
        if layout.line_height < 0 {
            return Err(invalid("layout", "line_height", "must not be negative"));
        }
        let mut doc = LabelDocument::new();

        for line in &self.lines {
            line.apply(&mut doc, &mut layout)?;
        }

        if layout.exceeds_limit() {
            log::warn!(
                "label content ends at y={} past the height limit {}",
                layout.y_start,
                layout.label_height_limit
            );
        }

        Ok((doc, layout))
    }
}

impl JsonLine {
    fn apply(
        &self,
        doc: &mut LabelDocument,
        layout: &mut PrintLayoutConfig,
    ) -> std::result::Result<(), JsonApiError> {
        match self {
            JsonLine::Text(t) => doc.add_text_line(layout, &t.content, t.centered),
            JsonLine::Paragraph(p) => {
                let width = p.width.unwrap_or_else(|| layout.chars_per_line());
                if width == 0 {
                    return Err(invalid("paragraph", "width", "must be at least 1"));
                }
                doc.add_paragraph(layout, &p.content, width);
            }
            JsonLine::Divider => doc.add_divider(layout),
            JsonLine::Blank(b) => doc.add_empty_lines(layout, b.count),
            JsonLine::Logo => doc.add_logo(layout),
            JsonLine::QrCode(q) => {
                if q.module_size == 0 || q.module_size > 10 {
                    return Err(invalid("qr_code", "module_size", "must be 1-10"));
                }
                doc.add_qr_code(layout, &q.data, q.module_size, q.centered);
            }
            JsonLine::Columns(c) => {
                let columns: Vec<(i32, &str)> =
                    c.columns.iter().map(|col| (col.x, col.text.as_str())).collect();
                doc.add_line_with_columns(layout, &columns);
            }
            JsonLine::LabelValue(lv) => {
                doc.add_label_value_line(layout, &lv.label, lv.value, lv.x, lv.width)
            }
            JsonLine::Payment(p) => doc.add_payment_line(layout, &p.label, p.amount),
            JsonLine::LogoBlock(l) => doc.add_logo_from_zpl_file(layout, &l.block, l.height),
        }
        Ok(())
    }
}

fn invalid(line: &'static str, field: &'static str, message: &str) -> JsonApiError {
    JsonApiError::InvalidField {
        line,
        field,
        message: message.to_string(),
    }
}
