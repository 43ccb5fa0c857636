//! JSON schema types for the label API.

use serde::Deserialize;

use crate::document::PrintLayoutConfig;

fn default_true() -> bool {
    true
}

fn default_one() -> u32 {
    1
}

fn default_module_size() -> u32 {
    5
}

fn default_value_x() -> i32 {
    400
}

fn default_value_width() -> usize {
    10
}

/// Top-level JSON label.
#[derive(Debug, Deserialize)]
pub struct JsonLabel {
    /// Layout overrides; missing fields keep their defaults.
    #[serde(default)]
    pub layout: Option<PrintLayoutConfig>,
    /// Lines in print order.
    pub lines: Vec<JsonLine>,
}

/// A single line (or block) of the label.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonLine {
    Text(JsonText),
    Paragraph(JsonParagraph),
    Divider,
    Blank(JsonBlank),
    Logo,
    QrCode(JsonQrCode),
    Columns(JsonColumns),
    LabelValue(JsonLabelValue),
    Payment(JsonPayment),
    LogoBlock(JsonLogoBlock),
}

/// Text, hard-wrapped at the label width.
#[derive(Debug, Deserialize)]
pub struct JsonText {
    pub content: String,
    #[serde(default)]
    pub centered: bool,
}

/// Word-wrapped, space-centered text.
#[derive(Debug, Deserialize)]
pub struct JsonParagraph {
    pub content: String,
    /// Characters per line (default: what fits the label).
    #[serde(default)]
    pub width: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct JsonBlank {
    #[serde(default = "default_one")]
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct JsonQrCode {
    pub data: String,
    #[serde(default = "default_module_size")]
    pub module_size: u32,
    #[serde(default = "default_true")]
    pub centered: bool,
}

#[derive(Debug, Deserialize)]
pub struct JsonColumns {
    pub columns: Vec<JsonColumn>,
}

/// One column: text at an absolute `x`.
#[derive(Debug, Deserialize)]
pub struct JsonColumn {
    pub x: i32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonLabelValue {
    pub label: String,
    pub value: f64,
    /// Horizontal position of the value.
    #[serde(default = "default_value_x")]
    pub x: i32,
    /// Width the formatted value is padded to.
    #[serde(default = "default_value_width")]
    pub width: usize,
}

#[derive(Debug, Deserialize)]
pub struct JsonPayment {
    pub label: String,
    pub amount: f64,
}

/// A previously authored logo block, moved to the cursor.
#[derive(Debug, Deserialize)]
pub struct JsonLogoBlock {
    pub block: String,
    pub height: u32,
}
