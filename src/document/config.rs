//! # Label Layout
//!
//! Geometry, font metrics and the vertical cursor of a label being built.
//!
//! All distances are printer dots. The cursor (`x_start`, `y_start`) marks
//! where the next directive lands; directives only ever move `y_start`
//! forward.
//!
//! ```text
//! (0,0) ┌──────────── label_width ────────────┐
//!       │                                     │
//!       │  x_start                            │
//!       │  ├─> ^FO30,400^FD...                │ ← y_start
//!       │                                     │
//!       │                                     │
//!       └─────────────────────────────────────┘ label_height_limit
//! ```

use serde::{Deserialize, Serialize};

/// # Print Layout Configuration
///
/// Owned by the caller and borrowed mutably by each
/// [`LabelDocument`](super::LabelDocument) operation.
///
/// Deserializes with defaults for missing fields, so a JSON layout only has
/// to name what differs:
///
/// ```
/// use recibo::PrintLayoutConfig;
///
/// let layout: PrintLayoutConfig = serde_json::from_str(r#"{"y_start": 100}"#).unwrap();
/// assert_eq!(layout.y_start, 100);
/// assert_eq!(layout.line_height, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintLayoutConfig {
    /// Left margin of left-aligned text
    pub x_start: i32,
    /// Vertical cursor
    pub y_start: i32,
    /// Largest cursor value a single label can hold
    pub label_height_limit: i32,
    /// Advance per text line
    pub line_height: i32,
    /// Font cell height
    pub font_height: i32,
    /// Font cell width, used to count characters per line
    pub font_width: i32,
    /// Printable label width (`^PW`)
    pub label_width: i32,
    /// Label length (`^LL`)
    pub label_length: i32,
    /// Print rate token (`^PR`)
    pub print_speed: String,
    /// Media type token (`^MT`)
    pub media_mode: String,
    /// Whether logo directives emit anything
    pub use_logo: bool,
    /// Name of the stored logo graphic
    pub logo_name: String,
    /// Smallest label height worth printing
    pub label_height_min: i32,
}

impl Default for PrintLayoutConfig {
    fn default() -> Self {
        Self {
            x_start: 30,
            y_start: 400,
            label_height_limit: 3200,
            line_height: 30,
            font_height: 24,
            font_width: 12,
            label_width: 600,
            label_length: 800,
            print_speed: "2".to_string(),
            media_mode: "T".to_string(),
            use_logo: true,
            logo_name: "logo".to_string(),
            label_height_min: 300,
        }
    }
}

impl PrintLayoutConfig {
    /// Characters that fit on one line with the current font cell.
    pub fn chars_per_line(&self) -> usize {
        if self.font_width <= 0 {
            return 0;
        }
        (self.label_width / self.font_width).max(0) as usize
    }

    /// Whether the cursor has moved past the label height limit.
    ///
    /// The builder never checks this itself; callers split long content
    /// across labels.
    pub fn exceeds_limit(&self) -> bool {
        self.y_start > self.label_height_limit
    }

    /// Dots left before the height limit (negative once exceeded).
    pub fn remaining_height(&self) -> i32 {
        self.label_height_limit.saturating_sub(self.y_start)
    }

    /// Move the cursor down by `dots`, stopping at `i32::MAX`.
    pub fn advance(&mut self, dots: u32) {
        let dots = i32::try_from(dots).unwrap_or(i32::MAX);
        self.y_start = self.y_start.saturating_add(dots);
    }

    /// Advance of one text line. A negative `line_height` counts as zero.
    pub fn line_advance(&self) -> u32 {
        u32::try_from(self.line_height).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = PrintLayoutConfig::default();
        assert_eq!((layout.x_start, layout.y_start), (30, 400));
        assert_eq!(layout.label_height_limit, 3200);
        assert_eq!(layout.label_height_min, 300);
        assert_eq!((layout.font_width, layout.font_height), (12, 24));
        assert_eq!(layout.print_speed, "2");
        assert_eq!(layout.media_mode, "T");
        assert!(layout.use_logo);
        assert_eq!(layout.logo_name, "logo");
    }

    #[test]
    fn test_chars_per_line() {
        assert_eq!(PrintLayoutConfig::default().chars_per_line(), 50);

        let broken = PrintLayoutConfig {
            font_width: 0,
            ..Default::default()
        };
        assert_eq!(broken.chars_per_line(), 0);
    }

    #[test]
    fn test_height_limit() {
        let mut layout = PrintLayoutConfig::default();
        assert!(!layout.exceeds_limit());
        assert_eq!(layout.remaining_height(), 2800);

        layout.y_start = 3200;
        assert!(!layout.exceeds_limit());

        layout.y_start = 3230;
        assert!(layout.exceeds_limit());
        assert_eq!(layout.remaining_height(), -30);
    }

    #[test]
    fn test_advance_saturates() {
        let mut layout = PrintLayoutConfig::default();
        layout.advance(30);
        assert_eq!(layout.y_start, 430);

        layout.advance(u32::MAX);
        assert_eq!(layout.y_start, i32::MAX);
        layout.advance(1);
        assert_eq!(layout.y_start, i32::MAX);
        assert!(layout.exceeds_limit());

        layout.label_height_limit = i32::MIN;
        assert_eq!(layout.remaining_height(), i32::MIN);
    }

    #[test]
    fn test_negative_line_height_does_not_advance() {
        let layout = PrintLayoutConfig {
            line_height: -30,
            ..Default::default()
        };
        assert_eq!(layout.line_advance(), 0);
        assert_eq!(PrintLayoutConfig::default().line_advance(), 30);
    }

    #[test]
    fn test_partial_json() {
        let layout: PrintLayoutConfig =
            serde_json::from_str(r#"{"use_logo": false, "logo_name": "brand"}"#).unwrap();
        assert!(!layout.use_logo);
        assert_eq!(layout.logo_name, "brand");
        assert_eq!(layout.label_width, 600);
    }
}
