//! Field-origin (`^FO x,y`) scanning and rewriting.
//!
//! Logo blocks exported by label design tools carry their own placement
//! command. To stack them under the rest of a receipt, the vertical
//! coordinate of that placement is replaced with the document cursor while
//! the horizontal coordinate is kept.

use std::ops::Range;

const FIELD_ORIGIN: &str = "^FO";

/// One `^FOx,y` occurrence inside a block.
///
/// Coordinates too large for `u64` read as `u64::MAX`; the placement is
/// still found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Horizontal coordinate in dots
    pub x: u64,
    /// Vertical coordinate in dots
    pub y: u64,
    /// Byte range of the `y` digits in the scanned text
    y_span: Range<usize>,
}

/// All well-formed `^FOx,y` placements in `block`, in order.
///
/// Malformed origins (missing digits or comma) are skipped.
pub fn placements(block: &str) -> Vec<Placement> {
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(offset) = block[from..].find(FIELD_ORIGIN) {
        let start = from + offset + FIELD_ORIGIN.len();
        match parse_origin(block, start) {
            Some(placement) => {
                from = placement.y_span.end;
                found.push(placement);
            }
            None => from = start,
        }
    }

    found
}

/// Replace the `y` of the first well-formed placement in `block` with `y`.
///
/// `x` and the rest of the block are kept byte for byte. A block without any
/// placement is returned unchanged.
///
/// ```
/// use recibo::logo::anchor;
///
/// let block = "~DGLOGO.GRF,1,1,FF^FO50,0^XGLOGO.GRF,1,1^FS";
/// assert_eq!(
///     anchor::reanchor(block, 640),
///     "~DGLOGO.GRF,1,1,FF^FO50,640^XGLOGO.GRF,1,1^FS"
/// );
/// ```
pub fn reanchor(block: &str, y: i32) -> String {
    match placements(block).into_iter().next() {
        Some(first) => {
            let mut out = String::with_capacity(block.len() + 4);
            out.push_str(&block[..first.y_span.start]);
            out.push_str(&y.to_string());
            out.push_str(&block[first.y_span.end..]);
            out
        }
        None => {
            log::debug!("logo block has no ^FO placement, appended as-is");
            block.to_string()
        }
    }
}

fn parse_origin(text: &str, start: usize) -> Option<Placement> {
    let bytes = text.as_bytes();

    let x_end = digits_end(bytes, start);
    if x_end == start || bytes.get(x_end) != Some(&b',') {
        return None;
    }
    let y_start = x_end + 1;
    let y_end = digits_end(bytes, y_start);
    if y_end == y_start {
        return None;
    }

    Some(Placement {
        x: coordinate(&text[start..x_end]),
        y: coordinate(&text[y_start..y_end]),
        y_span: y_start..y_end,
    })
}

// `digits` is non-empty ASCII digits, so overflow is the only failure.
fn coordinate(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| start + n)
}
