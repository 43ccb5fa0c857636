//! # Text Layout
//!
//! Pure helpers for fixed-width receipt text: centering a line, greedy
//! word-wrapping a paragraph into centered lines, and fixed-width field
//! filling for amounts.
//!
//! Widths are counted in characters, not bytes, so accented text centers the
//! same as ASCII.
//!
//! ```
//! use recibo::layout::{self, FillAlign};
//!
//! assert_eq!(layout::center_text("AB", 6), "  AB  ");
//!
//! let lines: Vec<String> = layout::wrap_and_center("gracias por su compra", 10).collect();
//! assert_eq!(lines, vec![" gracias  ", "  por su  ", "  compra  "]);
//!
//! assert_eq!(layout::fill("5", 6, FillAlign::ZeroPad), "000005");
//! ```

use std::str::Split;

/// Center `text` within `total_width` columns.
///
/// Text that is already `total_width` or longer is returned unchanged, never
/// truncated. Odd gaps put the extra space on the right.
pub fn center_text(text: &str, total_width: usize) -> String {
    let len = text.chars().count();
    if len >= total_width {
        return text.to_string();
    }

    let gap = total_width - len;
    let left = gap / 2;
    let right = gap - left;

    let mut line = String::with_capacity(text.len() + gap);
    line.extend(std::iter::repeat_n(' ', left));
    line.push_str(text);
    line.extend(std::iter::repeat_n(' ', right));
    line
}

/// Greedily word-wrap `text` into lines of at most `total_width` columns and
/// center each one.
///
/// Words are separated by single spaces. A word longer than `total_width` is
/// emitted on its own line untouched. The returned iterator is lazy and can be
/// cloned to restart from the same position.
pub fn wrap_and_center(text: &str, total_width: usize) -> CenteredLines<'_> {
    CenteredLines {
        words: text.split(' '),
        total_width,
        carry: None,
    }
}

/// Iterator returned by [`wrap_and_center`].
#[derive(Debug, Clone)]
pub struct CenteredLines<'a> {
    words: Split<'a, char>,
    total_width: usize,
    /// Word that did not fit on the previous line.
    carry: Option<&'a str>,
}

impl<'a> CenteredLines<'a> {
    fn next_word(&mut self) -> Option<&'a str> {
        if let Some(word) = self.carry.take() {
            return Some(word);
        }
        // consecutive spaces split into empty words
        self.words.by_ref().find(|word| !word.is_empty())
    }
}

impl Iterator for CenteredLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = String::new();
        let mut len = 0;

        while let Some(word) = self.next_word() {
            let word_len = word.chars().count();
            if len > 0 && len + word_len + 1 > self.total_width {
                self.carry = Some(word);
                break;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += word_len;
        }

        if len == 0 {
            None
        } else {
            Some(center_text(&line, self.total_width))
        }
    }
}

/// Padding policy for [`fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAlign {
    /// Left aligned: pad with spaces on the right (code 0).
    Left,
    /// Right aligned: pad with zeros on the left (code 1).
    ZeroPad,
}

impl FillAlign {
    /// Map the numeric alignment codes used by receipt templates.
    ///
    /// Unknown codes return `None`, which [`fill_code`] treats as "leave the
    /// text unchanged".
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::ZeroPad),
            _ => None,
        }
    }
}

/// Pad `text` to `length` columns according to `align`.
///
/// Text already `length` or longer is returned unchanged.
pub fn fill(text: &str, length: usize, align: FillAlign) -> String {
    let pad = length.saturating_sub(text.chars().count());
    match align {
        FillAlign::Left => format!("{}{}", text, " ".repeat(pad)),
        FillAlign::ZeroPad => format!("{}{}", "0".repeat(pad), text),
    }
}

/// [`fill`] driven by a numeric alignment code (0 = left, 1 = zero pad).
pub fn fill_code(text: &str, length: usize, code: u8) -> String {
    match FillAlign::from_code(code) {
        Some(align) => fill(text, length, align),
        None => text.to_string(),
    }
}
