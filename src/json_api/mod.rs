//! # JSON API
//!
//! Describe a label as JSON and turn it into a [`LabelDocument`].
//!
//! Each entry of `lines` maps to one document operation; `layout` overrides
//! any subset of [`PrintLayoutConfig`].
//!
//! ## Example
//!
//! ```
//! use recibo::json_api::JsonLabel;
//!
//! let json = r#"{
//!     "layout": {"use_logo": false},
//!     "lines": [
//!         {"type": "logo"},
//!         {"type": "text", "content": "CAFE", "centered": true},
//!         {"type": "divider"},
//!         {"type": "payment", "label": "Total", "amount": 4.5}
//!     ]
//! }"#;
//!
//! let label = JsonLabel::from_json(json).unwrap();
//! let (doc, layout) = label.build().unwrap();
//! assert_eq!(layout.y_start, 490);
//! assert!(doc.to_label(&layout).starts_with("^XA"));
//! ```
//!
//! [`LabelDocument`]: crate::LabelDocument
//! [`PrintLayoutConfig`]: crate::PrintLayoutConfig

mod convert;
mod schema;

pub use convert::JsonApiError;
pub use schema::{JsonLabel, JsonLine};
