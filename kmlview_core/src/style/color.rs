//! Decoding of the packed hex colors used in KML style definitions.
//!
//! KML stores colors as `aabbggrr`: alpha first, then blue, green and red. Display
//! surfaces want `#rrggbb`, so eight-character values are reordered and the alpha
//! channel is dropped. Everything else is assumed to already be a display color.
//!
//! # Examples
//!
//! ```
//! use kmlview_core::style::Color;
//!
//! assert_eq!(Color::decode(Some("ff0000ff")).as_str(), "#ff0000");
//! assert_eq!(Color::decode(Some("336699")).as_str(), "#336699");
//! assert_eq!(Color::decode(None), Color::neutral());
//! ```

use std::fmt::Display;

/// A display color, usually in `#rrggbb` form.
///
/// Decoded values are not validated, so malformed input is carried through as is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
	pub const NEUTRAL: &'static str = "#808080";

	pub fn new(value: &str) -> Self {
		Color(value.to_string())
	}

	pub fn neutral() -> Self {
		Color::new(Self::NEUTRAL)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Decodes a raw color from a style definition.
	pub fn decode(raw: Option<&str>) -> Self {
		let Some(raw) = raw.filter(|r| !r.is_empty()) else {
			return Color::neutral();
		};

		let chars: Vec<char> = raw.chars().collect();
		if let &[_, _, b1, b2, g1, g2, r1, r2] = chars.as_slice() {
			return Color(format!("#{r1}{r2}{g1}{g2}{b1}{b2}"));
		}

		if raw.starts_with('#') {
			Color(raw.to_string())
		} else {
			Color(format!("#{raw}"))
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
