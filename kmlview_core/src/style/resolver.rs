use super::Color;
use crate::document::{Feature, FeatureKind, StyleTable};

pub const DEFAULT_WIDTH: i32 = 2;

/// The effective paint style of a feature.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
	pub stroke_color: Color,
	pub fill_color: Color,
	pub line_color: Color,
	pub width: i32,
	pub icon: Option<String>,
}

impl ResolvedStyle {
	fn plain(color: &str, width: i32) -> Self {
		ResolvedStyle {
			stroke_color: Color::new(color),
			fill_color: Color::new(color),
			line_color: Color::new(color),
			width,
			icon: None,
		}
	}
}

/// Style used when a feature has no (known) style reference.
pub fn default_style(kind: FeatureKind) -> ResolvedStyle {
	match kind {
		FeatureKind::Marker | FeatureKind::Unknown => ResolvedStyle::plain("#4ecdc4", DEFAULT_WIDTH),
		FeatureKind::Line => ResolvedStyle::plain("#667eea", 4),
		FeatureKind::Polygon => ResolvedStyle {
			stroke_color: Color::new("#667eea"),
			fill_color: Color::new("#a3b1f5"),
			line_color: Color::new("#667eea"),
			width: DEFAULT_WIDTH,
			icon: None,
		},
		FeatureKind::GroundOverlay | FeatureKind::ScreenOverlay => ResolvedStyle::plain(Color::NEUTRAL, 1),
	}
}

/// Resolves the style of a feature against the document style table.
///
/// Line colors are preferred for strokes; the fill color is used when a style only
/// defines a polygon color.
pub fn resolve_style(feature: &Feature, styles: &StyleTable) -> ResolvedStyle {
	let Some(def) = feature.style_ref.as_deref().and_then(|r| styles.get(r)) else {
		return default_style(feature.kind);
	};

	ResolvedStyle {
		stroke_color: Color::decode(def.line_color.as_deref().or(def.poly_color.as_deref())),
		fill_color: Color::decode(def.poly_color.as_deref()),
		line_color: Color::decode(def.line_color.as_deref()),
		width: def.line_width.as_deref().and_then(parse_leading_int).unwrap_or(DEFAULT_WIDTH),
		icon: def.icon.clone(),
	}
}

/// Parses the integer prefix of a string: `"3.5px"` yields 3, `"px"` yields nothing.
fn parse_leading_int(value: &str) -> Option<i32> {
	let value = value.trim_start();
	let (sign, digits) = match value.as_bytes().first()? {
		b'-' => (-1, &value[1..]),
		b'+' => (1, &value[1..]),
		_ => (1, value),
	};
	let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
	digits[..end].parse::<i32>().ok().map(|v| sign * v)
}
