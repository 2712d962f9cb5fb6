use serde::Deserialize;
use std::fmt::Debug;

/// The coordinate payload of a feature, kept exactly as nested in the parser output.
///
/// Markers carry a single `[lat, lng]` pair, lines a list of pairs and polygons either a
/// ring, a ring with holes or several rings. Nothing is validated at load time: values that
/// are neither numbers nor lists end up in `Other`, and it is up to the consumer
/// (see the polygon resolver) to reject shapes it cannot interpret.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordinateTree {
	Number(f64),
	List(Vec<CoordinateTree>),
	Other(serde_json::Value),
}

impl CoordinateTree {
	#[must_use]
	pub fn as_number(&self) -> Option<f64> {
		match self {
			CoordinateTree::Number(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_list(&self) -> Option<&[CoordinateTree]> {
		match self {
			CoordinateTree::List(list) => Some(list),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_list(&self) -> bool {
		matches!(self, CoordinateTree::List(_))
	}

	/// Number of entries at the top level. Zero for anything that is not a list.
	#[must_use]
	pub fn len(&self) -> usize {
		self.as_list().map_or(0, <[CoordinateTree]>::len)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Interprets this node as a position: a list whose first two entries are numbers.
	/// Further entries (altitude) are ignored.
	#[must_use]
	pub fn as_position(&self) -> Option<[f64; 2]> {
		match self.as_list()? {
			[a, b, ..] => Some([a.as_number()?, b.as_number()?]),
			_ => None,
		}
	}

	/// Returns `true` if this node is a list starting with a number, i.e. it looks like a position.
	#[must_use]
	pub fn starts_with_number(&self) -> bool {
		self.as_list().and_then(<[CoordinateTree]>::first).is_some_and(|c| c.as_number().is_some())
	}

	/// Returns `true` if this node is a list whose first entry is itself a list.
	#[must_use]
	pub fn starts_with_list(&self) -> bool {
		self.as_list().and_then(<[CoordinateTree]>::first).is_some_and(CoordinateTree::is_list)
	}
}

impl Default for CoordinateTree {
	fn default() -> Self {
		CoordinateTree::List(Vec::new())
	}
}

impl From<f64> for CoordinateTree {
	fn from(value: f64) -> Self {
		CoordinateTree::Number(value)
	}
}

impl From<i32> for CoordinateTree {
	fn from(value: i32) -> Self {
		CoordinateTree::Number(f64::from(value))
	}
}

impl<T: Into<CoordinateTree>> From<Vec<T>> for CoordinateTree {
	fn from(value: Vec<T>) -> Self {
		CoordinateTree::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<CoordinateTree>, const N: usize> From<[T; N]> for CoordinateTree {
	fn from(value: [T; N]) -> Self {
		CoordinateTree::List(value.into_iter().map(Into::into).collect())
	}
}

impl Debug for CoordinateTree {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CoordinateTree::Number(v) => v.fmt(f),
			CoordinateTree::List(list) => f.debug_list().entries(list).finish(),
			CoordinateTree::Other(value) => write!(f, "{value}"),
		}
	}
}
