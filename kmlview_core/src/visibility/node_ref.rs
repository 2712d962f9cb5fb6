use crate::document::MetadataField;
use anyhow::{Context, Result, bail};
use std::{fmt::Display, str::FromStr};

/// A leaf of the visibility tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeafRef {
	Feature(usize),
	Metadata(MetadataField),
}

/// Any node of the visibility tree, as addressed by toggle operations.
///
/// The textual form is `root`, `category:<name>`, `feature:<id>` or `metadata:<field>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
	Root,
	Category(String),
	Leaf(LeafRef),
}

impl NodeRef {
	pub fn category(name: &str) -> Self {
		NodeRef::Category(name.to_string())
	}

	pub fn feature(id: usize) -> Self {
		NodeRef::Leaf(LeafRef::Feature(id))
	}

	pub fn metadata(field: MetadataField) -> Self {
		NodeRef::Leaf(LeafRef::Metadata(field))
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		let value = value.trim();
		if value.eq_ignore_ascii_case("root") {
			return Ok(NodeRef::Root);
		}
		let Some((kind, name)) = value.split_once(':') else {
			bail!("Invalid node reference '{value}'. Expected root, category:<name>, feature:<id> or metadata:<field>");
		};
		Ok(match kind.trim().to_lowercase().as_str() {
			"category" => NodeRef::Category(name.to_string()),
			"feature" => NodeRef::feature(
				name
					.trim()
					.parse()
					.with_context(|| format!("Invalid feature id '{name}'"))?,
			),
			"metadata" => NodeRef::metadata(MetadataField::parse_str(name)?),
			_ => bail!("Unknown node type '{kind}'. Expected category, feature or metadata"),
		})
	}
}

impl FromStr for NodeRef {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		NodeRef::parse_str(s)
	}
}

impl Display for NodeRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			NodeRef::Root => f.write_str("root"),
			NodeRef::Category(name) => write!(f, "category:{name}"),
			NodeRef::Leaf(LeafRef::Feature(id)) => write!(f, "feature:{id}"),
			NodeRef::Leaf(LeafRef::Metadata(field)) => write!(f, "metadata:{field}"),
		}
	}
}

impl From<LeafRef> for NodeRef {
	fn from(value: LeafRef) -> Self {
		NodeRef::Leaf(value)
	}
}
