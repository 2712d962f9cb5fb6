use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer};
use std::{collections::HashMap, fmt::Display};

/// A raw style definition as found in the document. Values are not normalized here;
/// colors are decoded when a style is resolved.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StyleDef {
	#[serde(default, deserialize_with = "string_or_number")]
	pub line_color: Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub poly_color: Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub line_width: Option<String>,
	#[serde(default)]
	pub icon: Option<String>,
}

/// Document-level mapping from style id to style definition.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StyleTable(HashMap<String, StyleDef>);

impl StyleTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, id: &str, def: StyleDef) {
		self.0.insert(id.to_string(), def);
	}

	/// Looks up a style reference such as `#track`; the leading `#` is optional.
	pub fn get(&self, style_ref: &str) -> Option<&StyleDef> {
		self.0.get(style_ref.strip_prefix('#').unwrap_or(style_ref))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// A folder declared by the document. KML folders do not need a `<name>`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FolderInfo {
	#[serde(default)]
	pub name: Option<String>,
}

impl FolderInfo {
	pub fn named(name: &str) -> Self {
		FolderInfo {
			name: Some(name.to_string()),
		}
	}

	/// The folder name, unless it is missing or blank.
	pub fn label(&self) -> Option<&str> {
		self.name.as_deref().filter(|n| !n.trim().is_empty())
	}
}

/// The metadata items that may be shown in the metadata panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
	Title,
	Description,
	Author,
}

impl MetadataField {
	pub const ALL: [MetadataField; 3] = [MetadataField::Title, MetadataField::Description, MetadataField::Author];

	pub fn as_str(&self) -> &str {
		match self {
			MetadataField::Title => "title",
			MetadataField::Description => "description",
			MetadataField::Author => "author",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim().to_lowercase().as_str() {
			"title" => MetadataField::Title,
			"description" => MetadataField::Description,
			"author" => MetadataField::Author,
			_ => bail!("Unknown metadata field '{value}'. Expected title, description or author"),
		})
	}
}

impl Display for MetadataField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetadataItem {
	pub field: MetadataField,
	pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Metadata {
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub folders: Vec<FolderInfo>,
	#[serde(default)]
	pub styles: StyleTable,
}

impl Metadata {
	pub fn get(&self, field: MetadataField) -> Option<&str> {
		match field {
			MetadataField::Title => self.title.as_deref(),
			MetadataField::Description => self.description.as_deref(),
			MetadataField::Author => self.author.as_deref(),
		}
	}

	/// All metadata items worth displaying, in panel order. Blank values are skipped.
	pub fn displayable_items(&self) -> Vec<MetadataItem> {
		MetadataField::ALL
			.iter()
			.filter_map(|field| {
				let value = self.get(*field)?.trim();
				(!value.is_empty()).then(|| MetadataItem {
					field: *field,
					value: value.to_string(),
				})
			})
			.collect()
	}
}

/// Accepts `"4"` as well as `4` for values the parser may emit either way.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
		None | Some(serde_json::Value::Null) => None,
		Some(serde_json::Value::String(s)) => Some(s),
		Some(other) => Some(other.to_string()),
	})
}
