use anyhow::{Context, Result};
use kmlview_core::MetadataField;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Viewer settings, usually read from a YAML file.
///
/// ```yaml
/// metadata_fields: [title, author]
/// show_empty_categories: false
/// hidden_categories:
///   - Temps
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ViewerConfig {
	/// Metadata items that get a leaf in the metadata category.
	pub metadata_fields: Vec<MetadataField>,

	/// List default categories without features in the category panel.
	pub show_empty_categories: bool,

	/// Categories hidden right after a document is loaded.
	pub hidden_categories: Vec<String>,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		ViewerConfig {
			metadata_fields: MetadataField::ALL.to_vec(),
			show_empty_categories: false,
			hidden_categories: Vec::new(),
		}
	}
}

impl ViewerConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path:?}"))
	}

	/// Loads the config at `path`, or the defaults if no path is given.
	pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
		path.map_or_else(|| Ok(ViewerConfig::default()), Self::from_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::io::Write;

	#[test]
	fn parse_config() {
		let config = ViewerConfig::from_string(
			"metadata_fields: [author]\nshow_empty_categories: true\nhidden_categories:\n  - Temps\n  - Paths\n",
		)
		.unwrap();
		assert_eq!(
			config,
			ViewerConfig {
				metadata_fields: vec![MetadataField::Author],
				show_empty_categories: true,
				hidden_categories: vec!["Temps".to_string(), "Paths".to_string()],
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(ViewerConfig::from_string("").unwrap(), ViewerConfig::default());
		assert_eq!(ViewerConfig::from_string("{}").unwrap(), ViewerConfig::default());
	}

	#[test]
	fn parse_invalid_config() {
		assert!(ViewerConfig::from_string("colors: true").is_err());
		assert!(ViewerConfig::from_string("metadata_fields: [subject]").is_err());
	}

	#[test]
	fn from_path() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "show_empty_categories: true")?;
		assert!(ViewerConfig::from_path(file.path())?.show_empty_categories);
		assert_eq!(ViewerConfig::from_optional_path(None)?, ViewerConfig::default());

		let error = ViewerConfig::from_path(Path::new("/missing.yml")).unwrap_err();
		assert!(error.to_string().contains("opening config"));
		Ok(())
	}
}
