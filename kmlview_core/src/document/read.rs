use super::{CoordinateTree, Feature, FeatureKind, Metadata, StyleTable};
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Deserialize)]
struct FeatureRecord {
	#[serde(rename = "type", default)]
	kind: Option<String>,
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	description: Option<String>,
	#[serde(default)]
	coordinates: CoordinateTree,
	#[serde(default)]
	altitude: Option<f64>,
	#[serde(default)]
	style: Option<String>,
	#[serde(default)]
	folder: Option<String>,
	#[serde(default)]
	is_annotation: Option<bool>,
	#[serde(default)]
	index: Option<usize>,
}

#[derive(Deserialize)]
struct DocumentRecord {
	#[serde(default)]
	features: Vec<FeatureRecord>,
	#[serde(default)]
	metadata: Metadata,
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.trim().is_empty())
}

impl FeatureRecord {
	fn into_feature(self, id: usize) -> Feature {
		Feature {
			id,
			kind: self.kind.as_deref().map_or(FeatureKind::Unknown, FeatureKind::parse_str),
			name: non_empty(self.name),
			description: non_empty(self.description),
			coordinates: self.coordinates,
			altitude: self.altitude,
			style_ref: non_empty(self.style),
			folder: non_empty(self.folder),
			is_annotation: self.is_annotation.unwrap_or(false),
			point_index: self.index,
		}
	}
}

/// A loaded document: its features in document order and its metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
	pub features: Vec<Feature>,
	pub metadata: Metadata,
}

impl Document {
	/// Creates a document and (re)assigns feature ids from their positions.
	pub fn new(mut features: Vec<Feature>, metadata: Metadata) -> Self {
		for (id, feature) in features.iter_mut().enumerate() {
			feature.id = id;
		}
		Document { features, metadata }
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		let record: DocumentRecord = serde_json::from_str(json).context("parsing document JSON")?;
		Ok(Self::from_record(record))
	}

	pub fn from_reader(reader: impl Read) -> Result<Self> {
		let record: DocumentRecord = serde_json::from_reader(reader).context("parsing document JSON")?;
		Ok(Self::from_record(record))
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening document {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("reading document {path:?}"))
	}

	fn from_record(record: DocumentRecord) -> Self {
		let features: Vec<Feature> = record
			.features
			.into_iter()
			.enumerate()
			.map(|(id, f)| f.into_feature(id))
			.collect();
		debug!(
			"loaded document with {} features, {} folders and {} styles",
			features.len(),
			record.metadata.folders.len(),
			record.metadata.styles.len()
		);
		Document {
			features,
			metadata: record.metadata,
		}
	}

	pub fn feature(&self, id: usize) -> Option<&Feature> {
		self.features.get(id)
	}

	pub fn style_table(&self) -> &StyleTable {
		&self.metadata.styles
	}
}
