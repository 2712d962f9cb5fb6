//! # kmlview
//!
//! kmlview keeps the derived models of a parsed KML/GPX document: a tri-state visibility
//! tree over categories and features, per-feature paint styles, and approximate polygon
//! statistics.
//!
//! ## Usage Example
//!
//! ```rust
//! use kmlview::{ViewerConfig, ViewerSession, core::{Document, NodeRef, TriState}};
//!
//! let document = Document::from_json_str(r#"{
//!     "features": [
//!         {"type": "marker", "name": "Start", "coordinates": [48.1, 11.5]},
//!         {"type": "polygon", "name": "Zone", "coordinates": [[0, 0], [0, 0.001], [0.001, 0.001], [0.001, 0]]}
//!     ]
//! }"#).unwrap();
//!
//! let mut session = ViewerSession::load(document, &ViewerConfig::default());
//! let outcome = session.toggle(&NodeRef::category("Polygons"), false);
//! assert_eq!(outcome.removed_overlay_keys, vec!["feature_1"]);
//! assert_eq!(session.tree().root_state(), TriState::Indeterminate);
//!
//! let stats = session.resolve_geometry(1).unwrap();
//! assert_eq!(stats.formatted_area(), "12321 m²");
//! ```

pub mod config;
pub mod panel;
pub mod session;
pub mod summary;

pub use config::ViewerConfig;
pub use session::ViewerSession;

pub use kmlview_core as core;
pub use kmlview_geometry as geometry;
