//! Planar ring measurements.
//!
//! Coordinates are treated as plain x/y degrees and scaled with a fixed factor of
//! 111 km per degree. This is a small-extent approximation and not geodesically
//! correct: there is no latitude correction and the earth is flat. Displayed values
//! depend on exactly this scale.

use geo::{Area, LineString, Polygon};

pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Unsigned shoelace area of a ring, in square degrees.
pub fn area_deg2(ring: &LineString<f64>) -> f64 {
	Polygon::new(ring.clone(), vec![]).unsigned_area()
}

/// Approximate area of a ring in square meters.
pub fn area_m2(ring: &LineString<f64>) -> f64 {
	area_deg2(ring) * METERS_PER_DEGREE * METERS_PER_DEGREE
}

/// Length of the closed ring (last vertex back to the first), in degrees.
pub fn perimeter_deg(ring: &LineString<f64>) -> f64 {
	let coords = &ring.0;
	let Some(mut previous) = coords.last() else {
		return 0.0;
	};
	let mut sum = 0.0;
	for coord in coords {
		sum += (coord.x - previous.x).hypot(coord.y - previous.y);
		previous = coord;
	}
	sum
}

/// Approximate perimeter of a ring in meters.
pub fn perimeter_m(ring: &LineString<f64>) -> f64 {
	perimeter_deg(ring) * METERS_PER_DEGREE
}
