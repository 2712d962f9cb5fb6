//! Human readable areas and distances.
//!
//! ```
//! use kmlview_geometry::{format_area, format_distance};
//!
//! assert_eq!(format_area(12321.0), "12321 m²");
//! assert_eq!(format_area(2_500_000.0), "2.50 km²");
//! assert_eq!(format_distance(444.0), "444 m");
//! assert_eq!(format_distance(1234.5), "1.23 km");
//! ```

pub fn format_area(area_m2: f64) -> String {
	if area_m2 < 1e6 {
		format!("{} m²", area_m2.round())
	} else if area_m2 < 1e9 {
		format!("{:.2} km²", area_m2 / 1e6)
	} else {
		format!("{:.0} km²", area_m2 / 1e6)
	}
}

pub fn format_distance(meters: f64) -> String {
	if meters < 1000.0 {
		format!("{} m", meters.round())
	} else {
		format!("{:.2} km", meters / 1000.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, "0 m²")]
	#[case(12320.6, "12321 m²")]
	#[case(999_999.0, "999999 m²")]
	#[case(1_000_000.0, "1.00 km²")]
	#[case(123_456_789.0, "123.46 km²")]
	#[case(1e9, "1000 km²")]
	#[case(5.5e10, "55000 km²")]
	fn area(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_area(value), expected);
	}

	#[rstest]
	#[case(0.4, "0 m")]
	#[case(444.0, "444 m")]
	#[case(999.4, "999 m")]
	#[case(1000.0, "1.00 km")]
	#[case(15_250.0, "15.25 km")]
	fn distance(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_distance(value), expected);
	}
}
