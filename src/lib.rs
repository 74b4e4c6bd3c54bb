#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)] // Test fixtures build coordinates from indices
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // H3 fixture coordinates are clearer unseparated
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `xs-geoloop` implements the loop algorithms of Uber's H3 library: an
//! antimeridian-aware point-in-polygon test and a bounding box builder that
//! detects antimeridian crossing.
//!
//! Both algorithms are written once against [`LoopCursor`] and work on any
//! loop representation implementing it: [`GeoLoop`] (contiguous vertices),
//! [`LinkedGeoLoop`] (linked vertex nodes) and plain `[LatLng]` slices.
//!
//! ```
//! use xs_geoloop::{bbox_from_loop, point_inside_loop, GeoLoop, LatLng};
//!
//! let geoloop: GeoLoop = [(-1.0, 179.0), (-1.0, -179.0), (1.0, -179.0), (1.0, 179.0)]
//!   .iter()
//!   .map(|&(lat, lng)| LatLng::from_degrees(lat, lng))
//!   .collect();
//!
//! let (bbox, is_transmeridian) = bbox_from_loop(&geoloop);
//! assert!(is_transmeridian && bbox.west > bbox.east);
//! assert!(point_inside_loop(&geoloop, &bbox, &LatLng::new(0.0, std::f64::consts::PI)));
//! ```

// Declare modules
pub mod bbox;
pub mod constants;
pub mod iterators;
pub mod latlng;
pub mod linked_geo;
pub mod polygon;
pub mod types;

// Re-export key public types and functions for easier use
pub use bbox::{
  bbox_center, bbox_contains_point, bbox_equals, bbox_from_geoloop, bbox_from_linked_geoloop, bbox_from_loop,
  bbox_height_rads, bbox_is_transmeridian, bbox_width_rads,
};
pub use iterators::{GeoLoopEdges, LinkedGeoLoopEdges, LoopCursor};
pub use latlng::{
  constrain_lng, degs_to_rads, geo_almost_equal, geo_almost_equal_threshold, normalize_lng,
  normalize_lng_for_comparison, rads_to_degs, validate_lat_lng, LongitudeNormalization,
};
pub use linked_geo::LinkedVerts;
pub use polygon::{
  is_clockwise_geoloop, is_clockwise_linked_geoloop, is_clockwise_loop, loop_contains_point, point_inside_geoloop,
  point_inside_linked_geoloop, point_inside_loop,
};
pub use types::{BBox, GeoError, GeoLoop, LatLng, LinkedGeoLoop, LinkedLatLng};
