// src/bbox.rs

use tracing::trace;

use crate::constants::{EPSILON_RAD, M_2PI, M_PI};
use crate::iterators::LoopCursor;
use crate::latlng::constrain_lng;
use crate::types::{BBox, GeoLoop, LatLng, LinkedGeoLoop};

/// Whether the given bounding box crosses the antimeridian.
#[inline]
#[must_use]
pub fn bbox_is_transmeridian(bbox: &BBox) -> bool {
  bbox.east < bbox.west
}

/// Width of the bounding box in radians, accounting for antimeridian wrap.
#[inline]
#[must_use]
pub fn bbox_width_rads(bbox: &BBox) -> f64 {
  if bbox_is_transmeridian(bbox) {
    bbox.east - bbox.west + M_2PI
  } else {
    bbox.east - bbox.west
  }
}

/// Height of the bounding box in radians.
#[inline]
#[must_use]
pub fn bbox_height_rads(bbox: &BBox) -> f64 {
  bbox.north - bbox.south
}

/// Get the center of a bounding box.
#[inline]
#[must_use]
pub fn bbox_center(bbox: &BBox) -> LatLng {
  let east = if bbox_is_transmeridian(bbox) {
    bbox.east + M_2PI
  } else {
    bbox.east
  };
  LatLng {
    lat: (bbox.north + bbox.south) * 0.5,
    lng: constrain_lng((east + bbox.west) * 0.5),
  }
}

/// Whether the bounding box contains a given point. Bounds are inclusive.
///
/// For a transmeridian box the longitude must fall in `[west, PI]` or
/// `[-PI, east]`.
#[inline]
#[must_use]
pub fn bbox_contains_point(bbox: &BBox, point: &LatLng) -> bool {
  if point.lat < bbox.south || point.lat > bbox.north {
    return false;
  }
  if bbox_is_transmeridian(bbox) {
    point.lng >= bbox.west || point.lng <= bbox.east
  } else {
    point.lng >= bbox.west && point.lng <= bbox.east
  }
}

/// Whether two bounding boxes are equal within `EPSILON_RAD` on every bound.
#[inline]
#[must_use]
pub fn bbox_equals(b1: &BBox, b2: &BBox) -> bool {
  (b1.north - b2.north).abs() < EPSILON_RAD
    && (b1.south - b2.south).abs() < EPSILON_RAD
    && (b1.east - b2.east).abs() < EPSILON_RAD
    && (b1.west - b2.west).abs() < EPSILON_RAD
}

/// Create a bounding box from a simple polygon loop, in one pass over its
/// edges. Returns the box and whether the loop crosses the antimeridian.
///
/// An empty loop yields an all-zero box, which callers treat as "no data".
///
/// Known limitations:
/// - Two adjacent vertices more than 180 degrees of longitude apart are
///   always interpreted as an edge crossing the antimeridian.
/// - Polygons containing a pole are not supported.
/// - For transmeridian loops the bounds are the raw longitude extremes
///   swapped, so the box can be narrower than the loop when its vertices are
///   not clustered near the antimeridian.
pub fn bbox_from_loop<L: LoopCursor + ?Sized>(geoloop: &L) -> (BBox, bool) {
  if geoloop.is_empty() {
    trace!("empty loop, using zero bbox");
    return (BBox::default(), false);
  }

  let mut bbox = BBox {
    north: -f64::MAX,
    south: f64::MAX,
    east: -f64::MAX,
    west: f64::MAX,
  };
  let mut is_transmeridian = false;

  for (coord, next) in geoloop.edges() {
    let lat = coord.lat;
    let lng = coord.lng;
    if lat < bbox.south {
      bbox.south = lat;
    }
    if lng < bbox.west {
      bbox.west = lng;
    }
    if lat > bbox.north {
      bbox.north = lat;
    }
    if lng > bbox.east {
      bbox.east = lng;
    }
    // arcs > 180 degrees longitude are taken to cross the antimeridian
    if (lng - next.lng).abs() > M_PI {
      is_transmeridian = true;
    }
  }

  if is_transmeridian {
    std::mem::swap(&mut bbox.east, &mut bbox.west);
    trace!(west = bbox.west, east = bbox.east, "loop crosses the antimeridian");
  }
  (bbox, is_transmeridian)
}

/// Create a bounding box from a `GeoLoop`.
#[inline]
pub fn bbox_from_geoloop(geoloop: &GeoLoop) -> BBox {
  bbox_from_loop(geoloop).0
}

/// Create a bounding box from a `LinkedGeoLoop`.
#[inline]
pub fn bbox_from_linked_geoloop(linked: &LinkedGeoLoop) -> BBox {
  bbox_from_loop(linked).0
}
