// src/polygon.rs

use tracing::trace;

use crate::bbox::{bbox_contains_point, bbox_from_loop, bbox_is_transmeridian};
use crate::constants::{M_PI, TIE_BREAK_EPSILON};
use crate::iterators::LoopCursor;
use crate::latlng::normalize_lng;
use crate::types::{BBox, GeoLoop, LatLng, LinkedGeoLoop};

/// Core loop of the point-in-polygon algorithm (even-odd rule), shared by
/// every loop representation.
///
/// `bbox` must be the box computed by [`bbox_from_loop`] for this loop; it is
/// used to reject points early and to pick the longitude frame.
///
/// A point whose longitude ties with an edge endpoint is nudged west by
/// `f64::EPSILON`, and the nudge carries over to the remaining edges. The
/// latitude bracket is inclusive at both ends, so a query latitude equal to a
/// vertex latitude is seen by both edges meeting at that vertex.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn point_inside_loop<L: LoopCursor + ?Sized>(geoloop: &L, bbox: &BBox, coord: &LatLng) -> bool {
  // fail fast if we're outside the bounding box
  if !bbox_contains_point(bbox, coord) {
    return false;
  }
  let is_transmeridian = bbox_is_transmeridian(bbox);
  let mut contains = false;

  let lat = coord.lat;
  let mut lng = normalize_lng(coord.lng, is_transmeridian);

  for (mut a, mut b) in geoloop.edges() {
    // Ray casting needs the second point above the first
    if a.lat > b.lat {
      std::mem::swap(&mut a, &mut b);
    }

    // The test ray cannot cross an edge entirely above or below it
    if lat < a.lat || lat > b.lat {
      continue;
    }

    let a_lng = normalize_lng(a.lng, is_transmeridian);
    let b_lng = normalize_lng(b.lng, is_transmeridian);

    // Rays are cast in the longitudinal direction; on an exact match bias
    // westerly to break the tie
    if a_lng == lng || b_lng == lng {
      lng -= TIE_BREAK_EPSILON;
      trace!(lat, lng, "query longitude ties with an edge endpoint");
    }

    // Longitude of the edge at the query latitude. A horizontal edge gives a
    // NaN ratio here, which never compares greater and so never toggles.
    let ratio = (lat - a.lat) / (b.lat - a.lat);
    let test_lng = normalize_lng(a_lng + (b_lng - a_lng) * ratio, is_transmeridian);

    if test_lng > lng {
      contains = !contains;
    }
  }

  contains
}

/// Take a given `GeoLoop` and check if it contains a given geo coordinate.
///
/// # Arguments
/// * `geoloop` - The geoloop.
/// * `bbox` - The pre-calculated bounding box for the `geoloop`.
/// * `coord` - The coordinate to check.
#[inline]
#[must_use]
pub fn point_inside_geoloop(geoloop: &GeoLoop, bbox: &BBox, coord: &LatLng) -> bool {
  point_inside_loop(geoloop, bbox, coord)
}

/// Take a given `LinkedGeoLoop` and check if it contains a given geo
/// coordinate.
#[inline]
#[must_use]
pub fn point_inside_linked_geoloop(linked: &LinkedGeoLoop, bbox: &BBox, coord: &LatLng) -> bool {
  point_inside_loop(linked, bbox, coord)
}

fn is_clockwise_normalized<L: LoopCursor + ?Sized>(geoloop: &L, is_transmeridian: bool) -> bool {
  let mut sum = 0.0;
  for (a, b) in geoloop.edges() {
    // a transmeridian arc means starting over in the shifted frame
    if !is_transmeridian && (a.lng - b.lng).abs() > M_PI {
      return is_clockwise_normalized(geoloop, true);
    }
    sum += (normalize_lng(b.lng, is_transmeridian) - normalize_lng(a.lng, is_transmeridian)) * (b.lat + a.lat);
  }
  sum > 0.0
}

/// Whether the winding order of a loop is clockwise, with longitude as x and
/// latitude as y. Uses the sum over the edges of `(x2 - x1)(y2 + y1)`.
#[must_use]
pub fn is_clockwise_loop<L: LoopCursor + ?Sized>(geoloop: &L) -> bool {
  is_clockwise_normalized(geoloop, false)
}

/// Whether the winding order of a given `GeoLoop` is clockwise.
/// In GeoJSON, clockwise loops are inner holes.
#[inline]
#[must_use]
pub fn is_clockwise_geoloop(geoloop: &GeoLoop) -> bool {
  is_clockwise_loop(geoloop)
}

/// Whether the winding order of a given `LinkedGeoLoop` is clockwise.
#[inline]
#[must_use]
pub fn is_clockwise_linked_geoloop(linked: &LinkedGeoLoop) -> bool {
  is_clockwise_loop(linked)
}

/// Computes the bounding box of `geoloop` and tests `coord` against it.
///
/// Convenience for one-off queries; callers testing many points should cache
/// the box from [`bbox_from_loop`] and call [`point_inside_loop`].
#[must_use]
pub fn loop_contains_point<L: LoopCursor + ?Sized>(geoloop: &L, coord: &LatLng) -> bool {
  let (bbox, _) = bbox_from_loop(geoloop);
  point_inside_loop(geoloop, &bbox, coord)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bbox::bbox_from_geoloop;
  use crate::latlng::degs_to_rads;

  // SF Verts from the H3 tests
  const SF_VERTS_RAW: [[f64; 2]; 6] = [
    [0.659966917655, -2.1364398519396],
    [0.6595011102219, -2.1359434279405],
    [0.6583348114025, -2.1354884206045],
    [0.6581220034068, -2.1382437718946],
    [0.6594479998527, -2.1384597563896],
    [0.6599990002976, -2.1376771158464],
  ];

  fn get_sf_geoloop() -> GeoLoop {
    SF_VERTS_RAW.iter().map(|p| LatLng { lat: p[0], lng: p[1] }).collect()
  }

  fn unit_square() -> GeoLoop {
    GeoLoop::new(vec![
      LatLng::new(0.0, 0.0),
      LatLng::new(1.0, 0.0),
      LatLng::new(1.0, 1.0),
      LatLng::new(0.0, 1.0),
    ])
  }

  fn diamond() -> GeoLoop {
    [(2.0, 1.0), (1.0, 2.0), (0.0, 1.0), (1.0, 0.0)]
      .iter()
      .map(|&(lat, lng)| LatLng::from_degrees(lat, lng))
      .collect()
  }

  #[test]
  fn test_point_inside_geoloop() {
    let geoloop = get_sf_geoloop();
    let bbox = bbox_from_geoloop(&geoloop);

    let inside = LatLng { lat: 0.659, lng: -2.136 };
    let outside = LatLng { lat: 1.0, lng: 2.0 };
    assert!(point_inside_geoloop(&geoloop, &bbox, &inside), "Point should be inside SF geoloop");
    assert!(!point_inside_geoloop(&geoloop, &bbox, &outside), "Point should be outside SF geoloop");
    assert!(point_inside_geoloop(&geoloop, &bbox, &LatLng { lat: 0.6585, lng: -2.137 }));
    assert!(!point_inside_geoloop(&geoloop, &bbox, &LatLng { lat: 0.66, lng: -2.1381 }), "in bbox, outside loop");
  }

  #[test]
  fn test_point_inside_linked_geoloop() {
    let linked = LinkedGeoLoop::from(&get_sf_geoloop());
    let bbox = crate::bbox::bbox_from_linked_geoloop(&linked);
    assert!(point_inside_linked_geoloop(&linked, &bbox, &LatLng { lat: 0.659, lng: -2.136 }));
    assert!(!point_inside_linked_geoloop(&linked, &bbox, &LatLng { lat: 1.0, lng: 2.0 }));
  }

  #[test]
  fn test_point_inside_geoloop_transmeridian() {
    let geoloop = GeoLoop::new(vec![
      LatLng::new(0.01, -M_PI + 0.01),
      LatLng::new(0.01, M_PI - 0.01),
      LatLng::new(-0.01, M_PI - 0.01),
      LatLng::new(-0.01, -M_PI + 0.01),
    ]);
    let bbox = bbox_from_geoloop(&geoloop);

    let east_point = LatLng::new(0.001, -M_PI + 0.001);
    let east_point_outside = LatLng::new(0.001, -M_PI + 0.1);
    let west_point = LatLng::new(0.001, M_PI - 0.001);
    let west_point_outside = LatLng::new(0.001, M_PI - 0.1);

    assert!(point_inside_geoloop(&geoloop, &bbox, &west_point), "contains point to the west of the antimeridian");
    assert!(point_inside_geoloop(&geoloop, &bbox, &east_point), "contains point to the east of the antimeridian");
    assert!(!point_inside_geoloop(&geoloop, &bbox, &west_point_outside), "does not contain outside west point");
    assert!(!point_inside_geoloop(&geoloop, &bbox, &east_point_outside), "does not contain outside east point");
  }

  #[test]
  fn test_point_on_antimeridian() {
    let geoloop: GeoLoop = [(-1.0, 179.0), (-1.0, -179.0), (1.0, -179.0), (1.0, 179.0)]
      .iter()
      .map(|&(lat, lng)| LatLng::from_degrees(lat, lng))
      .collect();
    let (bbox, is_transmeridian) = bbox_from_loop(&geoloop);
    assert!(is_transmeridian);
    assert!(bbox.west > bbox.east);

    assert!(point_inside_loop(&geoloop, &bbox, &LatLng::new(0.0, M_PI)));
    assert!(point_inside_loop(&geoloop, &bbox, &LatLng::new(0.0, -M_PI)));
    assert!(point_inside_loop(&geoloop, &bbox, &LatLng::from_degrees(0.5, 179.5)));
    assert!(point_inside_loop(&geoloop, &bbox, &LatLng::from_degrees(0.5, -179.5)));
    assert!(!point_inside_loop(&geoloop, &bbox, &LatLng::new(0.0, 0.0)));
    assert!(!point_inside_loop(&geoloop, &bbox, &LatLng::from_degrees(0.0, 178.0)));
    assert!(!point_inside_loop(&geoloop, &bbox, &LatLng::from_degrees(2.0, 180.0)));
  }

  #[test]
  fn test_point_inside_empty_loop() {
    let empty = GeoLoop::default();
    let bbox = BBox {
      north: 1.0,
      south: -1.0,
      east: 1.0,
      west: -1.0,
    };
    assert!(!point_inside_loop(&empty, &bbox, &LatLng::new(0.0, 0.0)), "zero edges never contain");
    assert!(!loop_contains_point(&empty, &LatLng::new(0.0, 0.0)));
  }

  #[test]
  fn test_point_inside_degenerate_loops() {
    let one = GeoLoop::new(vec![LatLng::new(0.5, 0.5)]);
    let probe = LatLng::new(0.5, 0.5);
    assert!(!loop_contains_point(&one, &probe));

    let two = GeoLoop::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
    for p in [LatLng::new(0.5, 0.5), LatLng::new(0.5, 0.2), LatLng::new(0.0, 0.0)] {
      assert!(!loop_contains_point(&two, &p), "segment loop contains {p:?}");
    }
  }

  #[test]
  fn test_square_boundary_classification() {
    let geoloop = unit_square();
    let bbox = bbox_from_geoloop(&geoloop);
    let cases = [
      ((0.0, 0.0), false, "sw corner"),
      ((1.0, 0.0), false, "nw corner"),
      ((1.0, 1.0), true, "ne corner"),
      ((0.0, 1.0), true, "se corner"),
      ((0.5, 0.0), false, "west edge"),
      ((0.5, 1.0), true, "east edge"),
      ((0.0, 0.5), true, "south edge"),
      ((1.0, 0.5), true, "north edge"),
      ((0.5, 0.5), true, "center"),
    ];
    for ((lat, lng), expected, name) in cases {
      let p = LatLng::new(lat, lng);
      for _ in 0..3 {
        assert_eq!(point_inside_geoloop(&geoloop, &bbox, &p), expected, "{name}");
      }
    }
  }

  #[test]
  fn test_horizontal_edge_at_query_latitude() {
    // bottom edge lies on the query latitude: its 0/0 ratio must not toggle
    let geoloop = unit_square();
    let bbox = bbox_from_geoloop(&geoloop);
    let p = LatLng::new(0.0, 0.25);
    assert!(point_inside_geoloop(&geoloop, &bbox, &p));
    assert_eq!(
      point_inside_geoloop(&geoloop, &bbox, &p),
      point_inside_geoloop(&geoloop, &bbox, &LatLng::new(0.0, 0.75))
    );
  }

  #[test]
  fn test_vertex_latitude_is_seen_by_both_edges() {
    // Query latitude 1 degree equals the latitude of the east and west
    // vertices; each is processed by both of its edges and the crossings
    // cancel, so points on that latitude read as outside.
    let geoloop = diamond();
    let bbox = bbox_from_geoloop(&geoloop);
    assert!(!point_inside_geoloop(&geoloop, &bbox, &LatLng::from_degrees(1.0, 1.0)));
    assert!(!point_inside_geoloop(&geoloop, &bbox, &LatLng::from_degrees(1.0, 0.5)));
    assert!(!point_inside_geoloop(&geoloop, &bbox, &LatLng::from_degrees(1.0, 1.5)));

    assert!(point_inside_geoloop(&geoloop, &bbox, &LatLng::from_degrees(0.5, 1.2)));
    assert!(point_inside_geoloop(&geoloop, &bbox, &LatLng::from_degrees(1.5, 0.8)));
  }

  #[test]
  fn test_pole_enclosing_loop_is_unsupported() {
    // Documents current behavior only: the loop around the north pole is
    // read as a transmeridian band of zero height and the pole is outside.
    let geoloop: GeoLoop = [(80.0, 0.0), (80.0, 90.0), (80.0, 180.0), (80.0, -90.0)]
      .iter()
      .map(|&(lat, lng)| LatLng::from_degrees(lat, lng))
      .collect();
    let (bbox, is_transmeridian) = bbox_from_loop(&geoloop);
    assert!(is_transmeridian);
    assert_eq!(bbox.north, bbox.south);
    assert!(!point_inside_loop(&geoloop, &bbox, &LatLng::new(degs_to_rads(90.0), 0.0)));
  }

  #[test]
  fn test_is_clockwise_geoloop() {
    // north, east, south, west around the square
    let cw = unit_square();
    assert!(is_clockwise_geoloop(&cw), "CW loop should be clockwise");

    let ccw: GeoLoop = cw.verts.iter().rev().copied().collect();
    assert!(!is_clockwise_geoloop(&ccw), "CCW loop should not be clockwise");
    assert!(!is_clockwise_linked_geoloop(&LinkedGeoLoop::from(&ccw)));

    let triangle = GeoLoop::new(vec![LatLng::new(0.0, 0.0), LatLng::new(0.1, 0.1), LatLng::new(0.0, 0.1)]);
    assert!(is_clockwise_geoloop(&triangle));
    assert!(is_clockwise_linked_geoloop(&LinkedGeoLoop::from(&triangle)));
  }

  #[test]
  fn test_is_clockwise_transmeridian() {
    let geoloop = GeoLoop::new(vec![
      LatLng::new(0.4, M_PI - 0.1),
      LatLng::new(0.4, -M_PI + 0.1),
      LatLng::new(-0.4, -M_PI + 0.1),
      LatLng::new(-0.4, M_PI - 0.1),
    ]);
    assert!(is_clockwise_geoloop(&geoloop), "transmeridian CW loop");

    let reversed: LinkedGeoLoop = geoloop.verts.iter().rev().copied().collect();
    assert!(!is_clockwise_linked_geoloop(&reversed), "transmeridian CCW loop");
  }

  #[test]
  fn test_is_clockwise_empty() {
    assert!(!is_clockwise_loop(&GeoLoop::default()));
    assert!(!is_clockwise_loop(&LinkedGeoLoop::new()));
  }
}
