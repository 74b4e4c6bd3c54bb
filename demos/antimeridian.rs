//! Builds a loop straddling the antimeridian, caches its bounding box, then
//! classifies a few points against it.
//!
//! Logs at trace level so the crate's own events show up:
//! `cargo run --example antimeridian`.

use tracing_subscriber::fmt::SubscriberBuilder;
use xs_geoloop::{bbox_from_loop, point_inside_loop, rads_to_degs, GeoError, GeoLoop, LatLng, LinkedGeoLoop};

fn main() -> Result<(), GeoError> {
  SubscriberBuilder::default()
    .with_max_level(tracing::Level::TRACE)
    .with_target(false)
    .init();

  let geoloop = GeoLoop::try_from_degrees(&[(-1.0, 179.0), (-1.0, -179.0), (1.0, -179.0), (1.0, 179.0)])?;
  let linked = LinkedGeoLoop::from(&geoloop);

  let (bbox, is_transmeridian) = bbox_from_loop(&geoloop);
  tracing::info!(
    north = rads_to_degs(bbox.north),
    south = rads_to_degs(bbox.south),
    east = rads_to_degs(bbox.east),
    west = rads_to_degs(bbox.west),
    is_transmeridian,
    "bbox"
  );

  let probes = [
    LatLng::try_from_degrees(0.0, 180.0)?,
    LatLng::try_from_degrees(0.0, -180.0)?,
    LatLng::try_from_degrees(0.5, 179.5)?,
    LatLng::try_from_degrees(0.0, 0.0)?,
    LatLng::try_from_degrees(0.5, -179.0)?,
  ];
  for probe in probes {
    let contained = point_inside_loop(&geoloop, &bbox, &probe);
    let linked_contained = point_inside_loop(&linked, &bbox, &probe);
    tracing::info!(
      lat = rads_to_degs(probe.lat),
      lng = rads_to_degs(probe.lng),
      contained,
      linked_contained,
      "probe"
    );
  }
  Ok(())
}
