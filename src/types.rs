//! Core geographic data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// Geographic bounding box with coordinates defined in radians.
///
/// A box that crosses the antimeridian stores its bounds swapped, so that
/// `west > east`. Its longitude interior is then `[west, PI] U [-PI, east]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude in radians.
  pub north: f64,
  /// South latitude in radians.
  pub south: f64,
  /// East longitude in radians.
  pub east: f64,
  /// West longitude in radians.
  pub west: f64,
}

/// A single closed loop of geographic coordinates, stored contiguously.
/// The last vertex is implicitly connected to the first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  /// Vertices forming the loop.
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  /// Creates a loop from vertices in radians.
  #[must_use]
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  /// Creates a loop from `(lat, lng)` pairs in decimal degrees.
  pub fn try_from_degrees(pairs: &[(f64, f64)]) -> Result<Self, GeoError> {
    let verts = pairs
      .iter()
      .map(|&(lat, lng)| LatLng::try_from_degrees(lat, lng))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self { verts })
  }
}

impl From<Vec<LatLng>> for GeoLoop {
  fn from(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }
}

impl FromIterator<LatLng> for GeoLoop {
  fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
    Self {
      verts: iter.into_iter().collect(),
    }
  }
}

/// A node of a [`LinkedGeoLoop`].
///
/// Nodes are only linked by the owning loop, so its vertex count always
/// matches the chain. `Debug` prints this node's vertex alone.
pub struct LinkedLatLng {
  /// The vertex held by this node.
  pub vertex: LatLng,
  /// The following vertex of the loop, `None` on the last node.
  pub(crate) next: Option<Box<LinkedLatLng>>,
}

/// A single closed loop of geographic coordinates, stored as a singly linked
/// list of vertex nodes. The last node is implicitly connected to the first.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the list iteratively (see
/// `linked_geo`), so arbitrarily long loops never recurse. Nodes carry no
/// recursive trait impls either.
#[derive(Default)]
pub struct LinkedGeoLoop {
  pub(crate) first: Option<Box<LinkedLatLng>>,
  pub(crate) len: usize,
}

/// Errors raised while building loops from raw coordinate input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
  /// A latitude or longitude component was NaN or infinite.
  #[error("latitude/longitude out of domain: lat={lat}, lng={lng}")]
  LatLngDomain {
    /// Offending latitude, in the units it was supplied in.
    lat: f64,
    /// Offending longitude, in the units it was supplied in.
    lng: f64,
  },
}
