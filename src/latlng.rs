// src/latlng.rs

use crate::constants::{EPSILON_RAD, M_2PI, M_PI};
use crate::types::{GeoError, LatLng};

/// Longitude frame used to compare longitudes across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongitudeNormalization {
  /// Natural `[-PI, PI]` frame.
  #[default]
  None,
  /// Negative longitudes shifted east by `2 PI`, giving roughly `[0, 2 PI)`.
  East,
  /// Positive longitudes shifted west by `2 PI`, giving roughly `(-2 PI, 0]`.
  West,
}

impl LongitudeNormalization {
  /// The frame the loop algorithms use for a loop with the given
  /// antimeridian status.
  #[inline]
  #[must_use]
  pub fn for_transmeridian(is_transmeridian: bool) -> Self {
    if is_transmeridian {
      LongitudeNormalization::East
    } else {
      LongitudeNormalization::None
    }
  }
}

impl LatLng {
  /// Creates a coordinate from radians.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Creates a coordinate from decimal degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    Self {
      lat: degs_to_rads(lat_degs),
      lng: degs_to_rads(lng_degs),
    }
  }

  /// Creates a coordinate from decimal degrees, rejecting non-finite input.
  pub fn try_from_degrees(lat_degs: f64, lng_degs: f64) -> Result<Self, GeoError> {
    let p = Self::from_degrees(lat_degs, lng_degs);
    validate_lat_lng(&p).map_err(|_| GeoError::LatLngDomain {
      lat: lat_degs,
      lng: lng_degs,
    })?;
    Ok(p)
  }
}

/// Convert from decimal degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

/// Convert from radians to decimal degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

/// Checks that both components of a coordinate are finite.
///
/// Range is not checked: the loop algorithms normalize longitudes themselves
/// and accept latitudes outside `[-PI/2, PI/2]` as plain numbers.
pub fn validate_lat_lng(p: &LatLng) -> Result<(), GeoError> {
  if p.lat.is_finite() && p.lng.is_finite() {
    Ok(())
  } else {
    Err(GeoError::LatLngDomain { lat: p.lat, lng: p.lng })
  }
}

/// Determines if the components of two spherical coordinates are within some
/// threshold distance of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Determines if the components of two spherical coordinates are within the
/// standard epsilon distance of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Makes sure longitudes are in the proper bounds `[-PI, PI]`.
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Shifts a longitude into the given comparison frame.
#[inline]
#[must_use]
pub fn normalize_lng_for_comparison(lng: f64, normalization: LongitudeNormalization) -> f64 {
  match normalization {
    LongitudeNormalization::None => lng,
    LongitudeNormalization::East => {
      if lng < 0.0 {
        lng + M_2PI
      } else {
        lng
      }
    }
    LongitudeNormalization::West => {
      if lng > 0.0 {
        lng - M_2PI
      } else {
        lng
      }
    }
  }
}

/// Normalizes a longitude for a loop with the given antimeridian status.
///
/// For transmeridian loops negative longitudes are moved up by `2 PI`, which
/// makes comparisons monotonic across the antimeridian. NaN passes through.
#[inline]
#[must_use]
pub fn normalize_lng(lng: f64, is_transmeridian: bool) -> f64 {
  normalize_lng_for_comparison(lng, LongitudeNormalization::for_transmeridian(is_transmeridian))
}
