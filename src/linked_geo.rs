// src/linked_geo.rs

//! Construction and inspection of [`LinkedGeoLoop`].

use std::fmt;
use std::iter::FusedIterator;

use crate::types::{GeoError, GeoLoop, LatLng, LinkedGeoLoop, LinkedLatLng};

impl LinkedGeoLoop {
  /// Creates an empty linked loop.
  #[must_use]
  pub fn new() -> Self {
    Self { first: None, len: 0 }
  }

  /// Creates a linked loop from `(lat, lng)` pairs in decimal degrees.
  pub fn try_from_degrees(pairs: &[(f64, f64)]) -> Result<Self, GeoError> {
    let verts = pairs
      .iter()
      .map(|&(lat, lng)| LatLng::try_from_degrees(lat, lng))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(verts.into_iter().collect())
  }

  /// Appends a vertex after the current last node and returns the stored
  /// vertex.
  ///
  /// Walks the list to find the tail; use `collect` to build long loops.
  pub fn add_linked_lat_lng(&mut self, vertex: LatLng) -> &mut LatLng {
    let mut tail = &mut self.first;
    while let Some(node) = tail {
      tail = &mut node.next;
    }
    self.len += 1;
    &mut tail.insert(Box::new(LinkedLatLng { vertex, next: None })).vertex
  }

  /// Number of vertices in the loop.
  #[must_use]
  pub fn count_linked_lat_lng(&self) -> usize {
    self.len
  }

  /// The head node, if any.
  #[must_use]
  pub fn first(&self) -> Option<&LinkedLatLng> {
    self.first.as_deref()
  }

  /// Iterates over the vertices in loop order.
  #[must_use]
  pub fn iter(&self) -> LinkedVerts<'_> {
    LinkedVerts {
      node: self.first.as_deref(),
      remaining: self.len,
    }
  }

  /// Removes every vertex, leaving an empty loop.
  pub fn clear(&mut self) {
    let mut node = self.first.take();
    while let Some(mut n) = node {
      node = n.next.take();
    }
    self.len = 0;
  }
}

impl LinkedLatLng {
  /// The following node, `None` on the last node of the loop.
  #[must_use]
  pub fn next_node(&self) -> Option<&LinkedLatLng> {
    self.next.as_deref()
  }
}

impl fmt::Debug for LinkedLatLng {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LinkedLatLng")
      .field("vertex", &self.vertex)
      .field("has_next", &self.next.is_some())
      .finish()
  }
}

/// Vertices of a [`LinkedGeoLoop`] in loop order.
#[derive(Debug, Clone)]
pub struct LinkedVerts<'a> {
  node: Option<&'a LinkedLatLng>,
  remaining: usize,
}

impl<'a> Iterator for LinkedVerts<'a> {
  type Item = &'a LatLng;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.node?;
    self.node = node.next.as_deref();
    self.remaining = self.remaining.saturating_sub(1);
    Some(&node.vertex)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for LinkedVerts<'_> {}
impl FusedIterator for LinkedVerts<'_> {}

impl<'a> IntoIterator for &'a LinkedGeoLoop {
  type Item = &'a LatLng;
  type IntoIter = LinkedVerts<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl FromIterator<LatLng> for LinkedGeoLoop {
  fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
    let verts: Vec<LatLng> = iter.into_iter().collect();
    let mut first = None;
    for &vertex in verts.iter().rev() {
      first = Some(Box::new(LinkedLatLng { vertex, next: first }));
    }
    Self {
      first,
      len: verts.len(),
    }
  }
}

impl From<&GeoLoop> for LinkedGeoLoop {
  fn from(geoloop: &GeoLoop) -> Self {
    geoloop.verts.iter().copied().collect()
  }
}

impl From<&LinkedGeoLoop> for GeoLoop {
  fn from(linked: &LinkedGeoLoop) -> Self {
    linked.iter().copied().collect()
  }
}

impl Clone for LinkedGeoLoop {
  fn clone(&self) -> Self {
    self.iter().copied().collect()
  }
}

impl PartialEq for LinkedGeoLoop {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl fmt::Debug for LinkedGeoLoop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl Drop for LinkedGeoLoop {
  fn drop(&mut self) {
    self.clear();
  }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LinkedGeoLoop {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.iter())
  }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LinkedGeoLoop {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    <Vec<LatLng> as serde::Deserialize>::deserialize(deserializer).map(|verts| verts.into_iter().collect())
  }
}
