// src/iterators.rs

//! Edge iteration over loops, independent of how the loop is stored.
//!
//! The loop algorithms in [`crate::bbox`] and [`crate::polygon`] are written
//! once against [`LoopCursor`]. Each storage type implements the trait and
//! hands out an iterator of directed edges `(current, next)`.

use std::iter::FusedIterator;

use crate::types::{GeoLoop, LatLng, LinkedGeoLoop, LinkedLatLng};

/// Read-only access to the directed edges of a loop.
///
/// `edges` starts a fresh traversal each time it is called. A traversal yields
/// one `(current, next)` pair per vertex in loop order, the last vertex being
/// paired with the first, and then ends. Vertices are yielded by value, so
/// callers can reorder or adjust them without touching the loop.
pub trait LoopCursor {
  /// Iterator over the directed edges of the loop.
  type Edges<'a>: Iterator<Item = (LatLng, LatLng)>
  where
    Self: 'a;

  /// Whether the loop has no vertices.
  fn is_empty(&self) -> bool;

  /// Starts a new traversal of the loop's edges.
  fn edges(&self) -> Self::Edges<'_>;

  /// Number of vertices (and edges) in the loop.
  fn num_verts(&self) -> usize {
    self.edges().count()
  }
}

/// Edges of a contiguous vertex sequence: vertex `i` paired with `(i + 1) % n`.
#[derive(Debug, Clone)]
pub struct GeoLoopEdges<'a> {
  verts: &'a [LatLng],
  index: usize,
}

impl<'a> GeoLoopEdges<'a> {
  pub(crate) fn new(verts: &'a [LatLng]) -> Self {
    Self { verts, index: 0 }
  }
}

impl Iterator for GeoLoopEdges<'_> {
  type Item = (LatLng, LatLng);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let current = *self.verts.get(self.index)?;
    self.index += 1;
    let next = self.verts.get(self.index).or_else(|| self.verts.first())?;
    Some((current, *next))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.verts.len().saturating_sub(self.index);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for GeoLoopEdges<'_> {}
impl FusedIterator for GeoLoopEdges<'_> {}

/// Edges of a linked loop: each node paired with its successor, the last node
/// paired with the head.
#[derive(Debug, Clone)]
pub struct LinkedGeoLoopEdges<'a> {
  first: Option<&'a LinkedLatLng>,
  current: Option<&'a LinkedLatLng>,
}

impl<'a> LinkedGeoLoopEdges<'a> {
  pub(crate) fn new(first: Option<&'a LinkedLatLng>) -> Self {
    Self { first, current: first }
  }
}

impl Iterator for LinkedGeoLoopEdges<'_> {
  type Item = (LatLng, LatLng);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let current = self.current?;
    self.current = current.next.as_deref();
    let next = self.current.or(self.first)?;
    Some((current.vertex, next.vertex))
  }
}

impl FusedIterator for LinkedGeoLoopEdges<'_> {}

impl LoopCursor for [LatLng] {
  type Edges<'a> = GeoLoopEdges<'a>;

  #[inline]
  fn is_empty(&self) -> bool {
    <[LatLng]>::is_empty(self)
  }

  #[inline]
  fn edges(&self) -> Self::Edges<'_> {
    GeoLoopEdges::new(self)
  }

  #[inline]
  fn num_verts(&self) -> usize {
    self.len()
  }
}

impl LoopCursor for GeoLoop {
  type Edges<'a> = GeoLoopEdges<'a>;

  #[inline]
  fn is_empty(&self) -> bool {
    self.verts.is_empty()
  }

  #[inline]
  fn edges(&self) -> Self::Edges<'_> {
    GeoLoopEdges::new(&self.verts)
  }

  #[inline]
  fn num_verts(&self) -> usize {
    self.verts.len()
  }
}

impl LoopCursor for LinkedGeoLoop {
  type Edges<'a> = LinkedGeoLoopEdges<'a>;

  #[inline]
  fn is_empty(&self) -> bool {
    self.first.is_none()
  }

  #[inline]
  fn edges(&self) -> Self::Edges<'_> {
    LinkedGeoLoopEdges::new(self.first.as_deref())
  }

  #[inline]
  fn num_verts(&self) -> usize {
    self.len
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn verts(n: usize) -> Vec<LatLng> {
    (0..n).map(|i| LatLng::new(i as f64, -(i as f64))).collect()
  }

  #[test]
  fn test_geoloop_edges_wrap() {
    let geoloop = GeoLoop::new(verts(3));
    let edges: Vec<_> = geoloop.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], (geoloop.verts[0], geoloop.verts[1]));
    assert_eq!(edges[1], (geoloop.verts[1], geoloop.verts[2]));
    assert_eq!(edges[2], (geoloop.verts[2], geoloop.verts[0]), "closing edge");
  }

  #[test]
  fn test_geoloop_edges_size_hint() {
    let geoloop = GeoLoop::new(verts(4));
    let mut edges = geoloop.edges();
    assert_eq!(edges.len(), 4);
    edges.next();
    assert_eq!(edges.len(), 3);
  }

  #[test]
  fn test_single_vertex_is_self_edge() {
    let geoloop = GeoLoop::new(verts(1));
    let edges: Vec<_> = geoloop.edges().collect();
    assert_eq!(edges, vec![(geoloop.verts[0], geoloop.verts[0])]);

    let linked: LinkedGeoLoop = geoloop.verts.iter().copied().collect();
    let linked_edges: Vec<_> = linked.edges().collect();
    assert_eq!(linked_edges, edges);
  }

  #[test]
  fn test_empty_loops_yield_nothing() {
    let geoloop = GeoLoop::default();
    assert!(LoopCursor::is_empty(&geoloop));
    assert_eq!(geoloop.edges().count(), 0);

    let linked = LinkedGeoLoop::new();
    assert!(LoopCursor::is_empty(&linked));
    assert_eq!(linked.edges().count(), 0);

    let slice: &[LatLng] = &[];
    assert!(LoopCursor::is_empty(slice));
    assert_eq!(slice.edges().count(), 0);
  }

  #[test]
  fn test_linked_matches_indexed_order() {
    let geoloop = GeoLoop::new(verts(5));
    let linked = LinkedGeoLoop::from(&geoloop);
    let a: Vec<_> = geoloop.edges().collect();
    let b: Vec<_> = linked.edges().collect();
    assert_eq!(a, b);
    assert_eq!(linked.num_verts(), 5);
    assert_eq!(geoloop.verts.as_slice().num_verts(), 5);
  }

  #[test]
  fn test_fresh_traversal_restarts() {
    let linked: LinkedGeoLoop = verts(3).into_iter().collect();
    let mut first = linked.edges();
    first.next();
    first.next();
    let second: Vec<_> = linked.edges().collect();
    assert_eq!(second.len(), 3);
    assert_eq!(first.next().map(|(a, _)| a), Some(LatLng::new(2.0, -2.0)));
    assert_eq!(first.next(), None);
    assert_eq!(first.next(), None, "fused");
  }
}
