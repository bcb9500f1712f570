//! Export data structures.

use crate::geoip::GeoPoint;

/// Ordered, append-only set of points collected during one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    points: Vec<GeoPoint>,
}

impl PointCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point after all existing ones.
    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Number of points collected.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point was collected.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GeoPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
