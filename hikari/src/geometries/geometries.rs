use super::{GeoPoint, Intersectable};
use crate::math::Ray;

/// A group of objects intersected as one.
#[derive(Debug, Default)]
pub struct Geometries {
    children: Vec<Box<dyn Intersectable>>,
}

impl Geometries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: impl Intersectable + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn add_boxed(&mut self, child: Box<dyn Intersectable>) {
        self.children.push(child);
    }

    /// Adds `child` to the group.
    pub fn with(mut self, child: impl Intersectable + 'static) -> Self {
        self.add(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Vec<Box<dyn Intersectable>>> for Geometries {
    fn from(children: Vec<Box<dyn Intersectable>>) -> Self {
        Self { children }
    }
}

impl Intersectable for Geometries {
    fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<Vec<GeoPoint<'_>>> {
        let hits = self
            .children
            .iter()
            .filter_map(|child| child.intersect(ray, max_distance))
            .flatten()
            .collect::<Vec<_>>();
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }
}
