//! Composite container of intersectable objects with bounding-box culling.
//!
//! A flat [`Geometries`] tests its own box, then each member's box, before
//! running the exact intersection routines. [`Geometries::into_hierarchy`]
//! regroups bounded members into a median-split tree of nested containers,
//! which turns the linear scan into a logarithmic descent for large scenes.

use crate::{GeoPoint, Intersectable};
use lux_math::{Aabb, Interval, Ray};

/// Maximum members per leaf container before splitting.
const LEAF_MAX_SIZE: usize = 4;

/// An ordered collection of intersectable objects.
///
/// Results are concatenated in insertion order; callers that need the
/// nearest hit use [`Intersectable::find_closest`].
#[derive(Debug)]
pub struct Geometries {
    members: Vec<Box<dyn Intersectable>>,
    /// Union of member boxes; `None` once any member is unbounded.
    bbox: Option<Aabb>,
    culling: bool,
}

impl Geometries {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            bbox: Some(Aabb::EMPTY),
            culling: true,
        }
    }

    /// Add an object and grow the container's box to cover it.
    pub fn add(&mut self, member: impl Intersectable + 'static) {
        self.add_boxed(Box::new(member));
    }

    pub fn add_boxed(&mut self, member: Box<dyn Intersectable>) {
        self.bbox = match (self.bbox, member.bounding_box()) {
            (Some(ours), Some(theirs)) => Some(Aabb::surrounding(&ours, &theirs)),
            _ => None,
        };
        self.members.push(member);
    }

    /// Builder form of [`Geometries::add`].
    pub fn with(mut self, member: impl Intersectable + 'static) -> Self {
        self.add(member);
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn culling(&self) -> bool {
        self.culling
    }

    /// Enable or disable box tests for this container.
    ///
    /// Results are identical either way. Nested containers keep their own
    /// setting; [`Geometries::into_hierarchy`] copies it to the nodes it
    /// creates.
    pub fn set_culling(&mut self, culling: bool) {
        self.culling = culling;
    }

    /// Regroup bounded members into a tree of nested containers.
    ///
    /// Unbounded members (planes, tubes) stay at the top level, since no box
    /// can reject them.
    pub fn into_hierarchy(self) -> Self {
        let culling = self.culling;
        let mut bounded = Vec::new();
        let mut top = Geometries::new();
        top.set_culling(culling);

        for member in self.members {
            match member.bounding_box() {
                Some(bbox) => bounded.push((bbox, member)),
                None => top.add_boxed(member),
            }
        }

        let count = bounded.len();
        if count > 0 {
            top.add(build_node(bounded, culling));
        }

        log::debug!(
            "Built geometry hierarchy over {} bounded and {} unbounded members",
            count,
            top.len() - usize::from(count > 0)
        );
        top
    }

    /// Whether a box admits the ray within `[0, max_distance]`.
    fn passes(&self, bbox: Option<Aabb>, ray: &Ray, max_distance: f64) -> bool {
        !self.culling
            || bbox.map_or(true, |b| b.hit(ray, Interval::new(0.0, max_distance)))
    }
}

/// Median split on the longest centroid axis, as many levels as needed to
/// get every leaf down to `LEAF_MAX_SIZE` members.
fn build_node(mut items: Vec<(Aabb, Box<dyn Intersectable>)>, culling: bool) -> Geometries {
    let mut node = Geometries::new();
    node.set_culling(culling);

    if items.len() <= LEAF_MAX_SIZE {
        for (_, member) in items {
            node.add_boxed(member);
        }
        return node;
    }

    let centroid_bounds = items.iter().fold(Aabb::EMPTY, |acc, (bbox, _)| {
        let c = bbox.centroid();
        Aabb::surrounding(&acc, &Aabb::from_points(c, c))
    });
    let axis = centroid_bounds.longest_axis();

    items.sort_unstable_by(|(a, _), (b, _)| {
        a.centroid()
            .axis(axis)
            .total_cmp(&b.centroid().axis(axis))
    });

    let right = items.split_off(items.len() / 2);
    node.add(build_node(items, culling));
    node.add(build_node(right, culling));
    node
}

impl Intersectable for Geometries {
    fn intersect<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>> {
        if !self.passes(self.bbox, ray, max_distance) {
            return Vec::new();
        }

        self.members
            .iter()
            .filter(|member| self.passes(member.bounding_box(), ray, max_distance))
            .flat_map(|member| member.intersect(ray, max_distance))
            .collect()
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}

impl Default for Geometries {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Intersectable + 'static> FromIterator<T> for Geometries {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut geometries = Geometries::new();
        for member in iter {
            geometries.add(member);
        }
        geometries
    }
}
