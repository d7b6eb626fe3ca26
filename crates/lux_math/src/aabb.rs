use crate::{Interval, Point3, Ray};

/// Axis-aligned bounding box used to cull intersection tests.
///
/// Defined by three intervals (one per axis). Thin boxes (flat polygons)
/// are padded so the slab test never sees a zero-width slab.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// Create an AABB from two corner points (in any order).
    pub fn from_points(a: Point3, b: Point3) -> Self {
        let lo = a.min(b);
        let hi = a.max(b);
        let mut aabb = Self {
            x: Interval::new(lo.x(), hi.x()),
            y: Interval::new(lo.y(), hi.y()),
            z: Interval::new(lo.z(), hi.z()),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Smallest box containing every point, `None` for an empty iterator.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (lo, hi) = points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self::from_points(lo, hi))
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn min(&self) -> Point3 {
        Point3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Point3 {
        Point3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Slab test: does the ray pass through the box for some t in `ray_t`?
    ///
    /// An axis the ray runs parallel to never narrows the interval; the ray
    /// either stays inside that slab forever or never enters it.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        let origin = ray.origin();
        let direction = ray.direction();

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let o = origin.axis(axis);
            let d = direction.axis(axis);

            if d == 0.0 {
                if !slab.contains(o) {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (slab.min - o) * inv;
            let mut t1 = (slab.max - o) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max < ray_t.min {
                return false;
            }
        }

        true
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            0
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Point3 {
        Point3::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }

    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }
}
