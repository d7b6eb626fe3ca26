use super::{GeometryError, Plane};
use lux_math::{align_zero, is_zero, Aabb, Point3, Ray, Vector3};

/// A convex planar polygon with at least three vertices in edge order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
    bbox: Aabb,
}

impl Polygon {
    /// Build a polygon from vertices ordered along its edge path.
    ///
    /// Fails if there are fewer than three vertices, two consecutive
    /// vertices coincide, three consecutive vertices are collinear, a vertex
    /// leaves the plane of the first three, or the winding changes direction
    /// (concave or self-intersecting outline).
    pub fn new(vertices: Vec<Point3>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(invalid("a polygon needs at least 3 vertices"));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])
            .map_err(|_| invalid("the first three vertices do not span a plane"))?;

        if vertices.len() > 3 {
            validate_outline(&vertices, plane.normal())?;
        }

        let bbox = Aabb::enclosing(vertices.iter().copied())
            .ok_or_else(|| invalid("a polygon needs at least 3 vertices"))?;

        Ok(Self {
            vertices,
            plane,
            bbox,
        })
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn normal(&self) -> Vector3 {
        self.plane.normal()
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bbox
    }

    /// Ray parameter of the crossing if it lies strictly inside the outline.
    ///
    /// Hits on an edge or a vertex are misses.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        let t = self.plane.intersect(ray, max_distance)?;
        self.contains_hit(ray).map(|()| t)
    }

    /// Sign test: the ray direction must fall on the same side of every
    /// triangle fanned from the ray origin to consecutive vertices.
    fn contains_hit(&self, ray: &Ray) -> Option<()> {
        let origin = ray.origin();
        let dir = ray.direction();
        let n = self.vertices.len();

        let mut v1 = self.vertices[1].subtract(origin).ok()?;
        let mut v2 = self.vertices[0].subtract(origin).ok()?;
        let first = align_zero(dir.dot(v1.cross(v2).ok()?));
        if is_zero(first) {
            return None;
        }

        for i in (1..n).rev() {
            v1 = v2;
            v2 = self.vertices[i].subtract(origin).ok()?;
            let sign = align_zero(dir.dot(v1.cross(v2).ok()?));
            if first * sign <= 0.0 {
                return None;
            }
        }

        Some(())
    }
}

fn validate_outline(vertices: &[Point3], normal: Vector3) -> Result<(), GeometryError> {
    let edge = |from: Point3, to: Point3| {
        to.subtract(from)
            .map_err(|_| invalid("consecutive vertices coincide"))
    };
    let turn = |a: Vector3, b: Vector3| {
        a.cross(b)
            .map(|c| c.dot(normal) > 0.0)
            .map_err(|_| invalid("three consecutive vertices are collinear"))
    };

    let last = vertices.len() - 1;
    let mut edge1 = edge(vertices[last - 1], vertices[last])?;
    let mut edge2 = edge(vertices[last], vertices[0])?;
    let positive = turn(edge1, edge2)?;

    for i in 1..vertices.len() {
        let height = vertices[i]
            .subtract(vertices[0])
            .map_or(0.0, |offset| offset.dot(normal));
        if !is_zero(height) {
            return Err(invalid("all vertices must lie in one plane"));
        }

        edge1 = edge2;
        edge2 = edge(vertices[i - 1], vertices[i])?;
        if turn(edge1, edge2)? != positive {
            return Err(invalid("vertices must be ordered and the polygon convex"));
        }
    }

    Ok(())
}

fn invalid(reason: &str) -> GeometryError {
    GeometryError::InvalidPolygon(reason.to_string())
}

/// A triangle: the three-vertex polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle(Polygon);

impl Triangle {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Result<Self, GeometryError> {
        Polygon::new(vec![p0, p1, p2]).map(Self)
    }

    pub fn vertices(&self) -> [Point3; 3] {
        let v = self.0.vertices();
        [v[0], v[1], v[2]]
    }

    pub fn normal(&self) -> Vector3 {
        self.0.normal()
    }

    pub fn bounding_box(&self) -> Aabb {
        self.0.bounding_box()
    }

    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        self.0.intersect(ray, max_distance)
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        triangle.0
    }
}
