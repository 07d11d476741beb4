use crate::{
    hit::{Hit, Record},
    material::Material,
    plane::Plane,
    Ray,
};
use nalgebra::Vector3;

/// Convex planar polygon. Vertices are expected in the winding that makes
/// `(v2 - v1) × (v0 - v1)` the front normal.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplePolygon {
    plane: Plane,
    vertices: Vec<Vector3<f64>>,
}

impl SimplePolygon {
    /// Returns `None` for fewer than three vertices.
    pub fn new(vertices: Vec<Vector3<f64>>, material: impl Into<Material>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_vertices(vertices[0], vertices[1], vertices[2], material);
        Some(Self { plane, vertices })
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    /// Strict half-plane test against every edge; points on an edge are outside.
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            (b - a).cross(&(point - a)).dot(&self.plane.normal) > 0.0
        })
    }
}

impl Hit for SimplePolygon {
    fn hit(&self, ray: &Ray) -> Record {
        let record = self.plane.hit(ray);
        if record.is_hit() && self.contains(&record.point) {
            record
        } else {
            Record::miss()
        }
    }

    fn material(&self) -> &Material {
        &self.plane.material
    }
}
