use crate::{
    hit::{face_against, Hit, Record},
    material::Material,
    Ray,
};
use nalgebra::Vector3;

/// Infinite two-sided plane through `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vector3<f64>,
    /// Unit normal of the front face.
    pub normal: Vector3<f64>,
    pub material: Material,
}

impl Plane {
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>, material: impl Into<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material: material.into(),
        }
    }

    /// Plane through three vertices; the normal is `(v2 - v1) × (v0 - v1)`.
    pub fn from_vertices(
        v0: Vector3<f64>,
        v1: Vector3<f64>,
        v2: Vector3<f64>,
        material: impl Into<Material>,
    ) -> Self {
        Self::new(v0, (v2 - v1).cross(&(v0 - v1)), material)
    }

    /// Ray parameter where the ray meets the plane, if ahead of the origin.
    pub(crate) fn solve(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(&self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.point - ray.origin).dot(&self.normal) / denom;
        (t >= 0.0).then_some(t)
    }
}

impl Hit for Plane {
    fn hit(&self, ray: &Ray) -> Record {
        match self.solve(ray) {
            Some(t) => Record::at(
                ray,
                t,
                face_against(self.normal, &ray.direction),
                self.material,
            ),
            None => Record::miss(),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
