use crate::{
    hit::{face_against, nearest_root, Hit, Record},
    material::Material,
    Ray,
};
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64, material: impl Into<Material>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray) -> Record {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let h = ray.direction.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let Some(t) = nearest_root(a, h, c) else {
            return Record::miss();
        };

        let point = ray.at(t);
        let normal = face_against((point - self.center).normalize(), &ray.direction);
        Record::at(ray, t, normal, self.material)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
