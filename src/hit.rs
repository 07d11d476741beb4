use crate::{material::Material, Ray};
use nalgebra::{Vector2, Vector3};

/// Offset applied to secondary ray origins so they don't re-hit the surface
/// they start on.
pub const EPSILON: f64 = 1e-4;

pub trait Hit: Send + Sync {
    /// Nearest non-negative intersection, or [`Record::miss`].
    fn hit(&self, ray: &Ray) -> Record;

    fn material(&self) -> &Material;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub material: Material,
    /// Always zero; surfaces don't compute texture coordinates.
    pub tex_coord: Vector2<f64>,
    /// `f64::INFINITY` when nothing was hit.
    pub t: f64,
}

impl Record {
    pub fn miss() -> Self {
        Self {
            point: Vector3::zeros(),
            normal: Vector3::zeros(),
            material: Material::default(),
            tex_coord: Vector2::zeros(),
            t: f64::INFINITY,
        }
    }

    /// Builds a hit at `t` along `ray`, or a miss when `t` is negative.
    pub(crate) fn at(ray: &Ray, t: f64, normal: Vector3<f64>, material: Material) -> Self {
        if !(t >= 0.0) || t == f64::INFINITY {
            return Self::miss();
        }
        Self {
            point: ray.at(t),
            normal,
            material,
            tex_coord: Vector2::zeros(),
            t,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.t < f64::INFINITY
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::miss()
    }
}

/// Turns `normal` to face against `direction`.
pub(crate) fn face_against(normal: Vector3<f64>, direction: &Vector3<f64>) -> Vector3<f64> {
    if normal.dot(direction) > 0.0 {
        -normal
    } else {
        normal
    }
}

/// Smaller non-negative root of `a·t² + 2·h·t + c = 0`, in the
/// half-b form the surfaces use. `None` when both roots lie behind the
/// origin or the discriminant is negative.
pub(crate) fn nearest_root(a: f64, h: f64, c: f64) -> Option<f64> {
    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }
    if discriminant == 0.0 {
        let t = -h / a;
        return (t >= 0.0).then_some(t);
    }
    let sqrtd = discriminant.sqrt();
    let t1 = (-h - sqrtd) / a;
    let t2 = (-h + sqrtd) / a;
    let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_is_infinite() {
        let r = Record::miss();
        assert_eq!(r.t, f64::INFINITY);
        assert!(!r.is_hit());
    }

    #[test]
    fn negative_t_is_coerced_to_miss() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        let r = Record::at(&ray, -2.0, Vector3::z(), Material::default());
        assert!(!r.is_hit());
        let r = Record::at(&ray, 2.0, Vector3::z(), Material::default());
        assert!(r.is_hit());
        assert_eq!(r.point, Vector3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn nearest_root_picks_smaller_non_negative() {
        // (t - 1)(t - 3) = t² - 4t + 3
        assert_eq!(nearest_root(1.0, -2.0, 3.0), Some(1.0));
        // (t + 1)(t - 3) = t² - 2t - 3
        assert_eq!(nearest_root(1.0, -1.0, -3.0), Some(3.0));
        // (t + 1)(t + 3)
        assert_eq!(nearest_root(1.0, 2.0, 3.0), None);
        // t² + 1
        assert_eq!(nearest_root(1.0, 0.0, 1.0), None);
    }

    #[test]
    fn nearest_root_tangent() {
        // (t - 2)²
        assert_eq!(nearest_root(1.0, -2.0, 4.0), Some(2.0));
        // (t + 2)²
        assert_eq!(nearest_root(1.0, 2.0, 4.0), None);
    }

    #[test]
    fn face_against_flips_when_aligned() {
        let d = Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(face_against(Vector3::z(), &d), Vector3::z());
        assert_eq!(face_against(-Vector3::z(), &d), Vector3::z());
    }
}
