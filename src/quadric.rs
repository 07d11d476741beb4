use crate::{
    hit::{face_against, nearest_root, Hit, Record},
    material::Material,
    Ray,
};
use nalgebra::Vector3;

/// Coefficients of `Ax² + By² + Cz² + Dxy + Exz + Fyz + Gx + Hy + Iz + J = 0`,
/// in coordinates relative to the surface center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
}

impl Coefficients {
    fn eval(&self, p: &Vector3<f64>) -> f64 {
        let (x, y, z) = (p.x, p.y, p.z);
        self.a * x * x
            + self.b * y * y
            + self.c * z * z
            + self.d * x * y
            + self.e * x * z
            + self.f * y * z
            + self.g * x
            + self.h * y
            + self.i * z
            + self.j
    }

    fn gradient(&self, p: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = (p.x, p.y, p.z);
        Vector3::new(
            2.0 * self.a * x + self.d * y + self.e * z + self.g,
            2.0 * self.b * y + self.d * x + self.f * z + self.h,
            2.0 * self.c * z + self.e * x + self.f * y + self.i,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadric {
    pub center: Vector3<f64>,
    pub coefficients: Coefficients,
    pub material: Material,
}

impl Quadric {
    pub fn new(
        center: Vector3<f64>,
        coefficients: Coefficients,
        material: impl Into<Material>,
    ) -> Self {
        Self {
            center,
            coefficients,
            material: material.into(),
        }
    }

    /// Nearest non-negative ray parameter on the surface.
    pub(crate) fn solve(&self, ray: &Ray) -> Option<f64> {
        let k = &self.coefficients;
        let o = ray.origin - self.center;
        let d = ray.direction;

        let qa = k.a * d.x * d.x
            + k.b * d.y * d.y
            + k.c * d.z * d.z
            + k.d * d.x * d.y
            + k.e * d.x * d.z
            + k.f * d.y * d.z;
        let qb = 2.0 * (k.a * o.x * d.x + k.b * o.y * d.y + k.c * o.z * d.z)
            + k.d * (o.x * d.y + o.y * d.x)
            + k.e * (o.x * d.z + o.z * d.x)
            + k.f * (o.y * d.z + o.z * d.y)
            + k.g * d.x
            + k.h * d.y
            + k.i * d.z;
        let qc = k.eval(&o);

        if qa == 0.0 {
            // Degenerate direction: the quadratic collapses to a line.
            if qb == 0.0 {
                return None;
            }
            let t = -qc / qb;
            return (t >= 0.0).then_some(t);
        }
        nearest_root(qa, qb / 2.0, qc)
    }

    /// Record for a hit at `t`, with the gradient normal turned against the ray.
    pub(crate) fn record(&self, ray: &Ray, t: f64) -> Record {
        let local = ray.at(t) - self.center;
        let normal = face_against(self.coefficients.gradient(&local).normalize(), &ray.direction);
        Record::at(ray, t, normal, self.material)
    }
}

impl Hit for Quadric {
    fn hit(&self, ray: &Ray) -> Record {
        match self.solve(ray) {
            Some(t) => self.record(ray, t),
            None => Record::miss(),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Axis-aligned ellipsoid with semi-axes `a`, `b`, `c` along x, y, z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    quadric: Quadric,
}

impl Ellipsoid {
    pub fn new(
        center: Vector3<f64>,
        a: f64,
        b: f64,
        c: f64,
        material: impl Into<Material>,
    ) -> Self {
        let coefficients = Coefficients {
            a: 1.0 / (a * a),
            b: 1.0 / (b * b),
            c: 1.0 / (c * c),
            j: -1.0,
            ..Default::default()
        };
        Self {
            a,
            b,
            c,
            quadric: Quadric::new(center, coefficients, material),
        }
    }

    pub fn quadric(&self) -> &Quadric {
        &self.quadric
    }
}

impl Hit for Ellipsoid {
    fn hit(&self, ray: &Ray) -> Record {
        self.quadric.hit(ray)
    }

    fn material(&self) -> &Material {
        &self.quadric.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Color, sphere::Sphere};
    use approx::assert_relative_eq;

    #[test]
    fn ellipsoid_coefficients_come_from_semi_axes() {
        let e = Ellipsoid::new(Vector3::zeros(), 2.0, 3.0, 3.0, Material::default());
        let k = e.quadric().coefficients;
        assert_relative_eq!(k.a, 1.0 / 4.0);
        assert_relative_eq!(k.b, 1.0 / 9.0);
        assert_relative_eq!(k.c, 1.0 / 9.0);
        assert_eq!((k.d, k.e, k.f, k.g, k.h, k.i), (0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(k.j, -1.0);

        let e = Ellipsoid::new(Vector3::zeros(), 1.0, 0.5, 4.0, Material::default());
        let k = e.quadric().coefficients;
        assert_relative_eq!(k.a, 1.0);
        assert_relative_eq!(k.b, 4.0);
        assert_relative_eq!(k.c, 1.0 / 16.0);
    }

    #[test]
    fn ellipsoid_hits_at_each_semi_axis() {
        let center = Vector3::new(0.0, 0.0, -10.0);
        let e = Ellipsoid::new(center, 2.0, 3.0, 1.0, Material::default());

        let from_x = Ray::new(center + Vector3::new(10.0, 0.0, 0.0), -Vector3::x());
        assert_relative_eq!(e.hit(&from_x).t, 8.0, epsilon = 1e-9);

        let from_y = Ray::new(center + Vector3::new(0.0, 10.0, 0.0), -Vector3::y());
        assert_relative_eq!(e.hit(&from_y).t, 7.0, epsilon = 1e-9);

        let from_z = Ray::new(Vector3::zeros(), -Vector3::z());
        let hit = e.hit(&from_z);
        assert_relative_eq!(hit.t, 9.0, epsilon = 1e-9);
        assert_relative_eq!(hit.normal, Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn unit_sphere_quadric_matches_sphere() {
        let red = Color::new(1.0, 0.0, 0.0);
        let center = Vector3::new(1.0, -1.0, -6.0);
        let quadric = Quadric::new(
            center,
            Coefficients {
                a: 1.0,
                b: 1.0,
                c: 1.0,
                j: -4.0,
                ..Default::default()
            },
            red,
        );
        let sphere = Sphere::new(center, 2.0, red);
        for dir in [
            Vector3::new(0.15, -0.2, -1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.3, -0.1, -1.0),
        ] {
            let ray = Ray::new(Vector3::zeros(), dir);
            let q = quadric.hit(&ray);
            let s = sphere.hit(&ray);
            assert_eq!(q.is_hit(), s.is_hit());
            if s.is_hit() {
                assert_relative_eq!(q.t, s.t, epsilon = 1e-9);
                assert_relative_eq!(q.normal, s.normal, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn large_ellipsoid_matches_sphere() {
        let center = Vector3::new(0.0, 0.0, -1e7);
        let e = Ellipsoid::new(center, 2e6, 2e6, 2e6, Material::default());
        let s = Sphere::new(center, 2e6, Material::default());
        let ray = Ray::new(Vector3::zeros(), -Vector3::z());
        let eh = e.hit(&ray);
        let sh = s.hit(&ray);
        assert_relative_eq!(eh.t, 8e6, epsilon = 1e-3);
        assert_relative_eq!(eh.t, sh.t, epsilon = 1e-3);
        assert_relative_eq!(eh.normal, Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn miss_and_behind() {
        let e = Ellipsoid::new(Vector3::new(0.0, 0.0, -10.0), 1.0, 1.0, 1.0, Material::default());
        let off = Ray::new(Vector3::new(5.0, 0.0, 0.0), -Vector3::z());
        assert!(!e.hit(&off).is_hit());
        let away = Ray::new(Vector3::zeros(), Vector3::z());
        assert!(!e.hit(&away).is_hit());
    }

    #[test]
    fn linear_fallback_for_paraboloid() {
        // y = x² + z², hit straight down the axis from above.
        let paraboloid = Quadric::new(
            Vector3::zeros(),
            Coefficients {
                a: 1.0,
                c: 1.0,
                h: -1.0,
                ..Default::default()
            },
            Material::default(),
        );
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), -Vector3::y());
        let hit = paraboloid.hit(&ray);
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.normal, Vector3::y(), epsilon = 1e-12);
    }
}
