use crate::{
    hit::{Hit, Record, EPSILON},
    material::Material,
    quadric::{Coefficients, Quadric},
    Ray,
};
use nalgebra::Vector3;

/// Open circular cylinder along the y axis through `center`. Only the
/// lateral surface is modeled; there are no end caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub radius: f64,
    pub length: f64,
    quadric: Quadric,
}

impl Cylinder {
    pub fn new(
        center: Vector3<f64>,
        radius: f64,
        length: f64,
        material: impl Into<Material>,
    ) -> Self {
        let coefficients = Coefficients {
            a: 1.0,
            c: 1.0,
            j: -radius * radius,
            ..Default::default()
        };
        Self {
            radius,
            length,
            quadric: Quadric::new(center, coefficients, material),
        }
    }

    pub fn center(&self) -> Vector3<f64> {
        self.quadric.center
    }

    /// Positive past the ends of the band, zero exactly on its edge.
    fn band_excess(&self, point: &Vector3<f64>) -> f64 {
        let half = self.length / 2.0;
        (point - self.quadric.center).norm_squared() - self.radius * self.radius - half * half
    }

    /// First hits keep the band edge.
    fn accepts_first(&self, point: &Vector3<f64>) -> bool {
        self.band_excess(point) <= 0.0
    }

    /// Retried hits must lie strictly inside the band.
    fn accepts_retry(&self, point: &Vector3<f64>) -> bool {
        self.band_excess(point) < 0.0
    }
}

impl Hit for Cylinder {
    fn hit(&self, ray: &Ray) -> Record {
        let Some(t) = self.quadric.solve(ray) else {
            return Record::miss();
        };
        if self.accepts_first(&ray.at(t)) {
            return self.quadric.record(ray, t);
        }

        // Look once more past the clipped point for the far wall.
        let retry = Ray {
            origin: ray.at(t + EPSILON),
            direction: ray.direction,
        };
        match self.quadric.solve(&retry) {
            Some(t2) if self.accepts_retry(&retry.at(t2)) => self.quadric.record(ray, t + EPSILON + t2),
            _ => Record::miss(),
        }
    }

    fn material(&self) -> &Material {
        &self.quadric.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder() -> Cylinder {
        Cylinder::new(Vector3::new(0.0, 0.0, -10.0), 1.0, 10.0, Material::default())
    }

    #[test]
    fn lateral_hit_in_band() {
        let ray = Ray::new(Vector3::zeros(), -Vector3::z());
        let hit = cylinder().hit(&ray);
        assert_relative_eq!(hit.t, 9.0, epsilon = 1e-9);
        assert_relative_eq!(hit.normal, Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn hit_near_the_band_edge() {
        let target = Vector3::new(0.0, 4.5, -9.0);
        let ray = Ray::new(Vector3::zeros(), target);
        let hit = cylinder().hit(&ray);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.point, target, epsilon = 1e-9);
    }

    #[test]
    fn both_walls_outside_band_is_a_miss() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 6.0, -9.0));
        assert!(!cylinder().hit(&ray).is_hit());
    }

    #[test]
    fn clipped_front_wall_falls_through_to_back_wall() {
        let origin = Vector3::new(0.0, 20.0, 0.0);
        let back = Vector3::new(0.0, 4.0, -11.0);
        let ray = Ray::new(origin, back - origin);
        let hit = cylinder().hit(&ray);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.t, (back - origin).norm(), epsilon = 1e-6);
        assert_relative_eq!(hit.point, back, epsilon = 1e-6);
        assert_relative_eq!(hit.normal, Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn band_edge_counts_only_on_first_hit() {
        let c = cylinder();
        let edge = Vector3::new(1.0, 5.0, -10.0);
        assert_eq!(c.band_excess(&edge), 0.0);
        assert!(c.accepts_first(&edge));
        assert!(!c.accepts_retry(&edge));

        let inside = Vector3::new(1.0, 4.0, -10.0);
        assert!(c.accepts_first(&inside) && c.accepts_retry(&inside));
        let outside = Vector3::new(1.0, 6.0, -10.0);
        assert!(!c.accepts_first(&outside) && !c.accepts_retry(&outside));
    }

    #[test]
    fn ray_down_the_axis_misses_without_caps() {
        let ray = Ray::new(Vector3::new(0.0, 20.0, -10.0), -Vector3::y());
        assert!(!cylinder().hit(&ray).is_hit());
        let ray = Ray::new(Vector3::new(0.5, 20.0, -10.0), -Vector3::y());
        assert!(!cylinder().hit(&ray).is_hit());
    }
}
