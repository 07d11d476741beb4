use crate::Ray;
use log::debug;
use nalgebra::{Vector2, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Vertical field of view in degrees.
    Perspective { fov_degrees: f64 },
    /// Full height of the view plane in world units.
    Orthographic { plane_height: f64 },
}

/// View frame: eye position, orthonormal basis and projection plane limits.
/// The camera looks down `-w`; pixel `(0, 0)` is the bottom-left corner.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vector3<f64>,
    u: Vector3<f64>,
    v: Vector3<f64>,
    w: Vector3<f64>,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    dist_to_plane: f64,
    nx: usize,
    ny: usize,
    projection: Projection,
}

impl Camera {
    /// Camera at the origin looking down `-z` with a 45 degree field of view.
    pub fn new(nx: usize, ny: usize) -> Self {
        let mut camera = Self {
            eye: Vector3::zeros(),
            u: Vector3::x(),
            v: Vector3::y(),
            w: Vector3::z(),
            left: 0.0,
            right: 0.0,
            bottom: 0.0,
            top: 0.0,
            dist_to_plane: 0.0,
            nx,
            ny,
            projection: Projection::Perspective { fov_degrees: 45.0 },
        };
        camera.apply_projection();
        camera
    }

    /// `up` must not be parallel to `view_dir`.
    pub fn set_frame(&mut self, eye: Vector3<f64>, view_dir: Vector3<f64>, up: Vector3<f64>) {
        self.eye = eye;
        self.w = (-view_dir).normalize();
        self.u = up.cross(&self.w).normalize();
        self.v = self.w.cross(&self.u);
        debug!("camera frame eye={:?} u={:?} v={:?} w={:?}", self.eye, self.u, self.v, self.w);
    }

    pub fn perspective(&mut self, fov_degrees: f64) {
        self.projection = Projection::Perspective { fov_degrees };
        self.apply_projection();
    }

    pub fn orthographic(&mut self, plane_height: f64) {
        self.projection = Projection::Orthographic { plane_height };
        self.apply_projection();
    }

    /// Changes the pixel counts and recomputes the current projection.
    pub fn resize(&mut self, nx: usize, ny: usize) {
        self.nx = nx;
        self.ny = ny;
        self.apply_projection();
    }

    fn aspect_ratio(&self) -> f64 {
        self.nx as f64 / self.ny as f64
    }

    fn apply_projection(&mut self) {
        match self.projection {
            Projection::Perspective { fov_degrees } => {
                let half = (fov_degrees / 2.0).to_radians();
                self.dist_to_plane = 1.0 / half.tan();
                self.top = self.dist_to_plane * half.tan();
            }
            Projection::Orthographic { plane_height } => {
                self.dist_to_plane = 0.0;
                self.top = plane_height.abs() / 2.0;
            }
        }
        self.right = self.top * self.aspect_ratio();
        self.left = -self.right;
        self.bottom = -self.top;
        debug!(
            "{:?} {}x{} limits l={} r={} b={} t={} d={}",
            self.projection, self.nx, self.ny, self.left, self.right, self.bottom, self.top, self.dist_to_plane
        );
    }

    pub fn width(&self) -> usize {
        self.nx
    }

    pub fn height(&self) -> usize {
        self.ny
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// View plane coordinates of the center of pixel `(x, y)`.
    pub fn plane_coords(&self, x: usize, y: usize) -> Vector2<f64> {
        Vector2::new(
            self.left + (self.right - self.left) * ((x as f64 + 0.5) / self.nx as f64),
            self.bottom + (self.top - self.bottom) * ((y as f64 + 0.5) / self.ny as f64),
        )
    }

    pub fn ray(&self, x: usize, y: usize) -> Ray {
        let st = self.plane_coords(x, y);
        match self.projection {
            Projection::Perspective { .. } => Ray::new(
                self.eye,
                -self.dist_to_plane * self.w + st.x * self.u + st.y * self.v,
            ),
            Projection::Orthographic { .. } => Ray {
                origin: self.eye + st.x * self.u + st.y * self.v,
                direction: -self.w,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn frame_is_orthonormal() {
        let mut camera = Camera::new(4, 3);
        camera.set_frame(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(1.0, -0.5, -2.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        for a in [camera.u, camera.v, camera.w] {
            assert_relative_eq!(a.norm(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(camera.u.dot(&camera.v), 0.0, epsilon = 1e-12);
        assert_relative_eq!(camera.u.dot(&camera.w), 0.0, epsilon = 1e-12);
        assert_relative_eq!(camera.v.dot(&camera.w), 0.0, epsilon = 1e-12);
        assert_relative_eq!(camera.u.cross(&camera.v), camera.w, epsilon = 1e-12);
    }

    #[test]
    fn perspective_limits() {
        let mut camera = Camera::new(200, 100);
        camera.perspective(30.0);
        assert_relative_eq!(camera.dist_to_plane, 1.0 / 15f64.to_radians().tan(), epsilon = 1e-12);
        assert_relative_eq!(camera.top, 1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.right, 2.0, epsilon = 1e-12);
        assert_eq!(camera.left, -camera.right);
        assert_eq!(camera.bottom, -camera.top);
    }

    #[test]
    fn orthographic_limits() {
        let mut camera = Camera::new(300, 100);
        camera.orthographic(10.0);
        assert_eq!(camera.dist_to_plane, 0.0);
        assert_relative_eq!(camera.top, 5.0);
        assert_relative_eq!(camera.right, 15.0);
    }

    #[test]
    fn center_pixel_looks_straight_ahead() {
        let mut camera = Camera::new(101, 51);
        camera.set_frame(Vector3::zeros(), -Vector3::z(), Vector3::y());
        camera.perspective(30.0);
        let ray = camera.ray(50, 25);
        assert_eq!(ray.origin, Vector3::zeros());
        assert_relative_eq!(ray.direction, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn bottom_left_pixel_points_down_and_left() {
        let mut camera = Camera::new(10, 10);
        camera.set_frame(Vector3::zeros(), -Vector3::z(), Vector3::y());
        camera.perspective(90.0);
        let ray = camera.ray(0, 0);
        assert!(ray.direction.x < 0.0 && ray.direction.y < 0.0 && ray.direction.z < 0.0);
        assert_relative_eq!(ray.direction.norm(), 1.0, epsilon = 1e-12);
        // top is 1 and distance is 1 for a 90 degree field of view
        let expected = Vector3::new(-0.9, -0.9, -1.0).normalize();
        assert_relative_eq!(ray.direction, expected, epsilon = 1e-12);
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let mut camera = Camera::new(4, 4);
        camera.set_frame(Vector3::new(0.0, 0.0, 5.0), -Vector3::z(), Vector3::y());
        camera.orthographic(4.0);
        let a = camera.ray(0, 0);
        let b = camera.ray(3, 3);
        assert_eq!(a.direction, -Vector3::z());
        assert_eq!(b.direction, -Vector3::z());
        assert_relative_eq!(a.origin, Vector3::new(-1.5, -1.5, 5.0), epsilon = 1e-12);
        assert_relative_eq!(b.origin, Vector3::new(1.5, 1.5, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn resize_keeps_projection() {
        let mut camera = Camera::new(100, 100);
        camera.orthographic(2.0);
        camera.resize(200, 100);
        assert_eq!(camera.projection(), Projection::Orthographic { plane_height: 2.0 });
        assert_relative_eq!(camera.right, 2.0);
        assert_eq!((camera.width(), camera.height()), (200, 100));
    }
}
