use crate::{
    camera::Camera,
    hit::EPSILON,
    material::{black, Color},
    ray::reflect,
    scene::Scene,
    Ray,
};
use log::trace;
use rayon::prelude::*;

/// Weight applied to each mirror bounce.
pub const REFLECTANCE: f64 = 0.3;

/// Receives one color per pixel. Row 0 is the bottom of the image.
pub trait PixelSink {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}

#[derive(Clone, Debug)]
pub struct RayTracer {
    pub camera: Camera,
    depth: i32,
    default_color: Color,
}

impl RayTracer {
    pub const DEFAULT_DEPTH: i32 = 2;

    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            depth: Self::DEFAULT_DEPTH,
            default_color: black(),
        }
    }

    /// Zero or less disables tracing altogether.
    pub fn set_recursion_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    pub fn recursion_depth(&self) -> i32 {
        self.depth
    }

    /// Color of rays that hit nothing.
    pub fn set_default_color(&mut self, color: Color) {
        self.default_color = color;
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn trace_ray(&self, ray: &Ray, depth: i32, scene: &Scene) -> Color {
        if depth <= 0 {
            return black();
        }
        let hit = scene.closest_hit(ray);
        if !hit.is_hit() {
            return self.default_color;
        }

        let bounce = Ray::new(
            hit.point + EPSILON * hit.normal,
            reflect(&ray.direction, &hit.normal),
        );
        let mut total = REFLECTANCE * self.trace_ray(&bounce, depth - 1, scene);

        // Emissive is added once for every light, enabled or not.
        for light in scene.lights() {
            total += light.illuminate(&ray.direction, &hit, scene.surfaces());
            total += hit.material.emissive;
        }
        total
    }

    pub fn trace_pixel(&self, x: usize, y: usize, scene: &Scene) -> Color {
        self.trace_ray(&self.camera.ray(x, y), self.depth, scene)
    }

    /// Traces every pixel, rows in parallel, and hands the colors to `sink`.
    pub fn render<S: PixelSink>(&self, scene: &Scene, sink: &mut S) {
        let (width, height) = (self.camera.width(), self.camera.height());
        let rows: Vec<Vec<Color>> = (0..height)
            .into_par_iter()
            .map(|y| (0..width).map(|x| self.trace_pixel(x, y, scene)).collect())
            .collect();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                sink.set_pixel(x, y, color);
            }
        }
        trace!("rendered {}x{} at depth {}", width, height, self.depth);
    }
}
