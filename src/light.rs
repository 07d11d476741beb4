use crate::{
    hit::{Hit, Record, EPSILON},
    material::{black, white, Color},
    ray::reflect,
    scene::closest_hit,
    Ray,
};
use nalgebra::Vector3;

pub trait Light: Send + Sync {
    /// Contribution of this light at `hit`, seen along `view_dir`.
    /// `surfaces` is consulted for shadow rays.
    fn illuminate(&self, view_dir: &Vector3<f64>, hit: &Record, surfaces: &[Box<dyn Hit>]) -> Color;

    fn source(&self) -> &LightSource;

    fn source_mut(&mut self) -> &mut LightSource;

    fn enabled(&self) -> bool {
        self.source().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.source_mut().enabled = enabled;
    }

    fn toggle(&mut self) {
        let source = self.source_mut();
        source.enabled = !source.enabled;
    }
}

/// Color state every light carries. On its own it is an ambient-only light
/// that is never shadowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub enabled: bool,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl LightSource {
    /// Diffuse is `color`, ambient a dim `0.15 * color`, specular white.
    pub fn new(color: Color) -> Self {
        Self {
            enabled: true,
            ambient: 0.15 * color,
            diffuse: color,
            specular: white(),
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn set_ambient(&mut self, ambient: Color) {
        self.ambient = ambient;
    }

    pub fn set_diffuse(&mut self, diffuse: Color) {
        self.diffuse = diffuse;
    }

    pub fn set_specular(&mut self, specular: Color) {
        self.specular = specular;
    }

    fn ambient_term(&self, hit: &Record) -> Color {
        if self.enabled {
            hit.material.ambient.component_mul(&self.ambient)
        } else {
            black()
        }
    }

    /// Diffuse, specular and ambient from a light in unit direction `l`, or
    /// `None` when anything along `l` blocks it. The shadow ray has no far
    /// limit.
    fn unshadowed(
        &self,
        l: &Vector3<f64>,
        view_dir: &Vector3<f64>,
        hit: &Record,
        surfaces: &[Box<dyn Hit>],
    ) -> Option<Color> {
        let shadow = Ray {
            origin: hit.point + EPSILON * hit.normal,
            direction: *l,
        };
        if closest_hit(&shadow, surfaces).is_hit() {
            return None;
        }

        let material = &hit.material;
        let r = reflect(l, &hit.normal).normalize();
        let diffuse = l.dot(&hit.normal).max(0.0) * self.diffuse.component_mul(&material.diffuse);
        let specular = r.dot(view_dir).max(0.0).powf(material.shininess)
            * self.specular.component_mul(&material.specular);
        Some(diffuse + specular + self.ambient_term(hit))
    }
}

impl Light for LightSource {
    fn illuminate(&self, _view_dir: &Vector3<f64>, hit: &Record, _surfaces: &[Box<dyn Hit>]) -> Color {
        self.ambient_term(hit)
    }

    fn source(&self) -> &LightSource {
        self
    }

    fn source_mut(&mut self) -> &mut LightSource {
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionalLight {
    pub source: LightSource,
    pub position: Vector3<f64>,
}

impl PositionalLight {
    pub fn new(position: Vector3<f64>, color: Color) -> Self {
        Self {
            source: LightSource::new(color),
            position,
        }
    }

    fn direction_from(&self, point: &Vector3<f64>) -> Vector3<f64> {
        (self.position - point).normalize()
    }
}

impl Light for PositionalLight {
    fn illuminate(&self, view_dir: &Vector3<f64>, hit: &Record, surfaces: &[Box<dyn Hit>]) -> Color {
        if !self.source.enabled {
            return black();
        }
        let l = self.direction_from(&hit.point);
        self.source
            .unshadowed(&l, view_dir, hit, surfaces)
            .unwrap_or_else(black)
    }

    fn source(&self) -> &LightSource {
        &self.source
    }

    fn source_mut(&mut self) -> &mut LightSource {
        &mut self.source
    }
}

/// Light infinitely far away. Also adds the surface's emissive color
/// whenever enabled, shadowed or not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub source: LightSource,
    /// Unit vector pointing toward the light, opposite to the way it shines.
    pub direction: Vector3<f64>,
}

impl DirectionalLight {
    pub fn new(direction: Vector3<f64>, color: Color) -> Self {
        Self {
            source: LightSource::new(color),
            direction: direction.normalize(),
        }
    }
}

impl Light for DirectionalLight {
    fn illuminate(&self, view_dir: &Vector3<f64>, hit: &Record, surfaces: &[Box<dyn Hit>]) -> Color {
        if !self.source.enabled {
            return black();
        }
        let lit = self
            .source
            .unshadowed(&self.direction, view_dir, hit, surfaces)
            .unwrap_or_else(black);
        hit.material.emissive + lit
    }

    fn source(&self) -> &LightSource {
        &self.source
    }

    fn source_mut(&mut self) -> &mut LightSource {
        &mut self.source
    }
}

/// Positional light limited to a cone around `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub light: PositionalLight,
    /// Unit vector in the direction the light shines.
    pub axis: Vector3<f64>,
    /// Cosine of the cone's half-angle.
    pub cutoff_cosine: f64,
}

impl Spotlight {
    pub fn new(position: Vector3<f64>, axis: Vector3<f64>, cutoff_cosine: f64, color: Color) -> Self {
        Self {
            light: PositionalLight::new(position, color),
            axis: axis.normalize(),
            cutoff_cosine,
        }
    }

    pub fn with_cutoff_degrees(
        position: Vector3<f64>,
        axis: Vector3<f64>,
        half_angle_degrees: f64,
        color: Color,
    ) -> Self {
        Self::new(position, axis, half_angle_degrees.to_radians().cos(), color)
    }

    /// Linear ramp from the cone edge, `None` outside the cone.
    fn falloff(&self, point: &Vector3<f64>) -> Option<f64> {
        let spot_cosine = (-self.light.direction_from(point)).dot(&self.axis);
        (spot_cosine > self.cutoff_cosine).then(|| spot_cosine / (1.0 - self.cutoff_cosine))
    }
}

impl Light for Spotlight {
    fn illuminate(&self, view_dir: &Vector3<f64>, hit: &Record, surfaces: &[Box<dyn Hit>]) -> Color {
        match self.falloff(&hit.point) {
            Some(factor) => factor * self.light.illuminate(view_dir, hit, surfaces),
            None => black(),
        }
    }

    fn source(&self) -> &LightSource {
        &self.light.source
    }

    fn source_mut(&mut self) -> &mut LightSource {
        &mut self.light.source
    }
}
