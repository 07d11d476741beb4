use crate::{
    hit::{Hit, Record},
    light::Light,
    Ray,
};

/// Nearest hit over `surfaces` by linear scan. Ties go to the surface that
/// comes first.
pub fn closest_hit(ray: &Ray, surfaces: &[Box<dyn Hit>]) -> Record {
    surfaces
        .iter()
        .map(|surface| surface.hit(ray))
        .fold(Record::miss(), |closest, record| {
            if record.t < closest.t {
                record
            } else {
                closest
            }
        })
}

/// Handle to a light added to a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightId(usize);

#[derive(Default)]
pub struct Scene {
    surfaces: Vec<Box<dyn Hit>>,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_surface(&mut self, surface: impl Hit + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    pub fn add_light(&mut self, light: impl Light + 'static) -> LightId {
        self.lights.push(Box::new(light));
        LightId(self.lights.len() - 1)
    }

    pub fn surfaces(&self) -> &[Box<dyn Hit>] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn light(&self, id: LightId) -> Option<&dyn Light> {
        self.lights.get(id.0).map(|light| light.as_ref())
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut (dyn Light + 'static)> {
        self.lights.get_mut(id.0).map(|light| light.as_mut())
    }

    pub fn closest_hit(&self, ray: &Ray) -> Record {
        closest_hit(ray, &self.surfaces)
    }
}
