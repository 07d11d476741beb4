use crate::{
    config::SceneChoice,
    cylinder::Cylinder,
    light::{DirectionalLight, LightSource, PositionalLight, Spotlight},
    material::{black, white, Color, Material},
    plane::Plane,
    scene::{LightId, Scene},
    sphere::Sphere,
};
use nalgebra::Vector3;

pub fn light_blue() -> Color {
    Color::new(0.784, 0.784, 1.0)
}

fn red() -> Color {
    Color::new(1.0, 0.0, 0.0)
}

fn green() -> Color {
    Color::new(0.0, 1.0, 0.0)
}

fn blue() -> Color {
    Color::new(0.0, 0.0, 1.0)
}

/// Handles for switching the demo lights on and off between frames.
#[derive(Clone, Copy, Debug)]
pub struct DemoLights {
    pub ambient: LightId,
    pub positional: LightId,
    pub directional: LightId,
    pub spot: LightId,
}

pub fn build(choice: SceneChoice) -> (Scene, DemoLights) {
    let mut scene = Scene::new();
    match choice {
        SceneChoice::Cylinder => {
            scene.add_surface(Cylinder::new(Vector3::new(0.0, 0.0, -10.0), 1.0, 10.0, red()));
        }
        SceneChoice::Spheres => {
            let glowing_red = Material::new(red()).with_emissive(0.03 * red());
            scene.add_surface(Sphere::new(Vector3::new(0.0, 0.0, -10.0), 1.5, glowing_red));
            scene.add_surface(Sphere::new(Vector3::new(2.0, 0.5, -10.0), 1.0, blue()));
            scene.add_surface(Sphere::new(Vector3::new(-1.8, 0.0, -10.0), 0.5, green()));
            scene.add_surface(Plane::new(
                Vector3::new(0.0, -20.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                white(),
            ));
        }
    }
    let lights = add_lights(&mut scene);
    (scene, lights)
}

fn add_lights(scene: &mut Scene) -> DemoLights {
    let spot = scene.add_light(Spotlight::with_cutoff_degrees(
        Vector3::new(500.0, 1000.0, -10.0),
        Vector3::new(0.0, -1.0, 0.0),
        15.0,
        Color::new(0.75, 0.75, 0.75),
    ));
    let positional = scene.add_light(PositionalLight::new(Vector3::new(-10.0, 10.0, 10.0), white()));
    let directional = scene.add_light(DirectionalLight::new(
        Vector3::new(-10.0, 10.0, -10.0),
        Color::new(0.75, 0.75, 0.75),
    ));
    let ambient =
        scene.add_light(LightSource::new(black()).with_ambient(Color::new(0.15, 0.15, 0.15)));
    DemoLights {
        ambient,
        positional,
        directional,
        spot,
    }
}
