//! Recursive Whitted-style ray tracer.
//!
//! A [`Scene`] holds analytically intersected surfaces and Phong lights; a
//! [`RayTracer`] turns each pixel of its [`Camera`] into a primary ray, shades
//! the nearest hit with shadow-tested lights and follows mirror bounces up to
//! a fixed depth.

pub mod camera;
pub mod config;
pub mod cylinder;
pub mod demo;
pub mod error;
pub mod frame;
pub mod hit;
pub mod light;
pub mod logger;
pub mod material;
pub mod plane;
pub mod polygon;
pub mod quadric;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod tracer;

pub use camera::{Camera, Projection};
pub use cylinder::Cylinder;
pub use error::Error;
pub use frame::FrameBuffer;
pub use hit::{Hit, Record};
pub use light::{DirectionalLight, Light, LightSource, PositionalLight, Spotlight};
pub use material::{Color, Material};
pub use plane::Plane;
pub use polygon::SimplePolygon;
pub use quadric::{Coefficients, Ellipsoid, Quadric};
pub use ray::Ray;
pub use scene::{LightId, Scene};
pub use sphere::Sphere;
pub use tracer::{PixelSink, RayTracer};
