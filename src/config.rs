use crate::{camera::Projection, error::Error};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Red cylinder lit by all four kinds of light.
    Cylinder,
    /// Three balls above a floor.
    Spheres,
}

#[derive(Debug, Parser)]
#[command(name = "whitted", about = "Recursive Whitted-style ray tracer")]
pub struct Args {
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 30.0)]
    pub fov: f64,

    /// Render orthographically with this view plane height.
    #[arg(long, conflicts_with = "fov")]
    pub ortho: Option<f64>,

    /// Maximum number of reflection bounces.
    #[arg(short, long, default_value_t = 2)]
    pub depth: i32,

    #[arg(long, value_enum, default_value_t = SceneChoice::Cylinder)]
    pub scene: SceneChoice,

    /// Write the frame to this PNG file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show the frame in a window (needs the `window` feature).
    #[arg(short, long)]
    pub window: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Validated settings for one render session.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub projection: Projection,
    pub depth: i32,
    pub scene: SceneChoice,
    pub output: Option<PathBuf>,
    pub window: bool,
}

impl Args {
    pub fn validate(&self) -> Result<RenderConfig, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let projection = match self.ortho {
            Some(plane_height) if !(plane_height > 0.0) => {
                return Err(Error::InvalidPlaneHeight(plane_height))
            }
            Some(plane_height) => Projection::Orthographic { plane_height },
            None if !(self.fov > 0.0 && self.fov < 180.0) => {
                return Err(Error::InvalidFieldOfView(self.fov))
            }
            None => Projection::Perspective {
                fov_degrees: self.fov,
            },
        };
        Ok(RenderConfig {
            width: self.width as usize,
            height: self.height as usize,
            projection,
            depth: self.depth,
            scene: self.scene,
            output: self.output.clone(),
            window: self.window,
        })
    }
}
