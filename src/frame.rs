use crate::{error::Error, material::Color, tracer::PixelSink};
use std::path::Path;

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
    fn from_rgba32(rgba: (u8, u8, u8, u8)) -> Self;
}

/// Channels are clamped to `[0, 1]` before quantizing.
impl Rgba32 for Color {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.x), quantize(self.y), quantize(self.z), 255)
    }

    fn from_rgba32((r, g, b, _): (u8, u8, u8, u8)) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

/// RGBA8 pixels with the origin at the top-left, ready for blitting.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * 4].into_boxed_slice(),
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn set_pixel<T: Rgba32>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + y * self.width) * 4;
        let stop = start + 4;
        let (r, g, b, a) = color.to_rgba32();
        self.pixel_data[start..stop].copy_from_slice(&[r, g, b, a]);
    }

    pub fn get_pixel<T: Rgba32>(&self, x: usize, y: usize) -> T {
        let start = (x + y * self.width) * 4;
        let p = &self.pixel_data[start..start + 4];
        T::from_rgba32((p[0], p[1], p[2], p[3]))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.pixel_data,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgba8,
        )
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Tracer rows count up from the bottom; buffer rows count down from the top.
impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let row = self.height - 1 - y;
        FrameBuffer::set_pixel(self, x, row, color);
    }
}
