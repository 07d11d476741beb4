use nalgebra::Vector3;

pub type Color = Vector3<f64>;

pub fn black() -> Color {
    Color::zeros()
}

pub fn white() -> Color {
    Color::new(1.0, 1.0, 1.0)
}

/// Phong material. Surfaces own one and hits carry a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    /// Phong exponent.
    pub shininess: f64,
}

impl Material {
    pub const DEFAULT_SHININESS: f64 = 128.0;

    /// Ambient follows the diffuse color, specular is white, nothing is emitted.
    pub fn new(diffuse: Color) -> Self {
        Self {
            ambient: diffuse,
            diffuse,
            specular: white(),
            emissive: black(),
            shininess: Self::DEFAULT_SHININESS,
        }
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_specular(mut self, specular: Color, shininess: f64) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(white())
    }
}

impl From<Color> for Material {
    fn from(diffuse: Color) -> Self {
        Self::new(diffuse)
    }
}
