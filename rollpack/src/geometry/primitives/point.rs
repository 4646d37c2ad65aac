use crate::util::FPA;

/// Point in 3D space, `(x, y, z)`.
/// `x` runs along the container length, `y` along its width and `z` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(pub f32, pub f32, pub f32);

impl Point3 {
    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    pub fn z(&self) -> f32 {
        self.2
    }
}

/// Extents of an axis-aligned box: length (x), width (y) and height (z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dims {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Dims {
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Dims {
            length,
            width,
            height,
        }
    }

    pub fn volume(&self) -> f32 {
        self.length * self.width * self.height
    }

    pub fn footprint_area(&self) -> f32 {
        self.length * self.width
    }

    /// Equality with a tolerance for floating point precision
    pub fn almost_eq(&self, other: &Dims) -> bool {
        FPA(self.length) == FPA(other.length)
            && FPA(self.width) == FPA(other.width)
            && FPA(self.height) == FPA(other.height)
    }
}
