use std::f32::consts::PI;

use anyhow::{Result, ensure};

use crate::geometry::Orientation;
use crate::geometry::primitives::{AABox, Dims, Point3, Rect};

/// Shape of a product.
/// Cylinders are represented by their circumscribing box for placement and overlap tests.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Shape {
    Cuboid { length: f32, width: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
}

impl Shape {
    pub fn try_cuboid(length: f32, width: f32, height: f32) -> Result<Self> {
        let shape = Shape::Cuboid {
            length,
            width,
            height,
        };
        shape.validate()?;
        Ok(shape)
    }

    pub fn try_cylinder(radius: f32, height: f32) -> Result<Self> {
        let shape = Shape::Cylinder { radius, height };
        shape.validate()?;
        Ok(shape)
    }

    /// Checks that all linear dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let linear = match *self {
            Shape::Cuboid {
                length,
                width,
                height,
            } => vec![("length", length), ("width", width), ("height", height)],
            Shape::Cylinder { radius, height } => vec![("radius", radius), ("height", height)],
        };
        for (name, value) in linear {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be positive and finite, got {value}"
            );
        }
        Ok(())
    }

    /// Volume of the actual shape (not of its bounding box)
    pub fn volume(&self) -> f32 {
        match self {
            Shape::Cuboid {
                length,
                width,
                height,
            } => length * width * height,
            Shape::Cylinder { radius, height } => PI * radius * radius * height,
        }
    }

    /// Bounding box dimensions in the defined (upright) pose
    pub fn dims(&self) -> Dims {
        match *self {
            Shape::Cuboid {
                length,
                width,
                height,
            } => Dims::new(length, width, height),
            Shape::Cylinder { radius, height } => Dims::new(2.0 * radius, 2.0 * radius, height),
        }
    }

    /// Bounding box dimensions under `orientation`
    pub fn oriented_dims(&self, orientation: Orientation) -> Dims {
        orientation.apply(self.dims())
    }

    /// Bounding box of the shape under `orientation`, with its minimum corner at `corner`
    pub fn bbox(&self, orientation: Orientation, corner: Point3) -> AABox {
        AABox::from_corner(corner, self.oriented_dims(orientation))
    }

    /// Horizontal extent occupied under `orientation`, with its minimum corner at `(x, y)`
    pub fn footprint(&self, orientation: Orientation, x: f32, y: f32) -> Rect {
        self.bbox(orientation, Point3(x, y, 0.0)).footprint()
    }
}
