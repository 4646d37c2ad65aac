use anyhow::{Context, Result, ensure};

use crate::geometry::primitives::Dims;
use crate::geometry::{Orientation, OrientationRange, Shape};

/// A product to be placed in a [`Container`](crate::entities::Container).
/// Validated on construction and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    shape: Shape,
    weight: f32,
    /// Nothing may rest directly on top of a fragile product
    fragile: bool,
    /// Whether other products may be stacked on top of this one
    stackable: bool,
    allowed_orientations: OrientationRange,
}

impl Product {
    /// Creates an ordinary (non-fragile, stackable, upright) product.
    pub fn new(id: impl Into<String>, shape: Shape, weight: f32) -> Result<Self> {
        let id = id.into();
        shape
            .validate()
            .with_context(|| format!("invalid shape for product {id}"))?;
        ensure!(
            weight.is_finite() && weight >= 0.0,
            "weight of product {id} must be non-negative and finite, got {weight}"
        );
        Ok(Product {
            name: id.clone(),
            id,
            shape,
            weight,
            fragile: false,
            stackable: true,
            allowed_orientations: OrientationRange::default(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn with_orientations(mut self, range: OrientationRange) -> Result<Self> {
        ensure!(
            !range.orientations().is_empty(),
            "product {} needs at least one allowed orientation",
            self.id
        );
        self.allowed_orientations = range;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn is_fragile(&self) -> bool {
        self.fragile
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    pub fn allowed_orientations(&self) -> &OrientationRange {
        &self.allowed_orientations
    }

    pub fn volume(&self) -> f32 {
        self.shape.volume()
    }

    /// Bounding box dimensions in the defined pose
    pub fn dims(&self) -> Dims {
        self.shape.dims()
    }

    /// All allowed orientations with their bounding box dimensions.
    /// Orientations resulting in the same dimensions as an earlier one are skipped.
    pub fn orientation_variants(&self) -> Vec<(Orientation, Dims)> {
        let mut variants: Vec<(Orientation, Dims)> = vec![];
        for &o in self.allowed_orientations.orientations() {
            let dims = self.shape.oriented_dims(o);
            if !variants.iter().any(|(_, d)| d.almost_eq(&dims)) {
                variants.push((o, dims));
            }
        }
        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weight_is_rejected() {
        let shape = Shape::try_cuboid(10.0, 10.0, 10.0).unwrap();
        assert!(Product::new("P", shape, -0.5).is_err());
        assert!(Product::new("P", shape, f32::INFINITY).is_err());
        assert!(Product::new("P", shape, 0.0).is_ok());
    }

    #[test]
    fn invalid_shape_is_rejected() {
        let shape = Shape::Cuboid {
            length: 10.0,
            width: 0.0,
            height: 5.0,
        };
        assert!(Product::new("P", shape, 1.0).is_err());
    }

    #[test]
    fn square_footprint_has_single_upright_variant() {
        let p = Product::new("CYL", Shape::try_cylinder(10.0, 35.0).unwrap(), 4.5).unwrap();
        let variants = p.orientation_variants();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].0, Orientation::Upright);
    }

    #[test]
    fn cube_has_single_variant_in_any_orientation() {
        let p = Product::new("CUBE", Shape::try_cuboid(20.0, 20.0, 20.0).unwrap(), 1.0)
            .unwrap()
            .with_orientations(OrientationRange::Any)
            .unwrap();
        assert_eq!(p.orientation_variants().len(), 1);
    }

    #[test]
    fn box_has_six_distinct_variants() {
        let p = Product::new("BOX", Shape::try_cuboid(40.0, 30.0, 20.0).unwrap(), 1.0)
            .unwrap()
            .with_orientations(OrientationRange::Any)
            .unwrap();
        assert_eq!(p.orientation_variants().len(), 6);
    }

    #[test]
    fn empty_discrete_range_is_rejected() {
        let p = Product::new("BOX", Shape::try_cuboid(40.0, 30.0, 20.0).unwrap(), 1.0).unwrap();
        assert!(p.with_orientations(OrientationRange::Discrete(vec![])).is_err());
    }
}
