use anyhow::{Result, ensure};

use crate::geometry::primitives::AABox;

/// A roll container in which [`Product`](crate::entities::Product)s are placed.
/// Its origin is the left-bottom-front corner of the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    name: String,
    length: f32,
    width: f32,
    height: f32,
    max_weight: f32,
    /// Vertical spacing between shelf levels
    shelf_interval: f32,
}

impl Container {
    pub const DEFAULT_SHELF_INTERVAL: f32 = 20.0;
    pub const DEFAULT_NAME: &'static str = "Roll Container";

    pub fn new(length: f32, width: f32, height: f32, max_weight: f32) -> Result<Self> {
        let container = Container {
            name: Self::DEFAULT_NAME.to_string(),
            length,
            width,
            height,
            max_weight,
            shelf_interval: Self::DEFAULT_SHELF_INTERVAL,
        };
        container.validate()?;
        Ok(container)
    }

    /// The standard roll container: 100×80×170 with a capacity of 300 and shelves every 20.
    pub fn standard() -> Self {
        Container {
            name: Self::DEFAULT_NAME.to_string(),
            length: 100.0,
            width: 80.0,
            height: 170.0,
            max_weight: 300.0,
            shelf_interval: Self::DEFAULT_SHELF_INTERVAL,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_shelf_interval(mut self, shelf_interval: f32) -> Result<Self> {
        self.shelf_interval = shelf_interval;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "container {name} must be positive and finite, got {value}"
            );
        }
        ensure!(
            self.max_weight.is_finite() && self.max_weight > 0.0,
            "container weight capacity must be positive and finite, got {}",
            self.max_weight
        );
        ensure!(
            self.shelf_interval.is_finite() && self.shelf_interval > 0.0,
            "shelf interval must be positive and finite, got {}",
            self.shelf_interval
        );
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    pub fn shelf_interval(&self) -> f32 {
        self.shelf_interval
    }

    pub fn volume(&self) -> f32 {
        self.length * self.width * self.height
    }

    pub fn floor_area(&self) -> f32 {
        self.length * self.width
    }

    /// The interior of the container as a box
    pub fn bounds(&self) -> AABox {
        AABox {
            x_min: 0.0,
            y_min: 0.0,
            z_min: 0.0,
            x_max: self.length,
            y_max: self.width,
            z_max: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 80.0, 170.0, 300.0; "zero length")]
    #[test_case(100.0, -80.0, 170.0, 300.0; "negative width")]
    #[test_case(100.0, 80.0, f32::NAN, 300.0; "nan height")]
    #[test_case(100.0, 80.0, 170.0, 0.0; "zero capacity")]
    #[test_case(100.0, 80.0, 170.0, -1.0; "negative capacity")]
    fn invalid_containers_are_rejected(l: f32, w: f32, h: f32, max_weight: f32) {
        assert!(Container::new(l, w, h, max_weight).is_err());
    }

    #[test]
    fn standard_container_is_valid() {
        let standard = Container::standard();
        let built = Container::new(100.0, 80.0, 170.0, 300.0).unwrap();
        assert_eq!(standard, built);
        assert_eq!(standard.volume(), 1_360_000.0);
        assert_eq!(standard.shelf_interval(), 20.0);
    }

    #[test]
    fn non_positive_shelf_interval_is_rejected() {
        assert!(Container::standard().with_shelf_interval(0.0).is_err());
        assert!(Container::standard().with_shelf_interval(25.0).is_ok());
    }
}
