use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::geometry::Orientation;
use crate::geometry::primitives::{AABox, Dims, Point3, Rect};

/// Phase of the placement engine in which an item was placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// On the container floor
    Floor,
    /// On a shelf level
    Shelf,
    /// Directly on top of previously placed items
    Stacked,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Floor => write!(f, "floor"),
            Phase::Shelf => write!(f, "shelf"),
            Phase::Stacked => write!(f, "stacked"),
        }
    }
}

/// Represents a [`Product`] that has been placed in a container
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub product: Arc<Product>,
    /// Minimum corner of the bounding box
    pub position: Point3,
    pub orientation: Orientation,
    /// Bounding box dimensions under `orientation`
    pub dims: Dims,
    /// Shelf band the item belongs to, 0 being the floor
    pub band: usize,
    pub phase: Phase,
}

impl PlacedItem {
    pub fn new(
        product: Arc<Product>,
        orientation: Orientation,
        position: Point3,
        band: usize,
        phase: Phase,
    ) -> Self {
        let dims = product.shape().oriented_dims(orientation);
        PlacedItem {
            product,
            position,
            orientation,
            dims,
            band,
            phase,
        }
    }

    pub fn bbox(&self) -> AABox {
        AABox::from_corner(self.position, self.dims)
    }

    pub fn footprint(&self) -> Rect {
        self.bbox().footprint()
    }

    /// Height of the top face
    pub fn top(&self) -> f32 {
        self.position.2 + self.dims.height
    }

    pub fn weight(&self) -> f32 {
        self.product.weight()
    }
}
