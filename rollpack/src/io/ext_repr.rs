use serde::{Deserialize, Serialize};

use crate::entities::{Container, Phase, Strategy};
use crate::geometry::{Orientation, OrientationRange};

/// External representation of a packing instance: a container and the products to place in it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub container: ExtContainer,
    pub products: Vec<ExtProduct>,
}

/// External representation of a [`Container`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub max_weight: f32,
    /// Vertical spacing between shelf levels
    #[serde(default = "default_shelf_interval")]
    pub shelf_interval: f32,
}

fn default_shelf_interval() -> f32 {
    Container::DEFAULT_SHELF_INTERVAL
}

/// External representation of a [`Product`](crate::entities::Product).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProduct {
    /// Unique identifier of the product
    pub id: String,
    /// Human-readable name, defaults to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub shape: ExtShape,
    pub weight: f32,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    /// Orientations in which the product may be placed.
    /// Upright (turning about the vertical axis only) if not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_orientations: Option<OrientationRange>,
}

fn default_stackable() -> bool {
    true
}

/// Shapes a product can have
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Cuboid { length: f32, width: f32, height: f32 },
    /// Cylinder standing on its base
    Cylinder { radius: f32, height: f32 },
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackingResult {
    /// The strategy which produced this result
    pub strategy: Strategy,
    pub strategy_index: usize,
    /// The placed items, in placement order
    pub placed_items: Vec<ExtPlacedItem>,
    /// Ids of the products which could not be placed
    pub unplaced: Vec<String>,
    pub total_weight: f32,
    /// Ratio of placed product volume to container volume
    pub utilization: f32,
    #[serde(default)]
    pub timed_out: bool,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    /// The id of the placed product
    pub product_id: String,
    /// Minimum corner of the bounding box
    pub position: (f32, f32, f32),
    /// Bounding box dimensions in the placed orientation
    pub dims: (f32, f32, f32),
    pub orientation: Orientation,
    pub band: usize,
    pub phase: Phase,
    pub fragile: bool,
}
