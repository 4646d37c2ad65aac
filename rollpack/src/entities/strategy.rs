use std::cmp::Reverse;
use std::fmt::Display;
use std::sync::Arc;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::Product;

/// A fixed, deterministic ordering of the input products.
/// All orderings are stable: products with equal keys keep their input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    VolumeDesc,
    WeightDesc,
    /// By height of the upright bounding box
    HeightDesc,
    /// By footprint area of the upright bounding box
    FootprintDesc,
    /// Fragile products first, then by descending volume
    FragileFirst,
    /// Stackable products first, then by descending volume
    StackableFirst,
    InputOrder,
}

impl Strategy {
    /// All built-in strategies, in their default order of definition
    pub const ALL: [Strategy; 7] = [
        Strategy::VolumeDesc,
        Strategy::WeightDesc,
        Strategy::HeightDesc,
        Strategy::FootprintDesc,
        Strategy::FragileFirst,
        Strategy::StackableFirst,
        Strategy::InputOrder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::VolumeDesc => "volume_desc",
            Strategy::WeightDesc => "weight_desc",
            Strategy::HeightDesc => "height_desc",
            Strategy::FootprintDesc => "footprint_desc",
            Strategy::FragileFirst => "fragile_first",
            Strategy::StackableFirst => "stackable_first",
            Strategy::InputOrder => "input_order",
        }
    }

    /// Returns the products in the order this strategy feeds them to the placement engine.
    pub fn order(&self, products: &[Arc<Product>]) -> Vec<Arc<Product>> {
        let volume = |p: &Arc<Product>| Reverse(OrderedFloat(p.volume()));
        let sorted = match self {
            Strategy::VolumeDesc => products.iter().sorted_by_cached_key(|p| volume(*p)),
            Strategy::WeightDesc => products
                .iter()
                .sorted_by_cached_key(|p| Reverse(OrderedFloat(p.weight()))),
            Strategy::HeightDesc => products
                .iter()
                .sorted_by_cached_key(|p| Reverse(OrderedFloat(p.dims().height))),
            Strategy::FootprintDesc => products
                .iter()
                .sorted_by_cached_key(|p| Reverse(OrderedFloat(p.dims().footprint_area()))),
            Strategy::FragileFirst => products
                .iter()
                .sorted_by_cached_key(|p| (!p.is_fragile(), volume(*p))),
            Strategy::StackableFirst => products
                .iter()
                .sorted_by_cached_key(|p| (!p.is_stackable(), volume(*p))),
            Strategy::InputOrder => return products.to_vec(),
        };
        sorted.cloned().collect_vec()
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
