use std::sync::Arc;

use crate::entities::{PlacedItem, Product, Strategy};

/// Outcome of a packing run.
/// `placed_items` is in placement order, which doubles as the step sequence of a visualization.
#[derive(Clone, Debug)]
pub struct PackingResult {
    pub placed_items: Vec<PlacedItem>,
    /// Products that could not be placed, in the order they were given up on
    pub unplaced: Vec<Arc<Product>>,
    pub total_weight: f32,
    /// Ratio of the volume of the placed products to the volume of the container
    pub utilization: f32,
    /// Strategy that produced this result
    pub strategy: Strategy,
    /// Index of `strategy` within the list of strategies that were evaluated
    pub strategy_index: usize,
    /// Whether the run was cut short by its time budget
    pub timed_out: bool,
}

impl PackingResult {
    pub fn n_placed(&self) -> usize {
        self.placed_items.len()
    }

    pub fn n_unplaced(&self) -> usize {
        self.unplaced.len()
    }

    /// Whether every product was placed
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Sum of the volumes of the placed products
    pub fn placed_volume(&self) -> f32 {
        self.placed_items.iter().map(|pi| pi.product.volume()).sum()
    }
}
