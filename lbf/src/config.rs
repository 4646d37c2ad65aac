use std::time::Duration;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use rollpack::entities::Strategy;

/// Configuration of a packing run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Vertical spacing between shelf levels. If undefined, the container's own interval is used
    pub shelf_interval: Option<f32>,
    /// Tolerance used in all geometric comparisons
    pub tolerance: f32,
    /// Minimum fraction of an item's footprint that has to be carried by the tops of the items below it,
    /// whenever it does not rest on the floor or on an installed shelf
    pub support_ratio: f32,
    /// Maximum weight of an item stacked on top of another. If undefined, only the container capacity applies
    pub max_stack_load_per_item: Option<f32>,
    /// Orderings to evaluate. Ties in score are won by the one listed first
    pub strategies: Vec<Strategy>,
    /// Wall-clock budget of a single strategy. If undefined, every strategy runs to completion
    pub time_budget_per_strategy: Option<Duration>,
    pub score_weights: ScoreWeights,
    /// Evaluate the strategies in parallel
    pub parallel: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            shelf_interval: None,
            tolerance: 0.01,
            support_ratio: 0.5,
            max_stack_load_per_item: None,
            strategies: Strategy::ALL.to_vec(),
            time_budget_per_strategy: None,
            score_weights: ScoreWeights::default(),
            parallel: true,
        }
    }
}

impl PackConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(shelf_interval) = self.shelf_interval {
            ensure!(
                shelf_interval.is_finite() && shelf_interval > 0.0,
                "shelf interval must be positive, got {shelf_interval}"
            );
        }
        ensure!(
            self.tolerance.is_finite() && self.tolerance >= 0.0,
            "tolerance must be non-negative, got {}",
            self.tolerance
        );
        ensure!(
            self.support_ratio > 0.0 && self.support_ratio <= 1.0,
            "support ratio must lie in (0, 1], got {}",
            self.support_ratio
        );
        if let Some(load) = self.max_stack_load_per_item {
            ensure!(load >= 0.0, "max stack load must be non-negative, got {load}");
        }
        ensure!(!self.strategies.is_empty(), "no strategies configured");
        self.score_weights.validate()
    }
}

/// Weights of the components of a packing score's quality
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the fraction of the input volume that was placed
    pub volume: f32,
    /// Weight of the fraction of the products that were placed
    pub count: f32,
    /// Weight of the fraction of the weight capacity that is used
    pub weight: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            volume: 0.5,
            count: 0.3,
            weight: 0.2,
        }
    }
}

impl ScoreWeights {
    fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("volume", self.volume),
            ("count", self.count),
            ("weight", self.weight),
        ] {
            ensure!(
                w.is_finite() && w >= 0.0,
                "score weight for {name} must be non-negative, got {w}"
            );
        }
        Ok(())
    }
}
