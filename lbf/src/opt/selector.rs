use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;

use rollpack::entities::{Container, PackingResult, Product, Strategy};

use crate::config::PackConfig;
use crate::opt::engine::PlacementEngine;
use crate::opt::score::PackScore;

/// Result of running the placement engine with a single strategy
#[derive(Clone, Debug)]
pub struct StrategyOutcome {
    pub result: PackingResult,
    pub score: PackScore,
}

/// Packs the products into the container with every configured strategy and returns the best result.
///
/// Fails only on an invalid configuration, before any strategy has run.
/// Products which do not fit are reported in [`PackingResult::unplaced`].
pub fn pack(
    products: &[Product],
    container: &Container,
    config: &PackConfig,
) -> Result<PackingResult> {
    config.validate().context("invalid packing configuration")?;

    let products = products.iter().cloned().map(Arc::new).collect_vec();
    let outcomes = evaluate_strategies(&products, container, config);
    let best = select_best(outcomes).context("no strategy was evaluated")?;

    info!(
        "[SEL] selected {} (#{}): {}/{} placed, {:.2}% utilization, {:.1} weight",
        best.result.strategy,
        best.result.strategy_index,
        best.result.n_placed(),
        products.len(),
        best.result.utilization * 100.0,
        best.result.total_weight
    );
    Ok(best.result)
}

/// Runs the placement engine once per configured strategy, each on an empty container.
/// Outcomes are returned in the order of `config.strategies`, regardless of `config.parallel`.
pub fn evaluate_strategies(
    products: &[Arc<Product>],
    container: &Container,
    config: &PackConfig,
) -> Vec<StrategyOutcome> {
    let input_volume = products.iter().map(|p| p.volume()).sum::<f32>();
    let evaluate = |(index, strategy): (usize, &Strategy)| {
        evaluate_strategy(*strategy, index, products, container, config, input_volume)
    };

    match config.parallel {
        true => config.strategies.par_iter().enumerate().map(evaluate).collect(),
        false => config.strategies.iter().enumerate().map(evaluate).collect(),
    }
}

fn evaluate_strategy(
    strategy: Strategy,
    index: usize,
    products: &[Arc<Product>],
    container: &Container,
    config: &PackConfig,
    input_volume: f32,
) -> StrategyOutcome {
    let start = Instant::now();
    let ordering = strategy.order(products);
    let result = PlacementEngine::new(container, config).solve(ordering, strategy, index);
    let score = PackScore::new(
        &result,
        products.len(),
        input_volume,
        container.max_weight(),
        &config.score_weights,
    );

    info!(
        "[SEL] [#{index}] {strategy}: {}/{} placed, {:.2}% utilization, score {score} in {:.3}ms{}",
        result.n_placed(),
        products.len(),
        result.utilization * 100.0,
        start.elapsed().as_secs_f64() * 1000.0,
        if result.timed_out { " (timed out)" } else { "" }
    );

    StrategyOutcome { result, score }
}

/// Highest score wins, ties go to the lowest strategy index.
pub fn select_best(outcomes: impl IntoIterator<Item = StrategyOutcome>) -> Option<StrategyOutcome> {
    outcomes.into_iter().max_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| b.result.strategy_index.cmp(&a.result.strategy_index))
    })
}
