use std::path::Path;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;

use rollpack::entities::{Container, Product, Strategy};
use rollpack::io::import;
use rollpack_lbf::config::PackConfig;
use rollpack_lbf::io;
use rollpack_lbf::opt::engine::PlacementEngine;

criterion_main!(benches);
criterion_group!(benches, strategy_bench, pack_bench);

const INSTANCE_PATH: &str = "../assets/roll_container.json";

fn load_instance() -> (Container, Vec<Product>) {
    let ext_instance = io::read_instance(Path::new(INSTANCE_PATH)).expect("could not read instance");
    import::import_instance(&ext_instance).expect("could not import instance")
}

/// Benchmark a single run of the placement engine for every strategy
fn strategy_bench(c: &mut Criterion) {
    let (container, products) = load_instance();
    let products = products.into_iter().map(Arc::new).collect_vec();
    let config = PackConfig::default();

    let mut group = c.benchmark_group("engine_run");
    for (index, strategy) in Strategy::ALL.into_iter().enumerate() {
        let ordering = strategy.order(&products);
        group.bench_function(BenchmarkId::from_parameter(strategy), |b| {
            b.iter(|| PlacementEngine::new(&container, &config).solve(ordering.clone(), strategy, index))
        });
    }
    group.finish();
}

/// Benchmark the full selection over all strategies, sequentially and in parallel
fn pack_bench(c: &mut Criterion) {
    let (container, products) = load_instance();

    let mut group = c.benchmark_group("pack");
    for parallel in [false, true] {
        let config = PackConfig {
            parallel,
            ..PackConfig::default()
        };
        group.bench_function(BenchmarkId::new("parallel", parallel), |b| {
            b.iter(|| rollpack_lbf::pack(&products, &container, &config).expect("invalid config"))
        });
    }
    group.finish();
}
