use std::sync::Arc;
use std::time::Instant;

use itertools::Itertools;
use log::debug;
use thousands::Separable;

use rollpack::entities::{Container, PackingResult, Phase, Product, Strategy};
use rollpack::geometry::Orientation;
use rollpack::geometry::primitives::{Dims, Rect};
use rollpack::occupancy::{Occupancy, Placement};

use crate::config::PackConfig;
use crate::opt::search;

/// Left-bottom-fill placement engine.
/// Places an ordered sequence of products in three phases: on the floor,
/// on the shelves and finally on top of previously placed items.
/// Every run starts from an empty container and is fully deterministic, unless a time budget is set.
pub struct PlacementEngine<'a> {
    pub config: &'a PackConfig,
    pub occupancy: Occupancy,
    /// Number of candidate positions evaluated so far
    pub n_evaluated: usize,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(container: &Container, config: &'a PackConfig) -> Self {
        let shelf_interval = config.shelf_interval.unwrap_or(container.shelf_interval());
        Self {
            config,
            occupancy: Occupancy::new(container, shelf_interval, config.tolerance),
            n_evaluated: 0,
        }
    }

    /// Places the products in the given order, consuming the engine.
    /// Products which could not be placed in any phase end up in [`PackingResult::unplaced`].
    pub fn solve(
        mut self,
        products: Vec<Arc<Product>>,
        strategy: Strategy,
        strategy_index: usize,
    ) -> PackingResult {
        let start = Instant::now();
        let deadline = self
            .config
            .time_budget_per_strategy
            .and_then(|budget| start.checked_add(budget));
        let n_products = products.len();
        let mut timed_out = false;

        let mut pending = products;
        for phase in [Phase::Floor, Phase::Shelf, Phase::Stacked] {
            let mut remaining = vec![];
            let mut queue = pending.into_iter();
            for product in queue.by_ref() {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    timed_out = true;
                    remaining.push(product);
                    break;
                }
                match self.find_placement(&product, phase) {
                    Some(placement) => self.place(product, placement),
                    None => remaining.push(product),
                }
            }
            remaining.extend(queue);
            pending = remaining;
            if timed_out || pending.is_empty() {
                break;
            }
        }

        debug!(
            "[ENG] {strategy} finished in {:.3}ms: {}/{} placed, {} positions evaluated{}",
            start.elapsed().as_secs_f64() * 1000.0,
            self.occupancy.n_placed(),
            n_products,
            self.n_evaluated.separate_with_commas(),
            if timed_out { " (timed out)" } else { "" }
        );

        self.occupancy
            .into_result(pending, strategy, strategy_index, timed_out)
    }

    /// Searches a placement for `product` in a specific phase.
    pub fn find_placement(&mut self, product: &Product, phase: Phase) -> Option<Placement> {
        if !self.occupancy.admits_weight(product.weight()) {
            return None;
        }
        let variants = product.orientation_variants();
        match phase {
            Phase::Floor => self.floor_placement(&variants),
            Phase::Shelf => self.shelf_placement(product, &variants),
            Phase::Stacked => self.stacked_placement(product, &variants),
        }
    }

    fn floor_placement(&mut self, variants: &[(Orientation, Dims)]) -> Option<Placement> {
        search::first_fit(
            &self.occupancy,
            variants,
            0.0,
            |_| true,
            &mut self.n_evaluated,
        )
        .map(|(orientation, bbox)| Placement {
            orientation,
            position: bbox.min_corner(),
            band: 0,
            phase: Phase::Floor,
            structural: false,
        })
    }

    /// Tries the shelf bands from the highest to the lowest.
    /// An item rests on the shelf board if the shelf is (or can still be) installed,
    /// otherwise it has to be carried by the items below, which limits its weight.
    fn shelf_placement(
        &mut self,
        product: &Product,
        variants: &[(Orientation, Dims)],
    ) -> Option<Placement> {
        let loadable = self.within_stack_load(product);
        let occ = &self.occupancy;
        let tol = self.config.tolerance;
        let support_ratio = self.config.support_ratio;
        let n_evaluated = &mut self.n_evaluated;

        (1..=occ.n_bands()).rev().find_map(|band| {
            let structural = occ.shelf_available(band);
            if !structural && !loadable {
                return None;
            }
            let level = occ.band_level(band);
            let clearance = occ.band_clearance(band);
            let free_area = occ.band_free_area(band);
            let band_variants = variants
                .iter()
                .filter(|(_, dims)| {
                    dims.height <= clearance + tol && dims.footprint_area() <= free_area + tol
                })
                .copied()
                .collect_vec();

            search::first_fit(
                occ,
                &band_variants,
                level,
                |bbox| {
                    let footprint = bbox.footprint();
                    !rests_on_fragile(occ, &footprint, level)
                        && (structural || carried_by_items(occ, &footprint, level, support_ratio))
                },
                n_evaluated,
            )
            .map(|(orientation, bbox)| Placement {
                orientation,
                position: bbox.min_corner(),
                band,
                phase: Phase::Shelf,
                structural,
            })
        })
    }

    /// Tries to put the product directly on top of a placed item, in placement order.
    fn stacked_placement(
        &mut self,
        product: &Product,
        variants: &[(Orientation, Dims)],
    ) -> Option<Placement> {
        if !self.within_stack_load(product) {
            return None;
        }
        let tol = self.config.tolerance;
        let occ = &self.occupancy;
        let support_ratio = self.config.support_ratio;
        let n_evaluated = &mut self.n_evaluated;

        occ.placed_items()
            .filter(|target| target.product.is_stackable() && !target.product.is_fragile())
            .find_map(|target| {
                let z = target.top();
                let target_top = target.footprint();
                search::first_fit(
                    occ,
                    variants,
                    z,
                    |bbox| {
                        let footprint = bbox.footprint();
                        footprint.overlaps(&target_top, tol)
                            && carried_by_items(occ, &footprint, z, support_ratio)
                    },
                    n_evaluated,
                )
                .map(|(orientation, bbox)| Placement {
                    orientation,
                    position: bbox.min_corner(),
                    band: target.band,
                    phase: Phase::Stacked,
                    structural: false,
                })
            })
    }

    /// Whether the product may rest on top of other items
    fn within_stack_load(&self, product: &Product) -> bool {
        self.config
            .max_stack_load_per_item
            .is_none_or(|load| product.weight() <= load)
    }

    fn place(&mut self, product: Arc<Product>, placement: Placement) {
        debug!(
            "[ENG] placing {} ({}) at [{:.1}, {:.1}, {:.1}] {:?}, {} in band {}",
            product.id(),
            self.occupancy.n_placed() + 1,
            placement.position.x(),
            placement.position.y(),
            placement.position.z(),
            placement.orientation,
            placement.phase,
            placement.band
        );
        self.occupancy.place(product, placement);
    }
}

/// Whether any fragile item has its top flush against `footprint` at height `z`
fn rests_on_fragile(occ: &Occupancy, footprint: &Rect, z: f32) -> bool {
    occ.resting_on(footprint, z).any(|pi| pi.product.is_fragile())
}

/// Whether the items directly below `footprint` at height `z` can carry it:
/// all of them are stackable and not fragile, and together they support a large enough share of the footprint.
fn carried_by_items(occ: &Occupancy, footprint: &Rect, z: f32, support_ratio: f32) -> bool {
    let all_loadable = occ
        .resting_on(footprint, z)
        .all(|pi| pi.product.is_stackable() && !pi.product.is_fragile());

    all_loadable
        && occ.support_area(footprint, z, |_| true)
            >= support_ratio * footprint.area() - occ.tolerance()
}
