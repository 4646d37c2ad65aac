use itertools::Itertools;
use log::error;

use crate::entities::{PackingResult, PlacedItem};
use crate::geometry::primitives::AABox;

//Various checks to verify the correctness of packing results.
//Used in debug_assert!() blocks and in tests.

/// Checks all invariants a [`PackingResult`] has to satisfy
pub fn result_is_feasible(result: &PackingResult, bounds: &AABox, max_weight: f32, tol: f32) -> bool {
    items_within_bounds(&result.placed_items, bounds, tol)
        && items_do_not_overlap(&result.placed_items, tol)
        && weight_within_capacity(result, max_weight, tol)
        && no_item_rests_on_fragile(&result.placed_items, tol)
}

pub fn items_within_bounds(items: &[PlacedItem], bounds: &AABox, tol: f32) -> bool {
    match items.iter().find(|pi| !bounds.contains(&pi.bbox(), tol)) {
        Some(pi) => {
            error!("{} exceeds the container: {:?}", pi.product.id(), pi.bbox());
            false
        }
        None => true,
    }
}

pub fn items_do_not_overlap(items: &[PlacedItem], tol: f32) -> bool {
    match items
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.bbox().overlaps(&b.bbox(), tol))
    {
        Some((a, b)) => {
            error!("{} overlaps with {}", a.product.id(), b.product.id());
            false
        }
        None => true,
    }
}

pub fn weight_within_capacity(result: &PackingResult, max_weight: f32, tol: f32) -> bool {
    let sum = result.placed_items.iter().map(|pi| pi.weight()).sum::<f32>();
    if sum > max_weight || (sum - result.total_weight).abs() > tol {
        error!(
            "placed weight {sum} (reported {}) exceeds capacity {max_weight}",
            result.total_weight
        );
        return false;
    }
    true
}

/// No item may have its bottom flush with the top of a fragile item while their footprints overlap
pub fn no_item_rests_on_fragile(items: &[PlacedItem], tol: f32) -> bool {
    let violation = items
        .iter()
        .filter(|f| f.product.is_fragile())
        .cartesian_product(items.iter())
        .find(|(fragile, other)| {
            (other.position.2 - fragile.top()).abs() <= tol
                && other.footprint().overlaps(&fragile.footprint(), tol)
        });
    match violation {
        Some((fragile, other)) => {
            error!(
                "{} rests on fragile {}",
                other.product.id(),
                fragile.product.id()
            );
            false
        }
        None => true,
    }
}
