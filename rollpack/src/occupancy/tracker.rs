use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::entities::{Container, PackingResult, Phase, PlacedItem, Product, Strategy};
use crate::geometry::Orientation;
use crate::geometry::primitives::{AABox, Point3, Rect};
use crate::util::assertions;

new_key_type! {
    /// Unique key of a [`PlacedItem`] registered in an [`Occupancy`]
    pub struct PItemKey;
}

/// Where and how a product is to be placed, as decided by the placement engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub orientation: Orientation,
    pub position: Point3,
    pub band: usize,
    pub phase: Phase,
    /// The item rests on a shelf board, which gets installed when the item is placed
    pub structural: bool,
}

/// Occupancy state of a container during a single placement run.
/// Keeps track of the placed items, the installed shelves and the load.
/// Every run starts from a fresh [`Occupancy`], which is consumed into the [`PackingResult`].
///
/// Shelves are boards spanning the full container floor at every multiple of the shelf interval.
/// A shelf is installed as soon as an item is placed on it, from then on no item may cut through its level.
#[derive(Clone, Debug)]
pub struct Occupancy {
    bounds: AABox,
    max_weight: f32,
    shelf_interval: f32,
    tolerance: f32,
    placed_items: SlotMap<PItemKey, PlacedItem>,
    /// Keys in placement order
    order: Vec<PItemKey>,
    /// Per band, whether its shelf is installed. Band 0 is the floor, which is always there.
    installed_shelves: Vec<bool>,
    total_weight: f32,
}

impl Occupancy {
    pub fn new(container: &Container, shelf_interval: f32, tolerance: f32) -> Self {
        debug_assert!(shelf_interval > 0.0 && tolerance >= 0.0);
        // shelf levels k * interval strictly below the top, k >= 1
        let n_bands = ((container.height() - tolerance) / shelf_interval).ceil().max(1.0) as usize - 1;
        let mut installed_shelves = vec![false; n_bands + 1];
        installed_shelves[0] = true;

        Occupancy {
            bounds: container.bounds(),
            max_weight: container.max_weight(),
            shelf_interval,
            tolerance,
            placed_items: SlotMap::with_key(),
            order: vec![],
            installed_shelves,
            total_weight: 0.0,
        }
    }

    pub fn bounds(&self) -> &AABox {
        &self.bounds
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn shelf_interval(&self) -> f32 {
        self.shelf_interval
    }

    /// Number of shelf bands above the floor
    pub fn n_bands(&self) -> usize {
        self.installed_shelves.len() - 1
    }

    /// Height of the shelf of band `band`, 0.0 for the floor
    pub fn band_level(&self, band: usize) -> f32 {
        band as f32 * self.shelf_interval
    }

    pub fn is_shelf_installed(&self, band: usize) -> bool {
        self.installed_shelves[band]
    }

    /// Whether an item can rest on the shelf of `band`:
    /// either it is already installed, or no placed item cuts through its level.
    pub fn shelf_available(&self, band: usize) -> bool {
        let level = self.band_level(band);
        self.installed_shelves[band]
            || !self
                .placed_items
                .values()
                .any(|pi| pi.bbox().straddles(level, self.tolerance))
    }

    /// Vertical room above the level of `band`, up to the next installed shelf or the container top.
    pub fn band_clearance(&self, band: usize) -> f32 {
        let next_level = (band + 1..self.installed_shelves.len())
            .find(|&b| self.installed_shelves[b])
            .map_or(self.bounds.z_max, |b| self.band_level(b));
        next_level - self.band_level(band)
    }

    /// Floor area of `band` not yet covered by items resting on its level.
    pub fn band_free_area(&self, band: usize) -> f32 {
        let level = self.band_level(band);
        let covered = self
            .placed_items
            .values()
            .filter(|pi| (pi.position.2 - level).abs() <= self.tolerance)
            .map(|pi| pi.footprint().area())
            .sum::<f32>();
        f32::max(self.bounds.footprint().area() - covered, 0.0)
    }

    /// All placed items in placement order
    pub fn placed_items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.order.iter().map(|k| &self.placed_items[*k])
    }

    pub fn n_placed(&self) -> usize {
        self.order.len()
    }

    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    pub fn remaining_weight(&self) -> f32 {
        self.max_weight - self.total_weight
    }

    /// Whether `weight` can be added without the load exceeding the capacity.
    /// No tolerance applies, the capacity is a hard limit.
    pub fn admits_weight(&self, weight: f32) -> bool {
        self.total_weight + weight <= self.max_weight
    }

    pub fn within_bounds(&self, bbox: &AABox) -> bool {
        self.bounds.contains(bbox, self.tolerance)
    }

    /// Whether `bbox` intersects any placed item
    pub fn collides(&self, bbox: &AABox) -> bool {
        self.placed_items
            .values()
            .any(|pi| pi.bbox().overlaps(bbox, self.tolerance))
    }

    /// Whether `bbox` cuts through the level of an installed shelf
    pub fn straddles_installed_shelf(&self, bbox: &AABox) -> bool {
        (1..self.installed_shelves.len())
            .filter(|&b| self.installed_shelves[b])
            .any(|b| bbox.straddles(self.band_level(b), self.tolerance))
    }

    /// Whether `bbox` lies within the container, avoids all placed items and does not cut through an installed shelf.
    pub fn fits(&self, bbox: &AABox) -> bool {
        self.within_bounds(bbox) && !self.straddles_installed_shelf(bbox) && !self.collides(bbox)
    }

    /// Placed items whose top is flush with height `z` and whose footprint overlaps `footprint`.
    pub fn resting_on<'a>(
        &'a self,
        footprint: &'a Rect,
        z: f32,
    ) -> impl Iterator<Item = &'a PlacedItem> + 'a {
        self.placed_items().filter(move |pi| {
            (pi.top() - z).abs() <= self.tolerance
                && pi.footprint().overlaps(footprint, self.tolerance)
        })
    }

    /// Area of `footprint` carried by the tops of placed items at height `z` which pass `filter`.
    pub fn support_area(&self, footprint: &Rect, z: f32, filter: impl Fn(&PlacedItem) -> bool) -> f32 {
        self.resting_on(footprint, z)
            .filter(|pi| filter(*pi))
            .map(|pi| pi.footprint().intersection_area(footprint))
            .sum()
    }

    /// Registers a product at the given placement and returns its key.
    /// The caller is responsible for the placement being feasible.
    pub fn place(&mut self, product: Arc<Product>, placement: Placement) -> PItemKey {
        let Placement {
            orientation,
            position,
            band,
            phase,
            structural,
        } = placement;
        let placed_item = PlacedItem::new(product, orientation, position, band, phase);

        debug_assert!(self.fits(&placed_item.bbox()), "{placed_item:?} does not fit");
        debug_assert!(self.admits_weight(placed_item.weight()));

        if structural {
            debug_assert!(self.shelf_available(band));
            self.installed_shelves[band] = true;
        }
        self.total_weight += placed_item.weight();
        let key = self.placed_items.insert(placed_item);
        self.order.push(key);
        key
    }

    /// Consumes the occupancy into the result of the run
    pub fn into_result(
        mut self,
        unplaced: Vec<Arc<Product>>,
        strategy: Strategy,
        strategy_index: usize,
        timed_out: bool,
    ) -> PackingResult {
        let container_volume = self.bounds.volume();
        let placed_items = self
            .order
            .iter()
            .filter_map(|k| self.placed_items.remove(*k))
            .collect::<Vec<_>>();
        let utilization = placed_items
            .iter()
            .map(|pi| pi.product.volume())
            .sum::<f32>()
            / container_volume;

        let result = PackingResult {
            placed_items,
            unplaced,
            total_weight: self.total_weight,
            utilization,
            strategy,
            strategy_index,
            timed_out,
        };
        debug_assert!(assertions::result_is_feasible(
            &result,
            &self.bounds,
            self.max_weight,
            self.tolerance
        ));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::geometry::primitives::Dims;
    use test_case::test_case;

    fn product(l: f32, w: f32, h: f32, weight: f32) -> Arc<Product> {
        Arc::new(Product::new("P", Shape::try_cuboid(l, w, h).unwrap(), weight).unwrap())
    }

    fn placement(x: f32, y: f32, z: f32, band: usize, phase: Phase, structural: bool) -> Placement {
        Placement {
            orientation: Orientation::Upright,
            position: Point3(x, y, z),
            band,
            phase,
            structural,
        }
    }

    #[test]
    fn bands_of_the_standard_container() {
        let occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        assert_eq!(occ.n_bands(), 8);
        assert_eq!(occ.band_level(8), 160.0);
        assert_eq!(occ.band_clearance(8), 10.0);
        assert_eq!(occ.band_clearance(0), 170.0);
    }

    #[test_case(20.0, 8; "standard interval")]
    #[test_case(0.5, 339; "fine interval")]
    #[test_case(170.0, 0; "interval equal to the height")]
    #[test_case(200.0, 0; "interval above the height")]
    fn band_count(interval: f32, expected: usize) {
        let occ = Occupancy::new(&Container::standard(), interval, 0.01);
        assert_eq!(occ.n_bands(), expected);
    }

    #[test]
    fn capacity_is_a_hard_limit() {
        let container = Container::new(100.0, 80.0, 170.0, 300.0).unwrap();
        let mut occ = Occupancy::new(&container, 20.0, 0.01);
        occ.place(product(20.0, 20.0, 20.0, 150.004), placement(0.0, 0.0, 0.0, 0, Phase::Floor, false));

        assert!(!occ.admits_weight(150.004));
        assert!(occ.admits_weight(149.9));
    }

    #[test]
    fn fits_and_collides() {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        occ.place(product(40.0, 30.0, 20.0, 10.0), placement(0.0, 0.0, 0.0, 0, Phase::Floor, false));

        let dims = Dims::new(40.0, 30.0, 20.0);
        assert!(occ.collides(&AABox::from_corner(Point3(20.0, 0.0, 0.0), dims)));
        assert!(occ.fits(&AABox::from_corner(Point3(40.0, 0.0, 0.0), dims)));
        assert!(occ.fits(&AABox::from_corner(Point3(0.0, 0.0, 20.0), dims)));
        assert!(!occ.fits(&AABox::from_corner(Point3(70.0, 0.0, 0.0), dims)));
        assert!(!occ.fits(&AABox::from_corner(Point3(0.0, 0.0, 155.0), dims)));
        assert_eq!(occ.total_weight(), 10.0);
        assert_eq!(occ.remaining_weight(), 290.0);
    }

    #[test]
    fn installed_shelves_cannot_be_cut_through() {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        assert!(occ.shelf_available(2));
        occ.place(product(40.0, 30.0, 20.0, 1.0), placement(0.0, 0.0, 40.0, 2, Phase::Shelf, true));
        assert!(occ.is_shelf_installed(2));

        // elsewhere on the floor, but reaching through the shelf at 40
        let tall = AABox::from_corner(Point3(50.0, 50.0, 0.0), Dims::new(10.0, 10.0, 45.0));
        assert!(occ.straddles_installed_shelf(&tall));
        assert!(!occ.fits(&tall));
        assert_eq!(occ.band_clearance(1), 20.0);
    }

    #[test]
    fn straddling_items_block_shelves() {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        occ.place(product(40.0, 30.0, 25.0, 1.0), placement(0.0, 0.0, 0.0, 0, Phase::Floor, false));
        assert!(!occ.shelf_available(1));
        assert!(occ.shelf_available(2));
    }

    #[test]
    fn support_from_flush_tops() {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        occ.place(product(40.0, 30.0, 20.0, 1.0), placement(0.0, 0.0, 0.0, 0, Phase::Floor, false));
        occ.place(product(40.0, 30.0, 10.0, 1.0), placement(40.0, 0.0, 0.0, 0, Phase::Floor, false));

        let footprint = Rect::try_new(20.0, 0.0, 60.0, 30.0).unwrap();
        assert_eq!(occ.resting_on(&footprint, 20.0).count(), 1);
        assert_eq!(occ.support_area(&footprint, 20.0, |_| true), 20.0 * 30.0);
        assert_eq!(occ.support_area(&footprint, 20.0, |_| false), 0.0);
        assert_eq!(occ.band_free_area(0), 8000.0 - 2.0 * 1200.0);
    }

    #[test]
    fn result_preserves_placement_order() {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        occ.place(product(40.0, 30.0, 20.0, 1.0), placement(40.0, 0.0, 0.0, 0, Phase::Floor, false));
        occ.place(product(40.0, 30.0, 20.0, 1.0), placement(0.0, 0.0, 0.0, 0, Phase::Floor, false));
        let result = occ.into_result(vec![], Strategy::InputOrder, 6, false);
        assert_eq!(result.placed_items[0].position, Point3(40.0, 0.0, 0.0));
        assert_eq!(result.placed_items[1].position, Point3(0.0, 0.0, 0.0));
        assert_eq!(result.total_weight, 2.0);
        assert!((result.utilization - 48_000.0 / 1_360_000.0).abs() < 1e-6);
    }
}
