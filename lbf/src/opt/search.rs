use itertools::Itertools;
use ordered_float::OrderedFloat;

use rollpack::geometry::Orientation;
use rollpack::geometry::primitives::{AABox, Dims, Point3};
use rollpack::occupancy::Occupancy;
use rollpack::util::FPA;

/// Candidate (x, y) anchors for the minimum corner of a footprint of `dims`, sorted by x, then y.
///
/// Along each axis, candidates are the container walls and, for every placed item, its near side,
/// its far side and the position flush against its far side.
/// Only anchors which keep the footprint inside the container are returned.
pub fn candidate_anchors(occupancy: &Occupancy, dims: Dims) -> Vec<(f32, f32)> {
    let bounds = occupancy.bounds();
    let tol = occupancy.tolerance();
    let boxes = occupancy.placed_items().map(|pi| pi.bbox()).collect_vec();

    let xs = axis_candidates(
        bounds.x_max,
        dims.length,
        boxes.iter().map(|b| (b.x_min, b.x_max)),
        tol,
    );
    let ys = axis_candidates(
        bounds.y_max,
        dims.width,
        boxes.iter().map(|b| (b.y_min, b.y_max)),
        tol,
    );

    xs.into_iter().cartesian_product(ys).collect_vec()
}

fn axis_candidates(
    extent: f32,
    size: f32,
    spans: impl Iterator<Item = (f32, f32)>,
    tol: f32,
) -> Vec<f32> {
    [0.0, extent - size]
        .into_iter()
        .chain(spans.flat_map(|(min, max)| [min, max, max - size]))
        .filter(|&v| v >= -tol && v + size <= extent + tol)
        .map(|v| v.max(0.0))
        .sorted_by_key(|&v| OrderedFloat(v))
        .dedup_by(|a, b| FPA(*a) == FPA(*b))
        .collect_vec()
}

/// Searches a feasible position at height `z` for an item that can take any of the `variants`.
///
/// Per variant, the first anchor (in x, y order) where the box passes `accept` and fits is taken.
/// Of these, the leftmost-bottom-frontmost is returned, ties going to the variant listed first.
pub fn first_fit(
    occupancy: &Occupancy,
    variants: &[(Orientation, Dims)],
    z: f32,
    accept: impl Fn(&AABox) -> bool,
    n_evaluated: &mut usize,
) -> Option<(Orientation, AABox)> {
    let headroom = occupancy.bounds().z_max - z + occupancy.tolerance();

    variants
        .iter()
        .filter(|(_, dims)| dims.height <= headroom)
        .filter_map(|&(orientation, dims)| {
            candidate_anchors(occupancy, dims)
                .into_iter()
                .find_map(|(x, y)| {
                    *n_evaluated += 1;
                    let bbox = AABox::from_corner(Point3(x, y, z), dims);
                    (accept(&bbox) && occupancy.fits(&bbox)).then_some(bbox)
                })
                .map(|bbox| (orientation, bbox))
        })
        .min_by_key(|(_, bbox)| {
            (
                OrderedFloat(bbox.x_min),
                OrderedFloat(bbox.y_min),
                OrderedFloat(bbox.z_min),
            )
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rollpack::entities::{Container, Phase, Product};
    use rollpack::geometry::Shape;
    use rollpack::occupancy::Placement;

    use super::*;

    fn occupancy_with_one_box() -> Occupancy {
        let mut occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        let product = Product::new("A", Shape::try_cuboid(40.0, 30.0, 20.0).unwrap(), 10.0).unwrap();
        occ.place(
            Arc::new(product),
            Placement {
                orientation: Orientation::Upright,
                position: Point3(0.0, 0.0, 0.0),
                band: 0,
                phase: Phase::Floor,
                structural: false,
            },
        );
        occ
    }

    #[test]
    fn anchors_of_empty_container() {
        let occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        let anchors = candidate_anchors(&occ, Dims::new(40.0, 30.0, 20.0));
        assert_eq!(anchors, vec![(0.0, 0.0), (0.0, 50.0), (60.0, 0.0), (60.0, 50.0)]);
    }

    #[test]
    fn anchors_hug_placed_items() {
        let occ = occupancy_with_one_box();
        let anchors = candidate_anchors(&occ, Dims::new(40.0, 30.0, 20.0));
        let xs = anchors.iter().map(|a| a.0).dedup().collect_vec();
        let ys = anchors.iter().map(|a| a.1).sorted_by_key(|&y| OrderedFloat(y)).dedup().collect_vec();
        assert_eq!(xs, vec![0.0, 40.0, 60.0]);
        assert_eq!(ys, vec![0.0, 30.0, 50.0]);
    }

    #[test]
    fn oversized_footprint_has_no_anchors() {
        let occ = Occupancy::new(&Container::standard(), 20.0, 0.01);
        assert!(candidate_anchors(&occ, Dims::new(120.0, 30.0, 20.0)).is_empty());
    }

    #[test]
    fn first_fit_prefers_leftmost_then_earlier_variant() {
        let occ = occupancy_with_one_box();
        let variants = [
            (Orientation::Upright, Dims::new(40.0, 30.0, 20.0)),
            (Orientation::UprightTurned, Dims::new(30.0, 40.0, 20.0)),
        ];
        let mut n_evaluated = 0;
        let (orientation, bbox) = first_fit(&occ, &variants, 0.0, |_| true, &mut n_evaluated).unwrap();
        assert_eq!(orientation, Orientation::Upright);
        assert_eq!(bbox.min_corner(), Point3(0.0, 30.0, 0.0));
        assert!(n_evaluated > 0);
    }

    #[test]
    fn first_fit_respects_accept() {
        let occ = occupancy_with_one_box();
        let variants = [(Orientation::Upright, Dims::new(40.0, 30.0, 20.0))];
        let mut n_evaluated = 0;
        let found = first_fit(&occ, &variants, 0.0, |bbox| bbox.x_min > 50.0, &mut n_evaluated);
        assert_eq!(found.map(|(_, bbox)| bbox.min_corner()), Some(Point3(60.0, 0.0, 0.0)));
        assert!(first_fit(&occ, &variants, 0.0, |_| false, &mut n_evaluated).is_none());
    }
}
