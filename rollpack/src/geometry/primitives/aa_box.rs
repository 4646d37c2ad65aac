use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::{Dims, Point3, Rect};

///Axis-aligned box in 3D space
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct AABox {
    pub x_min: f32,
    pub y_min: f32,
    pub z_min: f32,
    pub x_max: f32,
    pub y_max: f32,
    pub z_max: f32,
}

impl AABox {
    pub fn try_new(min: Point3, max: Point3) -> Result<Self> {
        ensure!(
            min.0 < max.0 && min.1 < max.1 && min.2 < max.2,
            "invalid box, min: {min:?}, max: {max:?}"
        );
        Ok(AABox {
            x_min: min.0,
            y_min: min.1,
            z_min: min.2,
            x_max: max.0,
            y_max: max.1,
            z_max: max.2,
        })
    }

    /// Box with its minimum corner at `corner`, spanning `dims`
    pub fn from_corner(corner: Point3, dims: Dims) -> Self {
        debug_assert!(dims.length > 0.0 && dims.width > 0.0 && dims.height > 0.0);
        AABox {
            x_min: corner.0,
            y_min: corner.1,
            z_min: corner.2,
            x_max: corner.0 + dims.length,
            y_max: corner.1 + dims.width,
            z_max: corner.2 + dims.height,
        }
    }

    pub fn min_corner(&self) -> Point3 {
        Point3(self.x_min, self.y_min, self.z_min)
    }

    pub fn dims(&self) -> Dims {
        Dims::new(
            self.x_max - self.x_min,
            self.y_max - self.y_min,
            self.z_max - self.z_min,
        )
    }

    pub fn volume(&self) -> f32 {
        self.dims().volume()
    }

    /// Horizontal projection of the box
    pub fn footprint(&self) -> Rect {
        Rect {
            x_min: self.x_min,
            y_min: self.y_min,
            x_max: self.x_max,
            y_max: self.y_max,
        }
    }

    /// True if the interiors overlap by more than `tol` along all three axes.
    /// Boxes sharing a face (e.g. one resting on the other) do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &AABox, tol: f32) -> bool {
        f32::min(self.z_max, other.z_max) - f32::max(self.z_min, other.z_min) > tol
            && self.footprint().overlaps(&other.footprint(), tol)
    }

    /// True if `other` lies within `self`, allowing it to stick out by at most `tol`.
    pub fn contains(&self, other: &AABox, tol: f32) -> bool {
        other.z_min >= self.z_min - tol
            && other.z_max <= self.z_max + tol
            && self.footprint().contains(&other.footprint(), tol)
    }

    /// True if the horizontal plane at height `z` cuts through the interior of the box.
    pub fn straddles(&self, z: f32, tol: f32) -> bool {
        self.z_min + tol < z && z < self.z_max - tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, y: f32, z: f32, l: f32, w: f32, h: f32) -> AABox {
        AABox::from_corner(Point3(x, y, z), Dims::new(l, w, h))
    }

    #[test]
    fn stacked_boxes_do_not_overlap() {
        let lower = unit_box(0.0, 0.0, 0.0, 40.0, 30.0, 20.0);
        let upper = unit_box(10.0, 5.0, 20.0, 40.0, 30.0, 20.0);
        assert!(!lower.overlaps(&upper, 0.01));
        assert!(!upper.overlaps(&lower, 0.01));
    }

    #[test]
    fn interpenetrating_boxes_overlap() {
        let a = unit_box(0.0, 0.0, 0.0, 40.0, 30.0, 20.0);
        let b = unit_box(39.0, 29.0, 19.0, 10.0, 10.0, 10.0);
        assert!(a.overlaps(&b, 0.01));
    }

    #[test]
    fn containment_respects_tolerance() {
        let bounds = unit_box(0.0, 0.0, 0.0, 100.0, 80.0, 170.0);
        assert!(bounds.contains(&unit_box(60.0, 50.0, 150.0, 40.0, 30.0, 20.0), 0.01));
        assert!(bounds.contains(&unit_box(60.005, 0.0, 0.0, 40.0, 30.0, 20.0), 0.01));
        assert!(!bounds.contains(&unit_box(60.0, 50.0, 151.0, 40.0, 30.0, 20.0), 0.01));
    }

    #[test]
    fn straddling_a_level() {
        let b = unit_box(0.0, 0.0, 0.0, 10.0, 10.0, 25.0);
        assert!(b.straddles(20.0, 0.01));
        assert!(!b.straddles(25.0, 0.01));
        assert!(!b.straddles(0.0, 0.01));
    }

    #[test]
    fn invalid_corners_are_rejected() {
        assert!(AABox::try_new(Point3(0.0, 0.0, 0.0), Point3(1.0, 1.0, 0.0)).is_err());
        assert!(AABox::try_new(Point3(0.0, 0.0, 0.0), Point3(1.0, 2.0, 3.0)).is_ok());
    }
}
