use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle in the horizontal plane, used to represent footprints
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Extent along the x-axis
    pub fn length(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Extent along the y-axis
    pub fn width(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.length() * self.width()
    }

    /// Returns the rectangle shared by `self` and `other`, if their interiors intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x_min = f32::max(self.x_min, other.x_min);
        let y_min = f32::max(self.y_min, other.y_min);
        let x_max = f32::min(self.x_max, other.x_max);
        let y_max = f32::min(self.y_max, other.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    pub fn intersection_area(&self, other: &Rect) -> f32 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// True if the interiors overlap by more than `tol` along both axes.
    /// Rectangles that only touch along an edge do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect, tol: f32) -> bool {
        f32::min(self.x_max, other.x_max) - f32::max(self.x_min, other.x_min) > tol
            && f32::min(self.y_max, other.y_max) - f32::max(self.y_min, other.y_min) > tol
    }

    /// True if `other` lies within `self`, allowing it to stick out by at most `tol`.
    pub fn contains(&self, other: &Rect, tol: f32) -> bool {
        other.x_min >= self.x_min - tol
            && other.y_min >= self.y_min - tol
            && other.x_max <= self.x_max + tol
            && other.y_max <= self.y_max + tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_rectangles() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 5.0).is_err());
        assert!(Rect::try_new(0.0, 3.0, 5.0, 1.0).is_err());
    }

    #[test]
    fn intersection_of_overlapping_rectangles() {
        let a = Rect::try_new(0.0, 0.0, 40.0, 30.0).unwrap();
        let b = Rect::try_new(20.0, 10.0, 60.0, 50.0).unwrap();
        assert_eq!(a.intersection_area(&b), 20.0 * 20.0);
        assert!(a.overlaps(&b, 0.01));
    }

    #[test]
    fn touching_rectangles_do_not_overlap() {
        let a = Rect::try_new(0.0, 0.0, 40.0, 30.0).unwrap();
        let b = Rect::try_new(40.0, 0.0, 80.0, 30.0).unwrap();
        assert_eq!(a.intersection(&b), None);
        assert!(!a.overlaps(&b, 0.01));
        assert!(!a.overlaps(&Rect::try_new(39.995, 0.0, 80.0, 30.0).unwrap(), 0.01));
    }
}
