use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Dims;

/// Axis-aligned orientations of a product.
/// Each variant names the face that points down and whether the product is turned 90° about the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Bottom face down, as defined: `(l, w, h)`
    Upright,
    /// Bottom face down, turned: `(w, l, h)`
    UprightTurned,
    /// Lying on a side face: `(h, w, l)`
    OnSide,
    /// Lying on a side face, turned: `(w, h, l)`
    OnSideTurned,
    /// Lying on the front face: `(l, h, w)`
    OnFront,
    /// Lying on the front face, turned: `(h, l, w)`
    OnFrontTurned,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Upright,
        Orientation::UprightTurned,
        Orientation::OnSide,
        Orientation::OnSideTurned,
        Orientation::OnFront,
        Orientation::OnFrontTurned,
    ];

    /// Applies the orientation to the dimensions of a product in its defined pose.
    pub fn apply(&self, dims: Dims) -> Dims {
        let Dims {
            length: l,
            width: w,
            height: h,
        } = dims;
        match self {
            Orientation::Upright => Dims::new(l, w, h),
            Orientation::UprightTurned => Dims::new(w, l, h),
            Orientation::OnSide => Dims::new(h, w, l),
            Orientation::OnSideTurned => Dims::new(w, h, l),
            Orientation::OnFront => Dims::new(l, h, w),
            Orientation::OnFrontTurned => Dims::new(h, l, w),
        }
    }
}

/// Set of orientations in which a product may be placed
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum OrientationRange {
    /// Only the orientation as defined
    Fixed,
    /// Bottom face down, may be turned about the vertical axis
    #[default]
    Upright,
    /// All six axis-aligned orientations
    Any,
    /// An explicit list, tried in the given order
    Discrete(Vec<Orientation>),
}

impl OrientationRange {
    pub fn orientations(&self) -> &[Orientation] {
        match self {
            OrientationRange::Fixed => &Orientation::ALL[..1],
            OrientationRange::Upright => &Orientation::ALL[..2],
            OrientationRange::Any => &Orientation::ALL,
            OrientationRange::Discrete(list) => list,
        }
    }
}
