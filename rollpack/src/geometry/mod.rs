mod orientation;
mod shape;

/// Axis-aligned primitives: points, dimensions, rectangles and boxes
pub mod primitives;

#[doc(inline)]
pub use orientation::Orientation;
#[doc(inline)]
pub use orientation::OrientationRange;
#[doc(inline)]
pub use shape::Shape;
