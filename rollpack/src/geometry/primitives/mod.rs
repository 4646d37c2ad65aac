mod aa_box;
mod point;
mod rect;

#[doc(inline)]
pub use aa_box::AABox;
#[doc(inline)]
pub use point::Dims;
#[doc(inline)]
pub use point::Point3;
#[doc(inline)]
pub use rect::Rect;
