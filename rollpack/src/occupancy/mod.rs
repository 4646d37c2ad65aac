mod tracker;

#[doc(inline)]
pub use tracker::Occupancy;

#[doc(inline)]
pub use tracker::PItemKey;

#[doc(inline)]
pub use tracker::Placement;
