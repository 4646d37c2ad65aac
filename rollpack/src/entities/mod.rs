mod container;
mod packing_result;
mod placed_item;
mod product;
mod strategy;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use packing_result::PackingResult;

#[doc(inline)]
pub use placed_item::Phase;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use product::Product;

#[doc(inline)]
pub use strategy::Strategy;
