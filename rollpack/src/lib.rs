//! The base `rollpack` crate: everything needed to describe a roll-container packing problem
//! and to track the occupancy of a container while it is being filled.

/// Entities to model roll-container packing: products, containers and the resulting placements
pub mod entities;

/// Axis-aligned geometric primitives and product shapes
pub mod geometry;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Working state of a single placement run: which space, shelves and weight are taken
pub mod occupancy;

/// Helper functions which do not belong to any specific module
pub mod util;
