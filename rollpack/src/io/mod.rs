/// External (serializable) representations of all entities
pub mod ext_repr;

/// Converting results to their external representation
pub mod export;

/// Converting external representations into validated entities
pub mod import;
