pub mod distance;
pub mod lattice;
pub mod partial_order;
pub mod set;
