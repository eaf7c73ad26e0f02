//! Static model data: the competing hydrate structures with their cage geometries, and
//! the triangular grid that samples the three-component composition simplex.

pub mod crystal;
pub mod grid;
