//! Computational units of a surface run.
//!
//! - [`langmuir_table`] evaluates the Langmuir constant of every (cage type, species)
//!   pair once per run.
//! - [`chemical_potential`] applies the van der Waals-Platteeuw solid-solution rule to one
//!   structure at one composition.
//! - [`sweep`] walks the composition simplex row by row.

pub mod chemical_potential;
pub mod langmuir_table;
pub mod sweep;
