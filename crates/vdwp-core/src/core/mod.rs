//! # Core Module
//!
//! Stateless building blocks of the hydrate stability model.
//!
//! - **Constants** ([`constants`]) - Boltzmann and Avogadro constants and the gas constant
//! - **Interactions** ([`forcefield`]) - Guest/host Lennard-Jones parameters, the LJD cell
//!   potential and the Langmuir-constant integrator
//! - **Static data** ([`models`]) - Crystal structures, cage geometries and the composition
//!   simplex grid
//!
//! Nothing in this module performs I/O. Alternative parameter tables are accepted as text
//! ([`forcefield::params::InteractionTable::parse`]) or as deserialized values
//! ([`models::crystal::CrystalDataset`]).

pub mod constants;
pub mod forcefield;
pub mod models;
