//! # Force Field Module
//!
//! Guest/host interaction parameters and the single-guest statistical mechanics built on
//! top of them.
//!
//! ## Overview
//!
//! A guest molecule trapped in a hydrate cage is modelled with the Lennard-Jones-Devonshire
//! (LJD) smeared-cell approximation: the water molecules of the cage wall are spread
//! uniformly over a sphere of radius `R`, and the guest feels the spherically averaged
//! Lennard-Jones field of `z` such sites. Integrating the Boltzmann factor of that field
//! over the cage volume gives the Langmuir constant of the guest in that cage type.
//!
//! ## Key Components
//!
//! - [`params`] - Pure-guest LJ parameters and Lorentz-Berthelot combination with the host
//! - [`potentials`] - The LJD cell potential
//! - [`langmuir`] - Fixed-resolution quadrature of the Langmuir constant

pub mod langmuir;
pub mod params;
pub mod potentials;
