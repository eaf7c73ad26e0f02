//! # vdwp Core Library
//!
//! Thermodynamic stability surfaces for gas-hydrate crystal structures. Given three guest
//! gases, a total pressure and a temperature, the library evaluates the chemical-potential
//! difference between two candidate hydrate structures over the whole composition simplex
//! of the three gases.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Physical constants, the guest/host interaction table,
//!   the static crystal dataset, the Lennard-Jones-Devonshire cell potential and the
//!   Langmuir-constant quadrature. Everything here is stateless and pure.
//!
//! - **[`engine`]: The Logic Core.** Validated run configuration, the per-run Langmuir
//!   cache, the van der Waals-Platteeuw chemical-potential evaluation and the simplex
//!   sweep that produces the surface.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together. The
//!   [`workflows::surface::generate`] function is the single-call entry point.
//!
//! ```
//! use vdwp::workflows::surface;
//!
//! let surface = surface::generate("Methane", "Ethane", "CF4", 10.0, 273.15, 2).unwrap();
//! assert_eq!(surface.flat.z.len(), 6);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
