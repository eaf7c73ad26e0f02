//! # Workflows Module
//!
//! High-level entry points that run a complete calculation: resolve the inputs, build the
//! per-run Langmuir table, sweep the simplex and assemble the result.
//!
//! - **Surface Workflow** ([`surface`]) - The ternary chemical-potential difference surface,
//!   plus the Langmuir constant table it is built on.

pub mod surface;
