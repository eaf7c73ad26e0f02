//! # Engine Module
//!
//! Turns a validated [`config::SurfaceConfig`] and the static model data into an
//! [`surface::EnergySurface`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Species, conditions, resolution and compared structures
//! - **Context** (`context`) - Per-run species resolution and structure lookup
//! - **Cache** ([`cache`]) - Langmuir constants per (cage type, species slot)
//! - **Tasks** (`tasks`) - Langmuir precomputation, solid-solution evaluation, simplex sweep
//! - **Output** ([`surface`]) - Matrix and flat forms of the result
//! - **Progress Monitoring** ([`progress`]) - Optional progress callbacks
//! - **Error Handling** ([`error`]) - Engine error type
//!
//! The Langmuir precomputation and the sweep rows are independent of each other and run
//! on the rayon pool when the `parallel` feature is enabled; results are collected in
//! enumeration order either way.

pub mod cache;
pub mod config;
pub(crate) mod context;
pub mod error;
pub mod progress;
pub mod surface;
pub(crate) mod tasks;
