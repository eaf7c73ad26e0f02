use super::potentials::cell_potential;
use crate::core::constants::{BOLTZMANN, CUBIC_ANGSTROM};
use std::f64::consts::PI;

/// Number of evenly spaced samples spanning `[0, R]`, both ends included.
pub const LANGMUIR_POINTS: usize = 100;

/// Samples with `β·U` above this value contribute nothing measurable and are skipped.
pub const BOLTZMANN_EXPONENT_CUTOFF: f64 = 100.0;

/// Langmuir constant (Pa⁻¹) of one guest in one cage type.
///
/// `C = 4π β ∫₀ᴿ exp(-β U(r)) r² dr`, evaluated as a rectangle sum over
/// [`LANGMUIR_POINTS`] samples. The `r = 0` sample is left out; its `r²` weight is zero.
/// Lengths are in Å and `eps_over_k` in K.
pub fn langmuir_constant(
    temperature: f64,
    cage_radius: f64,
    coordination: u32,
    sigma: f64,
    eps_over_k: f64,
) -> f64 {
    let beta = 1.0 / (BOLTZMANN * temperature);
    let epsilon = eps_over_k * BOLTZMANN;
    let z = f64::from(coordination);
    let step = cage_radius / (LANGMUIR_POINTS - 1) as f64;

    let integral_sum: f64 = (1..LANGMUIR_POINTS)
        .filter_map(|i| {
            let r = i as f64 * step;
            let exponent = cell_potential(r, sigma, epsilon, z, cage_radius) * beta;
            if exponent.is_nan() || exponent > BOLTZMANN_EXPONENT_CUTOFF {
                return None;
            }
            Some((-exponent).exp() * r * r)
        })
        .sum();

    4.0 * PI * integral_sum * step * CUBIC_ANGSTROM * beta
}
