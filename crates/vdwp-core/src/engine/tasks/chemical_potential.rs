use crate::core::constants::{GAS_CONSTANT, J_PER_KJ};
use crate::core::models::crystal::CrystalStructure;
use crate::engine::cache::LangmuirCache;
use crate::engine::error::EngineError;

/// Chemical potential of water in `structure` (J/mol) at one gas composition.
///
/// For each cage type the occupancy sum `σ = Σ C·P·x` runs over species with a strictly
/// positive mole fraction `x`; the structure is then stabilised by
/// `-R·T·Σ (ν_cage / N_w)·ln(1 + σ)` relative to its empty-lattice reference `μ_e`.
pub fn structure_chemical_potential(
    structure: &CrystalStructure,
    cache: &LangmuirCache,
    fractions: &[f64; 3],
    pressure_pa: f64,
    temperature: f64,
) -> Result<f64, EngineError> {
    let mut sum_term = 0.0;
    for (cage_type, &count) in &structure.cages {
        let constants = cache
            .row(cage_type)
            .ok_or_else(|| EngineError::MissingLangmuirConstant {
                cage: cage_type.clone(),
            })?;

        let sigma_cp: f64 = constants
            .iter()
            .zip(fractions)
            .filter(|&(_, &fraction)| fraction > 0.0)
            .map(|(&c, &fraction)| c * (pressure_pa * fraction))
            .sum();

        sum_term += (count / structure.water_molecules) * (1.0 + sigma_cp).ln();
    }

    let occupancy_correction = -GAS_CONSTANT * temperature * sum_term;
    Ok(structure.mu_e * J_PER_KJ + occupancy_correction)
}

/// `μ_A - μ_B` in kJ/mol.
pub fn chemical_potential_difference(
    structure_a: &CrystalStructure,
    structure_b: &CrystalStructure,
    cache: &LangmuirCache,
    fractions: &[f64; 3],
    pressure_pa: f64,
    temperature: f64,
) -> Result<f64, EngineError> {
    let mu_a =
        structure_chemical_potential(structure_a, cache, fractions, pressure_pa, temperature)?;
    let mu_b =
        structure_chemical_potential(structure_b, cache, fractions, pressure_pa, temperature)?;
    Ok((mu_a - mu_b) / J_PER_KJ)
}
