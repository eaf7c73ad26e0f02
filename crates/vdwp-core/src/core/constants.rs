/// Boltzmann constant in J/K (exact, SI 2019).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Avogadro constant in 1/mol (exact, SI 2019).
pub const AVOGADRO: f64 = 6.02214076e23;

/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = BOLTZMANN * AVOGADRO;

/// Pascals per bar.
pub const PASCALS_PER_BAR: f64 = 100_000.0;

/// Cubic metres per cubic ångström.
pub const CUBIC_ANGSTROM: f64 = 1e-30;

/// Joules per kilojoule.
pub const J_PER_KJ: f64 = 1000.0;
