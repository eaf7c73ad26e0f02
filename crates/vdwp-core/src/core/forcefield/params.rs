use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Pure-component Lennard-Jones parameters of the guest species, one row per species:
/// `name  sigma[Å]  epsilon/k[K]`.
pub const DEFAULT_GAS_TABLE: &str = "
Methane  3.758 148.6
C2H2     4.221 185
Ethane   4.520 208.8
C2H4     4.232 205
c-propane 4.811 301.5
n-propane 5.061 254
n-butane 4.997 410
c-butane 4.950 320.0
i-butane 5.341 313
c-pentane 5.373 386.83
c-hexane 5.674 419.2
c-octane 6.249 489.9
Ne       2.749  35.6
Ar       3.405 119.8
Kr       3.60  171.0
Xe       4.047 231.0
Br2      4.93   540
CO2      4.486 189.0
CS2      4.551 417.87
THF      5.35 409.4
He       2.63 6.03
H2       2.87 29.2
NO       3.17 131
N2       3.698 95.05
O2       3.58 117.5
CO       3.763 100.2
N2O      4.59 189
H2S      3.834 282.5
neopentane 5.672 328.3
benzene    5.365 425.5
adamantane 6.598 500.9
methylbutanes 5.760 363.4
methylc-hexane 6.046 433.1
CF4      4.70 152.5
CCl4     5.881 327
";

/// TIP4P/Ice water, the host-lattice reference for every combination.
pub const TIP4P_ICE: LjPair = LjPair {
    sigma: 3.1668,
    eps_over_k: 106.1,
};

/// Fallback species for each of the three composition slots.
pub const DEFAULT_SPECIES: [&str; 3] = ["Methane", "Ethane", "CF4"];

/// A Lennard-Jones size/energy pair: `sigma` in Å, `eps_over_k` in K.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LjPair {
    pub sigma: f64,
    pub eps_over_k: f64,
}

impl LjPair {
    /// Lorentz-Berthelot: arithmetic mean of sizes, geometric mean of well depths.
    pub fn combine(&self, other: &LjPair) -> LjPair {
        LjPair {
            sigma: (self.sigma + other.sigma) / 2.0,
            eps_over_k: (self.eps_over_k * other.eps_over_k).sqrt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GasSpeciesParameters {
    pub name: String,
    pub lj: LjPair,
}

/// Guest/host parameters of one species after combination with the host lattice.
pub type EffectiveInteraction = LjPair;

/// Effective guest/host interactions keyed by species name.
///
/// Built once from a raw table and never mutated afterwards; callers thread a shared
/// reference through every computation.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionTable {
    host: LjPair,
    entries: BTreeMap<String, EffectiveInteraction>,
}

impl Default for InteractionTable {
    fn default() -> Self {
        Self::parse(DEFAULT_GAS_TABLE)
    }
}

impl InteractionTable {
    /// Parses a raw species table and combines every valid row with [`TIP4P_ICE`].
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_host(raw, TIP4P_ICE)
    }

    /// Rows that cannot be read are skipped: blank lines, lines with fewer than three
    /// fields, non-numeric values, and values that are not finite and strictly positive.
    /// Text following `#` is a comment. A repeated name replaces the earlier row.
    pub fn parse_with_host(raw: &str, host: LjPair) -> Self {
        let entries = raw
            .lines()
            .filter_map(parse_row)
            .map(|species| (species.name, species.lj.combine(&host)))
            .collect::<BTreeMap<_, _>>();

        debug!(
            species = entries.len(),
            host_sigma = host.sigma,
            host_eps_over_k = host.eps_over_k,
            "Built guest/host interaction table."
        );
        Self { host, entries }
    }

    pub fn host(&self) -> LjPair {
        self.host
    }

    pub fn get(&self, species: &str) -> Option<&EffectiveInteraction> {
        self.entries.get(species)
    }

    pub fn contains(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    /// Looks up `species`, substituting `fallback` when the name is unknown.
    ///
    /// Returns the name that was actually used together with its parameters, or `None`
    /// when neither name is in the table.
    pub fn resolve<'a>(
        &'a self,
        species: &str,
        fallback: &str,
    ) -> Option<(&'a str, EffectiveInteraction)> {
        if let Some((name, lj)) = self.entries.get_key_value(species) {
            return Some((name.as_str(), *lj));
        }
        warn!(
            requested = species,
            fallback, "Unknown guest species, substituting the default."
        );
        self.entries
            .get_key_value(fallback)
            .map(|(name, lj)| (name.as_str(), *lj))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EffectiveInteraction)> {
        self.entries.iter().map(|(name, lj)| (name.as_str(), lj))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_row(line: &str) -> Option<GasSpeciesParameters> {
    let content = line.split('#').next().unwrap_or_default().trim();
    let mut fields = content.split_whitespace();
    let name = fields.next()?;
    let sigma: f64 = fields.next()?.parse().ok()?;
    let eps_over_k: f64 = fields.next()?.parse().ok()?;

    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(sigma) || !valid(eps_over_k) {
        return None;
    }

    Some(GasSpeciesParameters {
        name: name.to_string(),
        lj: LjPair { sigma, eps_over_k },
    })
}
