use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Geometry of one cage type: mean cavity radius in Å and the number of water molecules
/// forming the cage wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CageGeometry {
    pub radius: f64,
    pub coordination: u32,
}

/// One candidate hydrate lattice.
///
/// `mu_e` is the reference chemical potential of the empty lattice in kJ/mol,
/// `water_molecules` the number of waters per formula unit and `cages` the number of
/// cages of each type per formula unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CrystalStructure {
    pub mu_e: f64,
    pub water_molecules: f64,
    pub cages: BTreeMap<String, f64>,
}

impl CrystalStructure {
    /// Cages of `cage_type` per formula unit; zero when the structure lacks that cage.
    pub fn multiplicity(&self, cage_type: &str) -> f64 {
        self.cages.get(cage_type).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("Unknown crystal structure '{0}'")]
    UnknownStructure(String),

    #[error("Structure '{structure}' uses cage type '{cage}' which has no geometry")]
    MissingCageGeometry { structure: String, cage: String },

    #[error("Invalid {field} for '{item}': {value} (must be finite and positive)")]
    InvalidValue {
        item: String,
        field: &'static str,
        value: f64,
    },
}

struct StructureRecord {
    mu_e: f64,
    water_molecules: f64,
    cages: &'static [(&'static str, f64)],
}

static DEFAULT_CAGES: Map<&'static str, CageGeometry> = phf_map! {
    "12" => CageGeometry { radius: 3.988, coordination: 20 },
    "14" => CageGeometry { radius: 4.331, coordination: 24 },
    "16" => CageGeometry { radius: 4.587, coordination: 28 },
};

static DEFAULT_STRUCTURES: Map<&'static str, StructureRecord> = phf_map! {
    "CS1" => StructureRecord {
        mu_e: -59.841454832900,
        water_molecules: 46.0,
        cages: &[("12", 2.0), ("14", 6.0)],
    },
    "CS2" => StructureRecord {
        mu_e: -59.922551474335,
        water_molecules: 136.0,
        cages: &[("12", 16.0), ("16", 8.0)],
    },
};

/// Cubic structure I: two 5¹² and six 5¹²6² cages per 46 waters.
pub const CS1: &str = "CS1";
/// Cubic structure II: sixteen 5¹² and eight 5¹²6⁴ cages per 136 waters.
pub const CS2: &str = "CS2";

/// The set of structures a surface can compare, with the geometries of their cages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CrystalDataset {
    pub structures: BTreeMap<String, CrystalStructure>,
    pub cages: BTreeMap<String, CageGeometry>,
}

impl Default for CrystalDataset {
    fn default() -> Self {
        let structures = DEFAULT_STRUCTURES
            .entries()
            .map(|(tag, record)| {
                let structure = CrystalStructure {
                    mu_e: record.mu_e,
                    water_molecules: record.water_molecules,
                    cages: record
                        .cages
                        .iter()
                        .map(|(cage, count)| (cage.to_string(), *count))
                        .collect(),
                };
                (tag.to_string(), structure)
            })
            .collect();
        let cages = DEFAULT_CAGES
            .entries()
            .map(|(tag, geometry)| (tag.to_string(), *geometry))
            .collect();
        Self { structures, cages }
    }
}

impl CrystalDataset {
    pub fn structure(&self, tag: &str) -> Result<&CrystalStructure, DatasetError> {
        self.structures
            .get(tag)
            .ok_or_else(|| DatasetError::UnknownStructure(tag.to_string()))
    }

    pub fn cage(&self, cage_type: &str) -> Option<&CageGeometry> {
        self.cages.get(cage_type)
    }

    /// Sorted union of the cage types used by the given structures.
    pub fn cage_types_of(&self, tags: &[&str]) -> Result<Vec<String>, DatasetError> {
        let mut cage_types = BTreeSet::new();
        for &tag in tags {
            let structure = self.structure(tag)?;
            cage_types.extend(structure.cages.keys().cloned());
        }
        Ok(cage_types.into_iter().collect())
    }

    /// Checks that every value is finite and positive and that every cage a structure
    /// refers to has a geometry.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let positive = |item: &str, field: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(DatasetError::InvalidValue {
                    item: item.to_string(),
                    field,
                    value,
                })
            }
        };

        for (tag, geometry) in &self.cages {
            positive(tag, "radius", geometry.radius)?;
            positive(tag, "coordination", f64::from(geometry.coordination))?;
        }

        for (tag, structure) in &self.structures {
            if !structure.mu_e.is_finite() {
                return Err(DatasetError::InvalidValue {
                    item: tag.clone(),
                    field: "mu-e",
                    value: structure.mu_e,
                });
            }
            positive(tag, "water-molecules", structure.water_molecules)?;
            for (cage, &count) in &structure.cages {
                if !self.cages.contains_key(cage) {
                    return Err(DatasetError::MissingCageGeometry {
                        structure: tag.clone(),
                        cage: cage.clone(),
                    });
                }
                positive(tag, "cage multiplicity", count)?;
            }
        }
        Ok(())
    }
}
