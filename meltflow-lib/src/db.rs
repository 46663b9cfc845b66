use std::collections::HashMap;
use std::sync::OnceLock;

use meltflow_data::MaterialRecord;

use crate::error::{MeltFlowError, Result};
use crate::material::Material;
use crate::materials_db::MATERIALS;

pub const PP: &str = "PP";
pub const HDPE: &str = "HDPE";

struct InitializedDb {
    materials: Vec<Material>,
    name_to_index: HashMap<String, usize>,
}

static DATABASE: OnceLock<InitializedDb> = OnceLock::new();

fn db() -> &'static InitializedDb {
    DATABASE.get_or_init(|| {
        let materials: Vec<Material> = MATERIALS
            .iter()
            .map(|&(name, condition, mfr, mfr_range, density_range, reference)| {
                let record = MaterialRecord {
                    name: name.to_string(),
                    test_condition: condition.to_string(),
                    melt_flow_rate: mfr,
                    melt_flow_rate_range: mfr_range,
                    density_range,
                    reference_shear_rate: reference,
                };
                Material::from_record(&record).expect("embedded material table is invalid")
            })
            .collect();

        let name_to_index = materials
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name().to_lowercase(), i))
            .collect();

        InitializedDb {
            materials,
            name_to_index,
        }
    })
}

/// Read-only registry of the built-in materials.
///
/// Cheap to create; the materials are built once on first use and live
/// for the rest of the process.
#[derive(Clone, Copy)]
pub struct MaterialDb {
    db: &'static InitializedDb,
}

impl MaterialDb {
    pub fn new() -> Self {
        MaterialDb { db: db() }
    }

    /// Look up a material by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&'static Material> {
        let db = self.db;
        db.name_to_index
            .get(&name.to_lowercase())
            .map(|&i| &db.materials[i])
            .ok_or_else(|| MeltFlowError::UnknownMaterial(name.to_string()))
    }

    /// Polypropylene.
    pub fn pp(&self) -> &'static Material {
        self.builtin(PP)
    }

    /// High-density polyethylene.
    pub fn hdpe(&self) -> &'static Material {
        self.builtin(HDPE)
    }

    fn builtin(&self, name: &str) -> &'static Material {
        self.get(name).expect("built-in material missing from the embedded table")
    }

    /// Material names in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.db.materials.iter().map(|m| m.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Material> {
        self.db.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.db.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.materials.is_empty()
    }
}

impl Default for MaterialDb {
    fn default() -> Self {
        Self::new()
    }
}
