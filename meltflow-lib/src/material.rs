use meltflow_data::{MaterialRecord, RangeSpec};
use serde::{Deserialize, Serialize};

use crate::error::{MeltFlowError, Result};
use crate::range::FloatRange;

/// Temperature and load of a melt flow rate test, e.g. "230°C/2.16kg".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeltFlowCondition {
    /// Melt temperature (°C)
    pub temperature: f64,
    /// Test load (kg)
    pub load: f64,
}

impl MeltFlowCondition {
    /// Parse a `temperature/load` label. Unit suffixes are optional.
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || MeltFlowError::InvalidTestCondition(label.to_string());

        let (temperature, load) = label.split_once('/').ok_or_else(invalid)?;
        let temperature = strip_unit(temperature, &["°C", "C"])
            .parse::<f64>()
            .map_err(|_| invalid())?;
        let load = strip_unit(load, &["kg"])
            .parse::<f64>()
            .map_err(|_| invalid())?;

        Ok(MeltFlowCondition { temperature, load })
    }
}

fn strip_unit<'a>(field: &'a str, units: &[&str]) -> &'a str {
    let field = field.trim();
    units
        .iter()
        .find_map(|unit| field.strip_suffix(*unit))
        .unwrap_or(field)
        .trim_end()
}

/// A polymer with its melt flow properties.
///
/// Immutable once built; both ranges are materialized at construction and
/// hold at least one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    test_condition: String,
    condition: MeltFlowCondition,
    melt_flow_rate: f64,
    melt_flow_rate_spec: RangeSpec,
    melt_flow_rate_range: Vec<f64>,
    density_spec: RangeSpec,
    density_range: Vec<f64>,
    reference_shear_rate: f64,
}

impl Material {
    /// Validate a record and expand its ranges.
    pub fn from_record(record: &MaterialRecord) -> Result<Self> {
        let condition = MeltFlowCondition::parse(&record.test_condition)?;
        let melt_flow_rate_range = expand(&record.melt_flow_rate_range)?;
        let density_range = expand(&record.density_range)?;

        Ok(Material {
            name: record.name.clone(),
            test_condition: record.test_condition.clone(),
            condition,
            melt_flow_rate: record.melt_flow_rate,
            melt_flow_rate_spec: record.melt_flow_rate_range,
            melt_flow_rate_range,
            density_spec: record.density_range,
            density_range,
            reference_shear_rate: record.reference_shear_rate,
        })
    }

    pub fn to_record(&self) -> MaterialRecord {
        MaterialRecord {
            name: self.name.clone(),
            test_condition: self.test_condition.clone(),
            melt_flow_rate: self.melt_flow_rate,
            melt_flow_rate_range: self.melt_flow_rate_spec,
            density_range: self.density_spec,
            reference_shear_rate: self.reference_shear_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The test condition label as declared.
    pub fn melt_flow_test_condition(&self) -> &str {
        &self.test_condition
    }

    pub fn condition(&self) -> MeltFlowCondition {
        self.condition
    }

    /// Melt temperature of the flow test (°C).
    pub fn melt_temperature(&self) -> f64 {
        self.condition.temperature
    }

    /// Load of the flow test (kg).
    pub fn load(&self) -> f64 {
        self.condition.load
    }

    /// Nominal melt flow rate (g/10min).
    pub fn melt_flow_rate(&self) -> f64 {
        self.melt_flow_rate
    }

    /// Acceptable melt flow rates (g/10min), strictly increasing.
    pub fn melt_flow_rate_range(&self) -> &[f64] {
        &self.melt_flow_rate_range
    }

    /// Acceptable densities (g/cm³), strictly increasing.
    pub fn density_range(&self) -> &[f64] {
        &self.density_range
    }

    /// Middle entry of the density range.
    pub fn nominal_density(&self) -> f64 {
        self.density_range[self.density_range.len() / 2]
    }

    /// Material-specific reference value.
    ///
    /// The source data for PP and HDPE does not settle whether this is a
    /// shear rate (s⁻¹) or a viscosity (Pa·s), and the PP figure is known to
    /// be unreliable. Callers choose the interpretation.
    pub fn reference_shear_rate(&self) -> f64 {
        self.reference_shear_rate
    }
}

fn expand(spec: &RangeSpec) -> Result<Vec<f64>> {
    let values: Vec<f64> = FloatRange::new(spec.start, spec.stop, spec.step)?.collect();
    // a material range must hold at least one value
    if values.is_empty() {
        return Err(MeltFlowError::InvalidRange {
            start: spec.start,
            stop: spec.stop,
            step: spec.step,
        });
    }
    Ok(values)
}
