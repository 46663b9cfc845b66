#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Half-open `[start, stop)` range stepped at `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl RangeSpec {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        RangeSpec { start, stop, step }
    }
}

/// Declarative description of a polymer, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    /// Melt flow test condition, e.g. "230°C/2.16kg".
    pub test_condition: String,
    /// Nominal melt flow rate (g/10min).
    pub melt_flow_rate: f64,
    pub melt_flow_rate_range: RangeSpec,
    /// Acceptable densities (g/cm³).
    pub density_range: RangeSpec,
    /// Reference value whose unit is not fixed (s^-1 or Pa·s).
    pub reference_shear_rate: f64,
}
