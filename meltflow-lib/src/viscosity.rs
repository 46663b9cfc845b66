//! Newtonian viscosity, µ = τ / γ̇ with τ = F / A.

use serde::{Deserialize, Serialize};

use crate::error::{MeltFlowError, Result};
use crate::shear::shear_rate_from_flow;

/// Intermediate and final values of [`viscosity_from_flow`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowViscosity {
    /// Wall shear rate (s⁻¹)
    pub shear_rate: f64,
    /// Shear stress (Pa)
    pub shear_stress: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity: f64,
}

/// Dynamic viscosity (Pa·s) from force (N), area (m²) and shear rate (s⁻¹).
pub fn viscosity(force: f64, area: f64, shear_rate: f64) -> Result<f64> {
    let denominator = area * shear_rate;
    if denominator == 0.0 {
        return Err(MeltFlowError::DomainError(format!(
            "area * shear rate must be non-zero (area={area}, shear_rate={shear_rate})"
        )));
    }
    Ok(force / denominator)
}

/// Dynamic viscosity of a melt pushed through a pipe at a known flow rate.
///
/// The shear rate is derived from `volumetric_flow_rate` (m³/s) and `radius` (m),
/// the shear stress from `force` (N) over `area` (m²).
pub fn viscosity_from_flow(
    volumetric_flow_rate: f64,
    radius: f64,
    force: f64,
    area: f64,
) -> Result<FlowViscosity> {
    let shear_rate = shear_rate_from_flow(volumetric_flow_rate, radius)?;
    if area == 0.0 {
        return Err(MeltFlowError::DomainError("area must be non-zero".to_string()));
    }
    if shear_rate == 0.0 {
        return Err(MeltFlowError::DomainError(
            "shear rate derived from a zero flow rate".to_string(),
        ));
    }
    let shear_stress = force / area;

    Ok(FlowViscosity {
        shear_rate,
        shear_stress,
        viscosity: shear_stress / shear_rate,
    })
}
