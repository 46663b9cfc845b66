//! Hagen–Poiseuille pressure drop for laminar flow in a cylindrical pipe.

use std::f64::consts::PI;

use crate::error::{Result, check_radius};

/// Pressure difference ΔP = 8µLQ / (π r⁴) in Pa.
///
/// # Arguments
/// * `flow_rate` - Volumetric flow rate (m³/s)
/// * `length` - Pipe length (m)
/// * `radius` - Pipe radius (m)
/// * `viscosity` - Dynamic viscosity (Pa·s)
pub fn pressure_difference(
    flow_rate: f64,
    length: f64,
    radius: f64,
    viscosity: f64,
) -> Result<f64> {
    check_radius(radius)?;
    Ok(8.0 * viscosity * length * flow_rate / (PI * radius.powi(4)))
}
