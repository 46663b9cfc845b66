//! Wall shear rate and volumetric flow rate for Newtonian flow in a round pipe.
//!
//! γ̇ = 4Q / (π r³), and its inverse Q = γ̇ π r³ / 4.

use std::f64::consts::PI;

use crate::error::{Result, check_radius};

/// Volumetric flow rate (m³/s) from wall shear rate (s⁻¹) and pipe radius (m).
pub fn flow_rate_from_shear(shear_rate: f64, radius: f64) -> Result<f64> {
    check_radius(radius)?;
    Ok(shear_rate * PI * radius.powi(3) / 4.0)
}

/// Wall shear rate (s⁻¹) from volumetric flow rate (m³/s) and pipe radius (m).
pub fn shear_rate_from_flow(flow_rate: f64, radius: f64) -> Result<f64> {
    check_radius(radius)?;
    Ok(4.0 * flow_rate / (PI * radius.powi(3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeltFlowError;

    #[test]
    fn test_unit_radius() {
        let q = flow_rate_from_shear(4.0, 1.0).unwrap();
        assert!((q - PI).abs() < 1e-12);
        let rate = shear_rate_from_flow(PI, 1.0).unwrap();
        assert!((rate - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_radius() {
        assert!(matches!(
            flow_rate_from_shear(89.0, -0.01),
            Err(MeltFlowError::DomainError(_))
        ));
        assert!(matches!(
            shear_rate_from_flow(1.0e-4, f64::NAN),
            Err(MeltFlowError::DomainError(_))
        ));
    }
}
