//! Volumetric flow rate from velocity or from a melt flow rate measurement.

use std::f64::consts::PI;

use crate::constants::MFR_INTERVAL_SECONDS;
use crate::error::{MeltFlowError, Result};

/// Cross-sectional area (m²) of a pipe of the given radius (m).
pub fn cross_sectional_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Volumetric flow rate `Q = v·A` (m³/s) for a mean velocity `velocity` (m/s).
///
/// A non-zero `area` (m²) takes precedence over `radius` (m) when both are
/// given; otherwise the area is derived as `π·radius²`.
pub fn flow_rate(velocity: f64, radius: Option<f64>, area: Option<f64>) -> Result<f64> {
    match (area, radius) {
        (Some(a), _) if a != 0.0 => Ok(velocity * a),
        (_, Some(r)) => Ok(velocity * cross_sectional_area(r)),
        _ => Err(MeltFlowError::MissingParameter(
            "either a non-zero area or a radius is required".to_string(),
        )),
    }
}

/// Volumetric flow rate from a melt flow rate (g/10min) and a density.
///
/// The melt flow rate is spread over its 10 minute measurement interval
/// ([`MFR_INTERVAL_SECONDS`]) and scaled by density, with no further
/// unit conversion.
pub fn volumetric_flow_rate(melt_flow_rate: f64, density: f64) -> f64 {
    (melt_flow_rate / MFR_INTERVAL_SECONDS) * density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_wins_over_radius() {
        let q = flow_rate(2.0, Some(10.0), Some(0.5)).unwrap();
        assert_eq!(q, 1.0);
    }

    #[test]
    fn test_zero_area_falls_back_to_radius() {
        let q = flow_rate(1.0, Some(1.0), Some(0.0)).unwrap();
        assert!((q - PI).abs() < 1e-12);
    }

    #[test]
    fn test_missing_geometry() {
        assert!(matches!(
            flow_rate(0.3, None, None),
            Err(MeltFlowError::MissingParameter(_))
        ));
        assert!(matches!(
            flow_rate(0.3, None, Some(0.0)),
            Err(MeltFlowError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_volumetric_flow_rate() {
        assert_eq!(volumetric_flow_rate(600.0, 0.9), 0.9);
        assert_eq!(volumetric_flow_rate(0.0, 0.9), 0.0);
    }
}
