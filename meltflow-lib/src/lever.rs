//! Hand-operated lever press driving the extrusion piston.

use serde::{Deserialize, Serialize};

use crate::constants::STANDARD_GRAVITY;
use crate::error::{MeltFlowError, Result};

/// A mass hung at the end of a lever arm, pushing a piston closer to the pivot.
///
/// The force is assumed to stay tangent to the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverPress {
    /// Mass applied at the end of the arm (kg)
    pub load_mass: f64,
    /// Pivot to load distance (m)
    pub arm_length: f64,
    /// Pivot to piston distance (m)
    pub arm_piston_distance: f64,
}

impl LeverPress {
    pub fn new(load_mass: f64, arm_length: f64, arm_piston_distance: f64) -> Self {
        LeverPress {
            load_mass,
            arm_length,
            arm_piston_distance,
        }
    }

    /// Weight of the load (N).
    pub fn applied_force(&self) -> f64 {
        self.load_mass * STANDARD_GRAVITY
    }

    /// Torque about the pivot (N·m).
    pub fn torque(&self) -> f64 {
        self.applied_force() * self.arm_length
    }

    /// Force delivered to the piston (N).
    pub fn piston_force(&self) -> Result<f64> {
        if self.arm_piston_distance.is_nan() || self.arm_piston_distance <= 0.0 {
            return Err(MeltFlowError::DomainError(format!(
                "arm to piston distance must be positive, got {}",
                self.arm_piston_distance
            )));
        }
        Ok(self.torque() / self.arm_piston_distance)
    }

    /// Pressure on a piston of face `area` (m²), in Pa.
    pub fn piston_pressure(&self, area: f64) -> Result<f64> {
        if area.is_nan() || area <= 0.0 {
            return Err(MeltFlowError::DomainError(format!(
                "piston area must be positive, got {area}"
            )));
        }
        Ok(self.piston_force()? / area)
    }
}
