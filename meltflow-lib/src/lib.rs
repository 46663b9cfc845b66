pub mod constants;
pub mod db;
pub mod error;
pub mod flow;
pub mod lever;
pub mod material;
pub(crate) mod materials_db;
pub mod pressure;
pub mod range;
pub mod shear;
pub mod viscosity;

pub use db::{HDPE, MaterialDb, PP};
pub use error::{MeltFlowError, Result};
pub use flow::{cross_sectional_area, flow_rate, volumetric_flow_rate};
pub use lever::LeverPress;
pub use material::{Material, MeltFlowCondition};
pub use pressure::pressure_difference;
pub use range::{FloatRange, float_range, round_to};
pub use shear::{flow_rate_from_shear, shear_rate_from_flow};
pub use viscosity::{FlowViscosity, viscosity, viscosity_from_flow};
pub use meltflow_data;
