/// Length of a melt flow rate measurement interval (s); MFR is quoted per 10 min.
pub const MFR_INTERVAL_SECONDS: f64 = 600.0;

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Pascals per kilopascal
pub const PA_PER_KPA: f64 = 1.0e3;

/// Pascals per megapascal
pub const PA_PER_MPA: f64 = 1.0e6;

/// Centipoise per pascal-second
pub const CENTIPOISE_PER_PA_S: f64 = 1.0e3;

/// Cubic centimetres per cubic metre
pub const CM3_PER_M3: f64 = 1.0e6;

/// Decimal places kept by the range generator.
pub const RANGE_DECIMALS: i32 = 5;
