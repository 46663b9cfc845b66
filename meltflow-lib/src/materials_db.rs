use meltflow_data::RangeSpec;

/// Embedded material table.
///
/// Each entry: (name, test_condition, melt_flow_rate, melt_flow_rate_range,
/// density_range, reference_shear_rate)
pub(crate) const MATERIALS: &[(&str, &str, f64, RangeSpec, RangeSpec, f64)] = &[
    // Polypropylene; the reference value is not trusted
    (
        "PP",
        "230°C/2.16kg",
        24.5,
        RangeSpec::new(0.2, 50.0, 0.1),
        RangeSpec::new(0.910, 0.928, 0.001),
        89.0,
    ),
    // High-density polyethylene
    (
        "HDPE",
        "190°C/2.16kg",
        8.0,
        RangeSpec::new(0.2, 25.0, 0.1),
        RangeSpec::new(0.950, 0.960, 0.001),
        89.0,
    ),
];
