use criterion::{Criterion, black_box, criterion_group, criterion_main};
use meltflow::{
    MaterialDb, float_range, flow_rate_from_shear, pressure_difference, viscosity_from_flow,
};

fn bench_registry(c: &mut Criterion) {
    let db = MaterialDb::new();
    let names = ["PP", "pp", "HDPE", "hdpe"];

    c.bench_function("material_lookup_mixed_case", |b| {
        b.iter(|| {
            for name in names {
                black_box(db.get(black_box(name)).unwrap());
            }
        });
    });
}

fn bench_float_range(c: &mut Criterion) {
    c.bench_function("float_range_pp_melt_flow_rate", |b| {
        b.iter(|| {
            let values: Vec<f64> = float_range(black_box(0.2), black_box(50.0), black_box(0.1))
                .unwrap()
                .collect();
            black_box(values);
        });
    });
}

fn bench_formulas(c: &mut Criterion) {
    let radii: Vec<f64> = (1..=200).map(|i| i as f64 * 1.0e-4).collect();

    c.bench_function("extrusion_chain_radius_sweep", |b| {
        b.iter(|| {
            for &r in &radii {
                let q = flow_rate_from_shear(black_box(89.0), r).unwrap();
                let area = std::f64::consts::PI * r * r;
                let flow = viscosity_from_flow(q, r, black_box(1962.0), area).unwrap();
                black_box(pressure_difference(q, black_box(0.5), r, flow.viscosity).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_registry, bench_float_range, bench_formulas);
criterion_main!(benches);
