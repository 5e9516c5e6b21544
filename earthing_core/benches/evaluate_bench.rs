use criterion::{black_box, criterion_group, criterion_main, Criterion};
use earthing_core::calculations::earthing::{analyze, evaluate, evaluate_request};
use earthing_core::{EarthingDesignInput, EarthingRequest, PipeElectrode, PlateElectrode};

fn pipe_input() -> EarthingDesignInput {
    EarthingDesignInput {
        earth_resistivity: 100.0,
        fault_current: 10_000.0,
        fault_clearing_time: 1.0,
        strip_width_mm: 50.0,
        strip_thickness_mm: 6.0,
        strip_length_m: 10.0,
        number_of_strips: 1,
        strip_material: "CU".to_string(),
        electrode: PipeElectrode {
            rod_radius_m: 0.0075,
            rod_length_m: 3.0,
            rod_diameter_mm: 15.0,
        }
        .into(),
        number_of_pits: 2,
    }
}

fn plate_input() -> EarthingDesignInput {
    EarthingDesignInput {
        electrode: PlateElectrode {
            plate_length_mm: 600.0,
            plate_width_mm: 600.0,
            plate_thickness_mm: 3.0,
        }
        .into(),
        ..pipe_input()
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let pipe = pipe_input();
    let plate = plate_input();

    c.bench_function("evaluate_pipe", |b| {
        b.iter(|| evaluate(black_box(&pipe)))
    });

    c.bench_function("evaluate_plate", |b| {
        b.iter(|| evaluate(black_box(&plate)))
    });

    c.bench_function("analyze_pipe", |b| {
        b.iter(|| analyze(black_box(&pipe)))
    });
}

fn bench_request(c: &mut Criterion) {
    let json = r#"{
        "earth_resistivity": 100.0,
        "fault_current": 10000.0,
        "fault_clearing_time": 1.0,
        "earthing_type": "pipe",
        "rod_diameter_mm": 15.0,
        "rod_radius_m": 0.0075,
        "rod_length_m": 3.0,
        "number_of_pits": 2,
        "strip_width_mm": 50.0,
        "strip_thickness_mm": 6.0,
        "number_of_strips": 1,
        "strip_length_m": 10.0,
        "strip_material": "CU"
    }"#;

    c.bench_function("parse_and_evaluate_request", |b| {
        b.iter(|| {
            EarthingRequest::from_json(black_box(json)).and_then(|req| evaluate_request(&req))
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_request);
criterion_main!(benches);
