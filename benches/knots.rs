//! Benchmarks for knot vector operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use knotwork::{
    clamp_knot_vector, curve_insert_knot, curve_refine_knots, find_span,
    make_clamped_uniform_knot_vector, make_uniform_knot_vector, surface_insert_knot_u,
    surface_insert_knot_v, Point3,
};

fn control_polygon(n: usize) -> Vec<Point3<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point3::new(t, (t * 12.0).sin(), (t * 7.0).cos())
        })
        .collect()
}

fn control_grid(rows: usize, cols: usize) -> Vec<Vec<Point3<f64>>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| Point3::new(c as f64, r as f64, ((r * c) % 5) as f64))
                .collect()
        })
        .collect()
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_generation");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("uniform", count), &count, |b, &count| {
            b.iter(|| make_uniform_knot_vector::<f64>(black_box(3), black_box(count)))
        });
        group.bench_with_input(BenchmarkId::new("clamped", count), &count, |b, &count| {
            b.iter(|| make_clamped_uniform_knot_vector::<f64>(black_box(3), black_box(count)))
        });
    }

    group.finish();
}

fn bench_clamp_and_span(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_queries");

    let knots: Vec<f64> = make_uniform_knot_vector(3, 1000).unwrap();

    group.bench_function("clamp", |b| {
        b.iter(|| {
            let mut k = knots.clone();
            clamp_knot_vector(3, black_box(&mut k)).unwrap();
            k
        })
    });

    group.bench_function("find_span", |b| {
        b.iter(|| find_span(black_box(0.4321), 3, &knots).unwrap())
    });

    group.finish();
}

fn bench_curve_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_insert_knot");

    for count in [8, 64, 512] {
        let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, count).unwrap();
        let points = control_polygon(count);

        group.bench_with_input(BenchmarkId::new("single", count), &count, |b, _| {
            b.iter(|| {
                let mut k = knots.clone();
                let mut p = points.clone();
                curve_insert_knot(black_box(0.37), 3, &mut k, &mut p).unwrap();
                (k, p)
            })
        });
    }

    let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 16).unwrap();
    let points = control_polygon(16);
    let refinement: Vec<f64> = (1..100).map(|i| i as f64 / 100.0).collect();

    group.bench_function("refine_99", |b| {
        b.iter(|| {
            let mut k = knots.clone();
            let mut p = points.clone();
            curve_refine_knots(black_box(&refinement), 3, &mut k, &mut p).unwrap();
            (k, p)
        })
    });

    group.finish();
}

fn bench_surface_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_insert_knot");

    let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 32).unwrap();
    let grid = control_grid(32, 32);

    group.bench_function("u_32x32", |b| {
        b.iter(|| {
            let mut k = knots.clone();
            let mut g = grid.clone();
            surface_insert_knot_u(black_box(0.61), 3, &mut k, &mut g).unwrap();
            (k, g)
        })
    });

    group.bench_function("v_32x32", |b| {
        b.iter(|| {
            let mut k = knots.clone();
            let mut g = grid.clone();
            surface_insert_knot_v(black_box(0.61), 3, &mut k, &mut g).unwrap();
            (k, g)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generation,
    bench_clamp_and_span,
    bench_curve_insertion,
    bench_surface_insertion
);
criterion_main!(benches);
