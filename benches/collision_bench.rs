use collide2d::{AxisAlignedRect, CollisionManager, Fill, Polygon, Vec2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Regular k-gon of the given circumradius centered at `center`.
fn regular_polygon(center: Vec2, sides: usize, radius: f64) -> Polygon {
    let vertices = (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (sides as f64);
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices, center, Fill::default()).expect("regular polygon is convex")
}

// SAT cost grows with the number of axes, so bench a spread of vertex counts
// for both the overlapping and the separated (early-exit) case.
fn bench_polygon_checks(c: &mut Criterion) {
    let manager = CollisionManager::new();

    let mut group = c.benchmark_group("sat_overlapping");
    for sides in [4usize, 8, 16, 64].iter() {
        let a = regular_polygon(Vec2::new(0.0, 0.0), *sides, 1.0);
        let b = regular_polygon(Vec2::new(1.0, 0.0), *sides, 1.0);
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(sides),
            sides,
            |bencher, _| {
                bencher.iter(|| manager.check_polygons(black_box(&a), black_box(&b)));
            },
        );
    }
    group.finish();

    let mut group = c.benchmark_group("sat_separated");
    for sides in [4usize, 8, 16, 64].iter() {
        let a = regular_polygon(Vec2::new(0.0, 0.0), *sides, 1.0);
        let b = regular_polygon(Vec2::new(5.0, 0.0), *sides, 1.0);
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(sides),
            sides,
            |bencher, _| {
                bencher.iter(|| manager.check_polygons(black_box(&a), black_box(&b)));
            },
        );
    }
    group.finish();
}

fn bench_rect_checks(c: &mut Criterion) {
    let manager = CollisionManager::new();
    let a = AxisAlignedRect::new(0.0, 0.0, 2.0, 2.0);
    let overlapping = AxisAlignedRect::new(1.5, 0.5, 2.0, 2.0);
    let separated = AxisAlignedRect::new(10.0, 0.0, 2.0, 2.0);

    c.bench_function("rect_overlapping", |bencher| {
        bencher.iter(|| manager.check_rects(black_box(&a), black_box(&overlapping)));
    });
    c.bench_function("rect_separated", |bencher| {
        bencher.iter(|| manager.check_rects(black_box(&a), black_box(&separated)));
    });
}

criterion_group!(benches, bench_polygon_checks, bench_rect_checks);
criterion_main!(benches);
