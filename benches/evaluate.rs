use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curvegen::math::point3::Point3;
use curvegen::{BezierCurve, BezierPatch, Mesh, Sellipsoid};

fn wavy_curve() -> BezierCurve {
    BezierCurve::from_control_points(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.5),
        Point3::new(2.0, -1.0, 1.0),
        Point3::new(3.0, 1.5, 0.0),
        Point3::new(4.0, 0.0, -0.5),
        Point3::new(5.0, 0.5, 0.0),
    ])
}

fn bumpy_patch() -> BezierPatch {
    let mut ctrl = [Point3::ZERO; 16];
    for (idx, point) in ctrl.iter_mut().enumerate() {
        let i = (idx % 4) as f64;
        let j = (idx / 4) as f64;
        *point = Point3::new(i, j, ((i - 1.5) * (j - 1.5)).sin());
    }
    BezierPatch::new(ctrl)
}

fn benchmark_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    let curve = wavy_curve();

    for inc in [0.09, 0.01, 0.001] {
        group.bench_with_input(BenchmarkId::new("bezier", inc), &inc, |b, &inc| {
            b.iter(|| black_box(&curve).polyline(black_box(inc)));
        });
    }

    group.finish();
}

fn benchmark_patch_meshing(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch_meshing");

    let patch = bumpy_patch();

    for n in [11usize, 33, 65] {
        group.bench_with_input(BenchmarkId::new("points_and_faces", n), &n, |b, &n| {
            b.iter(|| {
                let mut mesh = Mesh::new();
                black_box(&patch).mesh_points(&mut mesh, n, n);
                mesh.triangulate_grid();
                mesh
            });
        });

        group.bench_with_input(BenchmarkId::new("smooth", n), &n, |b, &n| {
            b.iter(|| {
                let mut mesh = Mesh::new();
                black_box(&patch).mesh_points(&mut mesh, n, n);
                mesh.triangulate_grid();
                patch.mesh_normals(&mut mesh);
                mesh
            });
        });
    }

    group.finish();
}

fn benchmark_ellipsoid_meshing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipsoid_meshing");

    let sphere = Sellipsoid::default();
    let pinched = Sellipsoid::new(3.0, 0.5, 1.0, 1.5, 2.0);

    for (num_u, num_v) in [(19usize, 9usize), (37, 19), (73, 37)] {
        let label = format!("{num_u}x{num_v}");

        group.bench_with_input(BenchmarkId::new("sphere", &label), &(num_u, num_v), |b, &(u, v)| {
            b.iter(|| {
                let mut mesh = Mesh::new();
                black_box(&sphere).mesh_points(&mut mesh, u, v);
                mesh.triangulate_closed();
                mesh
            });
        });

        group.bench_with_input(
            BenchmarkId::new("superquadric_smooth", &label),
            &(num_u, num_v),
            |b, &(u, v)| {
                b.iter(|| {
                    let mut mesh = Mesh::new();
                    black_box(&pinched).mesh_points(&mut mesh, u, v);
                    mesh.triangulate_closed();
                    pinched.mesh_normals(&mut mesh);
                    mesh
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curve_sampling,
    benchmark_patch_meshing,
    benchmark_ellipsoid_meshing
);
criterion_main!(benches);
