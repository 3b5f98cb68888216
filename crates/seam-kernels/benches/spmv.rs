use criterion::{criterion_group, criterion_main, Criterion};
use seam_io::generate::grid2d;
use seam_kernels::{spmv_serial, spmv_with, spmv_with_plan, PartitionPlan, Strategy};
use std::hint::black_box;

fn bench_spmv(c: &mut Criterion) {
    let a = grid2d::<f64>(192).to_csr();
    let x: Vec<f64> = (0..a.ncols).map(|j| (a.ncols - j) as f64 + 2.0).collect();
    let mut y = vec![0.0f64; a.nrows];

    let mut group = c.benchmark_group("spmv_grid2d_192");
    group.bench_function("serial", |b| {
        b.iter(|| spmv_serial(&a, black_box(&x), &mut y));
    });
    for workers in [2usize, 4, 8] {
        let plan = PartitionPlan::for_matrix(&a, workers);
        group.bench_function(format!("merge/w{workers}"), |b| {
            b.iter(|| spmv_with_plan(&a, black_box(&x), &mut y, &plan).unwrap());
        });
        group.bench_function(format!("row_runs/w{workers}"), |b| {
            b.iter(|| spmv_with(&a, black_box(&x), &mut y, &plan, Strategy::RowRuns).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spmv);
criterion_main!(benches);
