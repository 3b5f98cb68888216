//! SpMV benchmark harness.
//!
//! Loads or generates a CSR matrix, verifies each parallel strategy
//! against the serial reference, then times the hot loop and reports
//! throughput.

use clap::Parser;
use seam_core::{AlignedVec, Csr, Scalar};
use seam_io::generate::{dense, grid2d, grid3d, wheel};
use seam_io::read_matrix_market;
use seam_kernels::{spmv_serial, spmv_with, verify, PartitionPlan, Strategy};
use std::mem::size_of;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "seam-bench", version, about = "CSR SpMV benchmark harness")]
struct Args {
    /// Matrix Market file to load
    #[arg(long, value_name = "FILE")]
    mtx: Option<PathBuf>,

    /// 2D lattice of the given width
    #[arg(long, value_name = "WIDTH")]
    grid2d: Option<usize>,

    /// 3D lattice of the given width
    #[arg(long, value_name = "WIDTH")]
    grid3d: Option<usize>,

    /// Wheel graph with the given spoke count
    #[arg(long, value_name = "SPOKES")]
    wheel: Option<usize>,

    /// Dense matrix with the given column count (rows sized for ~16M nonzeros)
    #[arg(long, value_name = "COLS")]
    dense: Option<usize>,

    /// Worker count (default: all hardware threads)
    #[arg(long)]
    threads: Option<usize>,

    /// Timing iterations (default: derived from the nonzero count)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Run in single precision
    #[arg(long)]
    fp32: bool,

    /// Emit one CSV row per kernel instead of readable stats
    #[arg(long)]
    quiet: bool,
}

// rayon's install() ships the closure's result across threads, so errors
// must be Send + Sync.
type BenchError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BenchError> {
    env_logger::init();
    let args = Args::parse();
    let workers = args.threads.unwrap_or_else(rayon::current_num_threads);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    if args.fp32 {
        pool.install(|| run::<f32>(&args, workers))
    } else {
        pool.install(|| run::<f64>(&args, workers))
    }
}

fn load<T: Scalar>(args: &Args) -> Result<(String, Csr<T>), BenchError> {
    if let Some(path) = &args.mtx {
        let coo = read_matrix_market::<T>(path)?;
        Ok((path.display().to_string(), coo.to_csr()))
    } else if let Some(width) = args.grid2d {
        Ok((format!("grid2d_{width}"), grid2d(width).to_csr()))
    } else if let Some(width) = args.grid3d {
        Ok((format!("grid3d_{width}"), grid3d(width).to_csr()))
    } else if let Some(spokes) = args.wheel {
        Ok((format!("wheel_{spokes}"), wheel(spokes).to_csr()))
    } else if let Some(cols) = args.dense {
        let rows = ((1usize << 24) / cols.max(1)).max(1);
        Ok((format!("dense_{rows}_x_{cols}"), dense(rows, cols).to_csr()))
    } else {
        Err("no input: pass --mtx or one of --grid2d/--grid3d/--wheel/--dense".into())
    }
}

fn run<T: Scalar>(args: &Args, workers: usize) -> Result<(), BenchError> {
    let (name, a) = load::<T>(args)?;
    a.validate()?;
    let (nrows, ncols) = a.shape();
    let nnz = a.nnz();
    if !args.quiet {
        println!(
            "{name}: {nrows} rows, {ncols} cols, {nnz} nonzeros, fp{}, {workers} workers",
            size_of::<T>() * 8
        );
    }

    let mut x = AlignedVec::<T>::zeroed(ncols)?;
    for (j, xj) in x.iter_mut().enumerate() {
        *xj = T::from_f64((ncols - j) as f64 + 2.0);
    }
    let mut y_ref = AlignedVec::<T>::zeroed(nrows)?;
    spmv_serial(&a, &x, &mut y_ref);

    let iterations = args.iterations.unwrap_or_else(|| {
        // Aim to push ~16G nonzeros through in total.
        let target = (16u64 << 30) / nnz.max(1) as u64;
        target.clamp(100, 200_000) as usize
    });
    if !args.quiet {
        println!("  {iterations} timing iterations");
    }
    log::debug!("{name}: {workers} workers, {iterations} iterations");

    for (label, strategy) in [("merge", Strategy::Merge), ("row_runs", Strategy::RowRuns)] {
        let setup = Instant::now();
        let plan = PartitionPlan::for_matrix(&a, workers);
        let setup_ms = setup.elapsed().as_secs_f64() * 1e3;

        let mut y = AlignedVec::<T>::zeroed(nrows)?;
        spmv_with(&a, &x, &mut y, &plan, strategy)?;
        if let Some(m) = verify(&y, &y_ref) {
            return Err(format!(
                "{label}: FAIL at row {} ({} != {})",
                m.row, m.actual, m.expected
            )
            .into());
        }
        if !args.quiet {
            println!("  {label}: PASS");
        }

        for _ in 0..3 {
            spmv_with(&a, &x, &mut y, &plan, strategy)?;
        }
        let timer = Instant::now();
        for _ in 0..iterations {
            spmv_with(&a, &x, &mut y, &plan, strategy)?;
        }
        let avg_ms = timer.elapsed().as_secs_f64() * 1e3 / iterations as f64;
        report::<T>(args.quiet, label, &a, setup_ms, avg_ms);
    }
    Ok(())
}

fn report<T: Scalar>(quiet: bool, label: &str, a: &Csr<T>, setup_ms: f64, avg_ms: f64) {
    let value_bytes = size_of::<T>();
    let offset_bytes = size_of::<usize>();
    let total_bytes =
        a.nnz() * (2 * value_bytes + offset_bytes) + a.nrows * (offset_bytes + value_bytes);
    let gflops = 2.0 * a.nnz() as f64 / avg_ms / 1.0e6;
    let gbs = total_bytes as f64 / avg_ms / 1.0e6;
    if quiet {
        println!("{label}, {setup_ms:.5}, {avg_ms:.5}, {gflops:.6}, {gbs:.3}");
    } else {
        println!(
            "  {label}: {setup_ms:.4} setup ms, {avg_ms:.4} avg ms, {gflops:.5} GFLOP/s, {gbs:.3} effective GB/s"
        );
    }
}
