use seam_kernels::{merge_path_search, MergeCoord, PartitionPlan};

/// Walks the merge of `row_end_offsets` against the identity sequence one
/// event at a time, recording the path coordinate at every diagonal.
fn merge_path_oracle(row_end_offsets: &[usize], nnz: usize) -> Vec<MergeCoord> {
    let nrows = row_end_offsets.len();
    let mut path = vec![MergeCoord::default()];
    let (mut row, mut nz) = (0usize, 0usize);
    while row < nrows || nz < nnz {
        if row < nrows && (nz >= nnz || row_end_offsets[row] <= nz) {
            row += 1;
        } else {
            nz += 1;
        }
        path.push(MergeCoord { row, nz });
    }
    path
}

fn assert_search_matches_oracle(row_offsets: &[usize]) {
    let nnz = *row_offsets.last().unwrap();
    let row_end_offsets = &row_offsets[1..];
    let oracle = merge_path_oracle(row_end_offsets, nnz);
    for (diagonal, expected) in oracle.iter().enumerate() {
        let got = merge_path_search(diagonal, row_end_offsets, nnz);
        assert_eq!(got, *expected, "diagonal {diagonal} of {row_offsets:?}");
        assert_eq!(got.row + got.nz, diagonal);
    }
}

#[test]
fn search_matches_oracle_on_varied_shapes() {
    assert_search_matches_oracle(&[0, 1]); // 1x1
    assert_search_matches_oracle(&[0, 1, 2, 3, 4]); // diagonal
    assert_search_matches_oracle(&[0, 0, 2, 2, 5]); // empty rows
    assert_search_matches_oracle(&[0, 3]); // single dense row
    assert_search_matches_oracle(&[0, 0, 0, 0]); // all rows empty
    assert_search_matches_oracle(&[0, 1, 1, 101, 101, 102]); // heavy middle row
}

#[test]
fn search_endpoints() {
    let row_offsets = [0usize, 2, 2, 7];
    let nnz = 7;
    assert_eq!(
        merge_path_search(0, &row_offsets[1..], nnz),
        MergeCoord { row: 0, nz: 0 }
    );
    assert_eq!(
        merge_path_search(3 + nnz, &row_offsets[1..], nnz),
        MergeCoord { row: 3, nz: nnz }
    );
}

fn assert_plan_tiles(plan: &PartitionPlan, nrows: usize, nnz: usize, workers: usize) {
    let w = plan.workers();
    assert_eq!(w, workers.max(1));
    assert_eq!(plan.starts()[0], MergeCoord { row: 0, nz: 0 });
    assert_eq!(plan.ends()[w - 1], MergeCoord { row: nrows, nz: nnz });
    for t in 0..w - 1 {
        assert_eq!(plan.ends()[t], plan.starts()[t + 1], "seam between {t} and {}", t + 1);
    }
    let merge_items = nrows + nnz;
    let items_per_worker = merge_items.div_ceil(w);
    let total: usize = (0..w).map(|t| plan.slice_len(t)).sum();
    assert_eq!(total, merge_items);
    // Every slice carries at most the ceiling share; all slices before the
    // one holding the remainder are exactly full, and only empty slices
    // follow it.
    let mut partial_seen = false;
    for t in 0..w {
        let len = plan.slice_len(t);
        assert!(len <= items_per_worker, "slice {t} overfull: {len}");
        if partial_seen {
            assert_eq!(len, 0, "slice {t} non-empty after a partial slice");
        } else if len < items_per_worker {
            partial_seen = true;
        }
    }
}

#[test]
fn plan_tiles_the_merge_list() {
    let row_offsets = vec![0usize, 0, 2, 2, 5];
    for workers in [1usize, 2, 3, 4, 7, 16] {
        let plan = PartitionPlan::build(4, 5, &row_offsets, workers);
        assert_plan_tiles(&plan, 4, 5, workers);
    }
}

#[test]
fn single_worker_plan_degenerates() {
    let row_offsets = vec![0usize, 2, 4, 6];
    let plan = PartitionPlan::build(3, 6, &row_offsets, 1);
    assert_eq!(plan.workers(), 1);
    assert_eq!(plan.starts()[0], MergeCoord { row: 0, nz: 0 });
    assert_eq!(plan.ends()[0], MergeCoord { row: 3, nz: 6 });
}

#[test]
fn zero_workers_clamps_to_one() {
    let row_offsets = vec![0usize, 1];
    let plan = PartitionPlan::build(1, 1, &row_offsets, 0);
    assert_eq!(plan.workers(), 1);
}

#[test]
fn more_workers_than_merge_items_leaves_trailing_slices_empty() {
    // R = 2, NNZ = 1: three merge items split across sixteen workers.
    let row_offsets = vec![0usize, 1, 1];
    let plan = PartitionPlan::build(2, 1, &row_offsets, 16);
    assert_plan_tiles(&plan, 2, 1, 16);
    let empty = MergeCoord { row: 2, nz: 1 };
    for t in 3..16 {
        assert_eq!(plan.starts()[t], empty);
        assert_eq!(plan.ends()[t], empty);
        assert_eq!(plan.slice_len(t), 0);
    }
}

#[test]
fn heavy_row_is_split_across_workers() {
    // One row holding 100 of the 105 merge items; with 8 workers its
    // nonzeros must span several slices.
    let row_offsets = vec![0usize, 0, 0, 100, 100, 100];
    let plan = PartitionPlan::build(5, 100, &row_offsets, 8);
    assert_plan_tiles(&plan, 5, 100, 8);
    let inside_row_2 = (0..8)
        .filter(|&t| {
            let (s, e) = (plan.starts()[t], plan.ends()[t]);
            s.row <= 2 && e.row >= 2 && plan.slice_len(t) > 0
        })
        .count();
    assert!(inside_row_2 >= 4, "expected row 2 spread over many slices");
}
