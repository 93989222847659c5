//! Extends the count of filled row prefixes by one row.
//!
//! For a new row with signature `s` and `a` added fences:
//!
//! ```text
//! current[s][p + a] += previous[q][p] * rows[s][a]   for every q with q & s == 0
//! ```
//!
//! A vertical fence is two rows tall, so a column holding one in the new row
//! cannot hold one in the previous row. The remaining columns of the previous
//! signature are unconstrained.
use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;

use crate::config::{BoardConfig, Signature};
use crate::supersets::DisjointSignatures;
use crate::table::{DpTable, RowTable};

/// Computes `current` from `previous` after adding row number `row_index`
/// (zero based). Whatever `current` held before is discarded.
pub fn add_row(
    previous: &DpTable,
    rows: &RowTable,
    row_index: u32,
    config: &BoardConfig,
    current: &mut DpTable,
) {
    check_shapes(previous, rows, config, current);
    current.clear();

    for (signature, target) in current.signatures_mut().enumerate() {
        accumulate(signature as Signature, target, previous, rows, row_index, config);
    }
}

/// Same result as [`add_row`], with target signatures spread over the
/// current rayon pool. Every worker owns a disjoint slice of `current`.
pub fn add_row_parallel(
    previous: &DpTable,
    rows: &RowTable,
    row_index: u32,
    config: &BoardConfig,
    current: &mut DpTable,
) {
    check_shapes(previous, rows, config, current);
    let fence_dimension = config.fence_dimension();

    current
        .cells_mut()
        .par_chunks_mut(fence_dimension)
        .enumerate()
        .for_each(|(signature, target)| {
            target.iter_mut().for_each(Zero::set_zero);
            accumulate(signature as Signature, target, previous, rows, row_index, config);
        });
}

fn check_shapes(previous: &DpTable, rows: &RowTable, config: &BoardConfig, current: &DpTable) {
    debug_assert_eq!(previous.signature_dimension(), config.signature_dimension());
    debug_assert_eq!(current.signature_dimension(), config.signature_dimension());
    debug_assert_eq!(previous.fence_dimension(), config.fence_dimension());
    debug_assert_eq!(current.fence_dimension(), config.fence_dimension());
    debug_assert_eq!(rows.fence_dimension(), config.columns() as usize + 1);
}

/// Sums every way of reaching `signature` into its fence-count slice.
fn accumulate(
    signature: Signature,
    target: &mut [BigUint],
    previous: &DpTable,
    rows: &RowTable,
    row_index: u32,
    config: &BoardConfig,
) {
    let max_fences = config.max_fences() as usize;
    // `row_index` rows hold at most `columns` fences each.
    let max_previous_fences =
        (row_index as usize).saturating_mul(config.columns() as usize).min(max_fences);
    let additions = rows.fences(signature);

    if additions.iter().all(|&ways| ways == 0) {
        return;
    }

    for previous_signature in DisjointSignatures::new(signature, config.max_signature()) {
        let prefixes = &previous.fences(previous_signature)[..=max_previous_fences];

        for (previous_fences, ways) in prefixes.iter().enumerate() {
            if ways.is_zero() {
                continue;
            }

            let room = max_fences - previous_fences;
            for (added, &row_ways) in additions.iter().enumerate().take(room + 1) {
                if row_ways != 0 {
                    target[previous_fences + added] += ways * row_ways;
                }
            }
        }
    }
}
