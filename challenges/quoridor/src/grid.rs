use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use num_bigint::BigUint;
use num_traits::One;

use crate::config::BoardConfig;
use crate::convolution::{add_row, add_row_parallel};
use crate::row::enumerate_rows;
use crate::table::{DpTable, RowTable};

/// Fills the board row by row.
pub struct Solver {
    config: BoardConfig,
    threads: usize,
}

impl Solver {
    /// A single-threaded solver.
    pub fn new(config: BoardConfig) -> Self {
        Self { config, threads: 1 }
    }

    /// Spread each row over `threads` workers, or one per logical core when
    /// `threads` is 0.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = if threads == 0 { num_cpus::get() } else { threads };
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Ways to fill every row, by last row signature and total fence count.
    pub fn compute_final_table(&self) -> Result<DpTable> {
        let start = Instant::now();
        let rows = enumerate_rows(self.config.columns());
        debug!(
            "enumerated {} row patterns for {} columns",
            rows.iter_nonzero().count(),
            self.config.columns()
        );

        let table = if self.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .context("failed to start the worker pool")?;
            pool.install(|| self.fill(&rows, add_row_parallel))
        } else {
            self.fill(&rows, add_row)
        };

        info!(
            "filled {}x{} board with up to {} fences on {} thread(s) in {:.2}s",
            self.config.columns(),
            self.config.rows(),
            self.config.max_fences(),
            self.threads,
            start.elapsed().as_secs_f64()
        );
        Ok(table)
    }

    fn fill<F>(&self, rows: &RowTable, step: F) -> DpTable
    where
        F: Fn(&DpTable, &RowTable, u32, &BoardConfig, &mut DpTable),
    {
        let config = &self.config;
        let zeroed = || DpTable::zeroed(config.signature_dimension(), config.fence_dimension());

        // No rows filled: one way, with no fences and an empty signature.
        let mut buffers = [zeroed(), zeroed()];
        *buffers[0].get_mut(0, 0) = BigUint::one();

        // `buffers[previous]` holds the last completed prefix.
        let mut previous = 0;
        for row_index in 0..config.rows() {
            let [a, b] = &mut buffers;
            let (source, target) = if previous == 0 { (&*a, b) } else { (&*b, a) };
            step(source, rows, row_index, config, target);
            previous ^= 1;
            debug!("added row {} of {}", row_index + 1, config.rows());
        }

        let [a, b] = buffers;
        if previous == 0 { a } else { b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Summary;

    #[test]
    fn test_single_cell_board_matches_row_table() {
        let config = BoardConfig::new(1, 1, 2).unwrap();
        let table = Solver::new(config).compute_final_table().unwrap();
        let rows = enumerate_rows(1);

        for signature in 0..=1 {
            for fences in 0..=1 {
                assert_eq!(
                    *table.get(signature, fences),
                    BigUint::from(*rows.get(signature, fences))
                );
            }
            assert_eq!(*table.get(signature, 2), BigUint::from(0u32));
        }
    }

    #[test]
    fn test_no_counts_past_available_slots() {
        let config = BoardConfig::new(2, 2, 10).unwrap();
        let table = Solver::new(config).compute_final_table().unwrap();
        let summary = Summary::from_table(&table);

        for fences in 5..=10 {
            assert_eq!(summary.per_fence()[fences], BigUint::from(0u32));
        }
        let cells: BigUint = table.iter_nonzero().map(|(_, _, ways)| ways).sum();
        assert_eq!(*summary.total(), cells);
    }

    #[test]
    fn test_threads_agree() {
        let config = BoardConfig::new(4, 4, 8).unwrap();
        let serial = Solver::new(config).compute_final_table().unwrap();
        let parallel = Solver::new(config).with_threads(3).compute_final_table().unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_zero_threads_uses_every_core() {
        let solver = Solver::new(BoardConfig::default()).with_threads(0);
        assert_eq!(solver.threads(), num_cpus::get());
    }
}
