use num_bigint::BigUint;
use num_traits::Zero;

use crate::table::DpTable;

/// Exact number of fence configurations per fence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    per_fence: Vec<BigUint>,
    total: BigUint,
}

impl Summary {
    /// Sums a completed board over every last-row signature.
    pub fn from_table(table: &DpTable) -> Self {
        let mut per_fence = vec![BigUint::zero(); table.fence_dimension()];
        let mut total = BigUint::zero();

        for (_, fences, ways) in table.iter_nonzero() {
            per_fence[fences] += ways;
            total += ways;
        }

        Self { per_fence, total }
    }

    /// Indexed by fence count, `0..=max_fences`.
    pub fn per_fence(&self) -> &[BigUint] {
        &self.per_fence
    }

    pub fn total(&self) -> &BigUint {
        &self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_across_signatures() {
        let mut table = DpTable::zeroed(4, 3);
        *table.get_mut(0, 0) = BigUint::from(1u32);
        *table.get_mut(1, 1) = BigUint::from(2u32);
        *table.get_mut(3, 1) = BigUint::from(5u32);
        *table.get_mut(2, 2) = BigUint::from(u64::MAX);

        let summary = Summary::from_table(&table);
        assert_eq!(
            summary.per_fence(),
            &[BigUint::from(1u32), BigUint::from(7u32), BigUint::from(u64::MAX)]
        );
        assert_eq!(*summary.total(), BigUint::from(u64::MAX) + 8u32);
    }

    #[test]
    fn test_empty_table() {
        let summary = Summary::from_table(&DpTable::zeroed(2, 2));
        assert_eq!(summary.per_fence(), &[BigUint::zero(), BigUint::zero()]);
        assert!(summary.total().is_zero());
    }
}
