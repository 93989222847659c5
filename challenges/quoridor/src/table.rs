use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::Signature;

/// Dense `[signature][fence_count]` arena stored row-major in one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    cells: Vec<T>,
    fence_dimension: usize,
}

/// Single-row realizations: `[signature][fences added by the row]`.
pub type RowTable = Table<u64>;

/// Ways to fill a prefix of rows: `[last row signature][cumulative fences]`.
pub type DpTable = Table<BigUint>;

impl<T: Clone + Zero> Table<T> {
    pub fn zeroed(signature_dimension: usize, fence_dimension: usize) -> Self {
        Self {
            cells: vec![T::zero(); signature_dimension * fence_dimension],
            fence_dimension,
        }
    }

    /// Resets every cell to zero without releasing the allocation.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_zero());
    }

    /// Nonzero cells as `(signature, fence_count, value)`, in signature order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Signature, usize, &T)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(index, value)| {
                let signature = (index / self.fence_dimension) as Signature;
                (signature, index % self.fence_dimension, value)
            })
    }
}

impl<T> Table<T> {
    pub fn signature_dimension(&self) -> usize {
        self.cells.len() / self.fence_dimension
    }

    pub fn fence_dimension(&self) -> usize {
        self.fence_dimension
    }

    #[inline]
    fn index(&self, signature: Signature, fence_count: usize) -> usize {
        debug_assert!(fence_count < self.fence_dimension);
        signature as usize * self.fence_dimension + fence_count
    }

    #[inline]
    pub fn get(&self, signature: Signature, fence_count: usize) -> &T {
        &self.cells[self.index(signature, fence_count)]
    }

    #[inline]
    pub fn get_mut(&mut self, signature: Signature, fence_count: usize) -> &mut T {
        let index = self.index(signature, fence_count);
        &mut self.cells[index]
    }

    /// All fence counts recorded for one signature.
    #[inline]
    pub fn fences(&self, signature: Signature) -> &[T] {
        let start = self.index(signature, 0);
        &self.cells[start..start + self.fence_dimension]
    }

    /// Mutable per-signature slices, in signature order.
    pub fn signatures_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.cells.chunks_exact_mut(self.fence_dimension)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_row_major() {
        let mut table: Table<u64> = Table::zeroed(4, 3);
        *table.get_mut(2, 1) = 7;
        *table.get_mut(3, 2) = 9;

        assert_eq!(table.signature_dimension(), 4);
        assert_eq!(table.fences(2), &[0, 7, 0]);
        assert_eq!(table.fences(3), &[0, 0, 9]);

        let nonzero: Vec<_> = table.iter_nonzero().map(|(s, f, v)| (s, f, *v)).collect();
        assert_eq!(nonzero, vec![(2, 1, 7), (3, 2, 9)]);
    }

    #[test]
    fn test_clear_keeps_shape() {
        let mut table: DpTable = Table::zeroed(2, 2);
        *table.get_mut(1, 1) += 5u32;
        table.clear();

        assert_eq!(table.iter_nonzero().count(), 0);
        assert_eq!(table.signature_dimension(), 2);
        assert_eq!(table.fence_dimension(), 2);
    }
}
