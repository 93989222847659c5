use anyhow::{Result, bail, ensure};

/// Bitmask of vertical fences across one row of intersections.
pub type Signature = u32;

/// Widest row whose signatures are enumerated.
pub const MAX_COLUMNS: u32 = 24;

/// Upper bound on the cells of a single table (signatures x fence counts).
///
/// DP cells hold a `BigUint`, so this caps the resident size of one buffer
/// before any digits are stored.
pub const MAX_TABLE_CELLS: usize = 1 << 24;

/// The board the fences are counted on.
///
/// `columns` and `rows` count fence intersections, not squares: a standard
/// 9x9 Quoridor board has 8x8 intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    columns: u32,
    rows: u32,
    max_fences: u32,
}

impl BoardConfig {
    /// Validates the dimensions before anything is allocated for them.
    pub fn new(columns: u32, rows: u32, max_fences: u32) -> Result<Self> {
        ensure!(columns >= 1, "column count must be at least 1");
        ensure!(rows >= 1, "row count must be at least 1");
        if columns > MAX_COLUMNS {
            bail!("{columns} columns exceeds the supported maximum of {MAX_COLUMNS}");
        }

        // The row table tracks up to `columns` fences per signature.
        let cells = (max_fences.max(columns) as usize)
            .checked_add(1)
            .and_then(|fences| fences.checked_mul(1usize << columns));
        match cells {
            Some(cells) if cells <= MAX_TABLE_CELLS => {}
            _ => bail!(
                "a {columns} column board with up to {max_fences} fences needs more than \
                 {MAX_TABLE_CELLS} table cells"
            ),
        }

        Ok(Self {
            columns,
            rows,
            max_fences,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn max_fences(&self) -> u32 {
        self.max_fences
    }

    /// Number of distinct signatures, `2^columns`.
    #[inline]
    pub fn signature_dimension(&self) -> usize {
        1 << self.columns
    }

    #[inline]
    pub fn max_signature(&self) -> Signature {
        (self.signature_dimension() - 1) as Signature
    }

    /// Number of fence counts tracked per signature, `0..=max_fences`.
    #[inline]
    pub fn fence_dimension(&self) -> usize {
        self.max_fences as usize + 1
    }
}

impl Default for BoardConfig {
    /// The standard board: 8x8 intersections and 20 fences.
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 8,
            max_fences: 20,
        }
    }
}
