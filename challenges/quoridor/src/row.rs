//! Single-row enumeration.
//!
//! Each intersection of a row is either empty, holds a vertical fence or
//! holds a horizontal fence. A horizontal fence is two squares wide, so two
//! neighbouring intersections cannot both hold one. The left board edge has
//! no neighbour, so the first column is always free to hold one.
//!
//! With 8 columns there are 11 rows with signature 17 and 4 fences
//! (`.` empty, `|` vertical, `-` horizontal, column 0 on the left):
//!
//! ```text
//! |...|-.-   |..-|..-   |..-|.-.   |..-|-..   |.-.|..-   |.-.|.-.
//! |.-.|-..   |-..|..-   |-..|.-.   |-..|-..   |-.-|...
//! ```
use crate::config::Signature;
use crate::table::RowTable;

/// What a single intersection of a row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Empty,
    Vertical,
    Horizontal,
}

const PLACEMENTS: [Placement; 3] = [Placement::Empty, Placement::Vertical, Placement::Horizontal];

/// Counts every legal row of `columns` intersections by signature and fence
/// count. The table has `columns + 1` fence counts since a row holds at most
/// one fence per intersection.
pub fn enumerate_rows(columns: u32) -> RowTable {
    let signatures = 1usize << columns;
    let mut rows = RowTable::zeroed(signatures, columns as usize + 1);
    dfs(columns, 0, 0, 0, false, &mut rows);
    rows
}

fn dfs(
    columns: u32,
    column: u32,
    signature: Signature,
    fence_count: usize,
    previous_horizontal: bool,
    rows: &mut RowTable,
) {
    if column == columns {
        *rows.get_mut(signature, fence_count) += 1;
        return;
    }

    for placement in PLACEMENTS {
        match placement {
            Placement::Empty => dfs(columns, column + 1, signature, fence_count, false, rows),
            Placement::Vertical => dfs(
                columns,
                column + 1,
                signature | (1 << column),
                fence_count + 1,
                false,
                rows,
            ),
            Placement::Horizontal if !previous_horizontal => {
                dfs(columns, column + 1, signature, fence_count + 1, true, rows)
            }
            Placement::Horizontal => {}
        }
    }
}
