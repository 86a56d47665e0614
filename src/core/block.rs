use serde::{Deserialize, Serialize};

use crate::core::canvas::{
    AISLE_LEFT, AISLE_RIGHT, BLOCK_AISLE_INSET, BLOCK_BOTTOM, BLOCK_LEFT_MARGIN,
    BLOCK_RIGHT_MARGIN, BLOCK_TOP,
};
use crate::core::types::{SeatPosition, Side};

/// Target width/height ratio of a side block grid.
const BLOCK_ASPECT: f64 = 1.25;
const MIN_BLOCK_COLUMNS: usize = 2;

/// Column/row shape of one side block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGrid {
    pub columns: usize,
    pub rows: usize,
}

impl BlockGrid {
    #[must_use]
    pub fn capacity(self) -> usize {
        self.columns * self.rows
    }
}

/// Horizontal extent of a side's seating rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl SideBounds {
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Government => Self {
                left: BLOCK_LEFT_MARGIN,
                right: AISLE_LEFT - BLOCK_AISLE_INSET,
                top: BLOCK_TOP,
                bottom: BLOCK_BOTTOM,
            },
            Side::Opposition => Self {
                left: AISLE_RIGHT + BLOCK_AISLE_INSET,
                right: BLOCK_RIGHT_MARGIN,
                top: BLOCK_TOP,
                bottom: BLOCK_BOTTOM,
            },
        }
    }

    /// Inclusive containment, tolerant of grid-step rounding at the edges.
    #[must_use]
    pub fn contains(self, position: SeatPosition) -> bool {
        const EPSILON: f64 = 1e-9;
        (self.left - EPSILON..=self.right + EPSILON).contains(&position.x)
            && (self.top - EPSILON..=self.bottom + EPSILON).contains(&position.y)
    }
}

/// Grid shape policy: roughly `BLOCK_ASPECT` times wider than tall.
#[must_use]
pub fn block_grid(seat_count: usize) -> BlockGrid {
    let columns = ((seat_count as f64 * BLOCK_ASPECT).sqrt().ceil() as usize).max(MIN_BLOCK_COLUMNS);
    BlockGrid {
        columns,
        rows: seat_count.div_ceil(columns),
    }
}

/// Lays `seat_count` seats into `side`'s rectangle in row-major order.
///
/// Columns are spread evenly between the outer margin and the aisle-side
/// edge; rows are spread evenly from top to bottom. A single row sits on the
/// top edge.
#[must_use]
pub fn block_positions(seat_count: usize, side: Side) -> Vec<SeatPosition> {
    let grid = block_grid(seat_count);
    let bounds = SideBounds::for_side(side);
    let gap_x = (bounds.right - bounds.left) / (grid.columns - 1).max(1) as f64;
    let gap_y = (bounds.bottom - bounds.top) / grid.rows.saturating_sub(1).max(1) as f64;

    (0..seat_count)
        .map(|index| {
            let row = index / grid.columns;
            let column = index % grid.columns;
            SeatPosition::new(
                bounds.left + column as f64 * gap_x,
                bounds.top + row as f64 * gap_y,
            )
        })
        .collect()
}
