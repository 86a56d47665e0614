use std::cmp::Ordering;
use std::f64::consts::PI;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::canvas::{ARCH_CENTER_X, ARCH_CENTER_Y};
use crate::core::row_plan::{plan_rows, row_radius};
use crate::core::types::SeatPosition;

const MIN_INITIAL_ROWS: usize = 5;
const MAX_INITIAL_ROWS: usize = 11;
/// Rows are dropped while the innermost row holds fewer seats than this.
const SPARSE_INNER_ROW_SEATS: usize = 8;
/// Shrinking stops once the row count would fall below this.
const MIN_SHRUNK_ROWS: usize = 4;
/// Resolution of the canonical-order angle comparison.
const ANGLE_TICKS_PER_RADIAN: f64 = 1e9;

/// Polar coordinates of a seat relative to the arch focal point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchPolar {
    /// Radians from the positive x-axis, counter-clockwise with y pointing up.
    pub angle: f64,
    pub radius: f64,
}

impl ArchPolar {
    #[must_use]
    pub fn of(position: SeatPosition) -> Self {
        let dx = position.x - ARCH_CENTER_X;
        let dy = ARCH_CENTER_Y - position.y;
        Self {
            angle: dy.atan2(dx),
            radius: dx.hypot(dy),
        }
    }

    #[must_use]
    pub fn to_position(self) -> SeatPosition {
        SeatPosition::new(
            ARCH_CENTER_X + self.radius * self.angle.cos(),
            ARCH_CENTER_Y - self.radius * self.angle.sin(),
        )
    }
}

/// Sort key defining the canonical arch seat order.
///
/// Seats sort by descending angle (the sweep starts at the left end of the
/// arch), then by descending radius so the outer row precedes the inner row
/// at the same angle.
///
/// Angles are compared on a 1e-9 rad grid: seats of different rows that share
/// an angle come out of `atan2` a few ULPs apart and must still tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalSeatKey {
    angle_ticks: i64,
    radius: OrderedFloat<f64>,
}

impl CanonicalSeatKey {
    #[must_use]
    pub fn new(angle: f64, radius: f64) -> Self {
        Self {
            angle_ticks: (angle * ANGLE_TICKS_PER_RADIAN).round() as i64,
            radius: OrderedFloat(radius),
        }
    }

    #[must_use]
    pub fn of(position: SeatPosition) -> Self {
        let polar = ArchPolar::of(position);
        Self::new(polar.angle, polar.radius)
    }
}

impl Ord for CanonicalSeatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .angle_ticks
            .cmp(&self.angle_ticks)
            .then_with(|| other.radius.cmp(&self.radius))
    }
}

impl PartialOrd for CanonicalSeatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Initial row count for an arch of `total_seats`.
#[must_use]
pub fn initial_row_count(total_seats: usize) -> usize {
    let rows = ((total_seats as f64).sqrt() / 2.0).round() as usize;
    rows.clamp(MIN_INITIAL_ROWS, MAX_INITIAL_ROWS)
}

/// Row plan after dropping rows that would leave a sparse innermost row.
#[must_use]
pub fn arch_row_plan(total_seats: usize) -> Vec<usize> {
    let mut rows = initial_row_count(total_seats);
    let mut plan = plan_rows(total_seats, rows);

    while plan.len() > 1 && plan.last().is_some_and(|&inner| inner < SPARSE_INNER_ROW_SEATS) {
        if rows <= MIN_SHRUNK_ROWS {
            break;
        }
        rows -= 1;
        plan = plan_rows(total_seats, rows);
        trace!(total_seats, rows, inner = plan.last().copied(), "shrunk arch rows");
    }

    debug!(total_seats, rows = plan.len(), ?plan, "arch row plan");
    plan
}

/// Seat positions row by row (outermost first), left to right within a row.
///
/// Even rows are staggered by half a seat against odd rows.
#[must_use]
pub fn arch_row_positions(total_seats: usize) -> Vec<SeatPosition> {
    let plan = arch_row_plan(total_seats);
    let row_count = plan.len();
    let mut positions = Vec::with_capacity(plan.iter().sum());

    for (row, &count) in plan.iter().enumerate() {
        let radius = row_radius(row, row_count);
        let offset = if row % 2 == 0 { 0.5 } else { 0.0 };
        for seat in 0..count {
            let angle = PI - ((seat as f64 + offset + 0.5) / (count as f64 + offset)) * PI;
            positions.push(ArchPolar { angle, radius }.to_position());
        }
    }

    positions.truncate(total_seats);
    positions
}

/// Exactly `total_seats` arch positions in canonical seat order.
#[must_use]
pub fn arch_positions(total_seats: usize) -> Vec<SeatPosition> {
    let mut positions = arch_row_positions(total_seats);
    positions.sort_by_cached_key(|&position| CanonicalSeatKey::of(position));
    positions
}
