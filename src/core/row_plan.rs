use std::f64::consts::PI;

use crate::core::apportion::apportion_largest_remainder;
use crate::core::canvas::{ARCH_INNER_RADIUS, ARCH_OUTER_RADIUS, ARCH_SEAT_PITCH};

/// Smallest notional capacity of one row before normalization.
const MIN_ROW_CAPACITY: usize = 3;

/// Radius of `row` (0 = outermost) when `row_count` rows span the arch.
#[must_use]
pub fn row_radius(row: usize, row_count: usize) -> f64 {
    let step = (ARCH_OUTER_RADIUS - ARCH_INNER_RADIUS) / row_count.saturating_sub(1).max(1) as f64;
    ARCH_OUTER_RADIUS - row as f64 * step
}

/// Seats that evenly spaced seats would fit on a half circle of `radius`.
#[must_use]
pub fn row_capacity(radius: f64) -> usize {
    ((PI * radius / ARCH_SEAT_PITCH).floor() as usize).max(MIN_ROW_CAPACITY)
}

/// Distributes `total_seats` over `row_count` concentric rows in proportion to
/// each row's arc capacity, outermost row first.
///
/// Every row receives at least one seat. The plan sums exactly to
/// `total_seats` whenever `total_seats >= row_count`; otherwise every row
/// holds a single seat and the caller trims the surplus.
#[must_use]
pub fn plan_rows(total_seats: usize, row_count: usize) -> Vec<usize> {
    let capacities: Vec<f64> = (0..row_count)
        .map(|row| row_capacity(row_radius(row, row_count)) as f64)
        .collect();
    apportion_largest_remainder(&capacities, total_seats)
}
