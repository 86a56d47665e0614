//! Pure seat-layout engine: every function here is a deterministic function
//! of its inputs and never fails on validated data.

pub mod apportion;
pub mod arch;
pub mod block;
pub mod canvas;
pub mod row_plan;
pub mod types;
pub mod westminster;

pub use apportion::apportion_largest_remainder;
pub use arch::{ArchPolar, CanonicalSeatKey, arch_positions, arch_row_plan, arch_row_positions};
pub use block::{BlockGrid, SideBounds, block_grid, block_positions};
pub use row_plan::{plan_rows, row_capacity, row_radius};
pub use types::{ChartSpec, LayoutKind, Party, PartyId, SeatPosition, Side, Viewport};
pub use westminster::{side_seat_total, westminster_positions};
