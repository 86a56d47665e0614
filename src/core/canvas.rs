//! Fixed drawing-canvas geometry shared by both layouts.

use crate::core::types::Viewport;

pub const CANVAS_WIDTH: u32 = 980;
pub const CANVAS_HEIGHT: u32 = 580;

/// Focal point of the arch layout.
pub const ARCH_CENTER_X: f64 = 490.0;
pub const ARCH_CENTER_Y: f64 = 510.0;

/// Radius of the outermost arch row.
pub const ARCH_OUTER_RADIUS: f64 = 450.0;
/// Radius of the innermost arch row.
pub const ARCH_INNER_RADIUS: f64 = 150.0;

/// Approximate arc length consumed by one seat when sizing rows.
pub const ARCH_SEAT_PITCH: f64 = 22.0;

/// Majority-line endpoints extend slightly past the outer and inner rows.
pub const MAJORITY_LINE_OUTER_RADIUS: f64 = 468.0;
pub const MAJORITY_LINE_INNER_RADIUS: f64 = 118.0;

/// Vertical aisle of the Westminster layout.
pub const AISLE_CENTER_X: f64 = 490.0;
pub const AISLE_HALF_WIDTH: f64 = 60.0;
pub const AISLE_LEFT: f64 = AISLE_CENTER_X - AISLE_HALF_WIDTH;
pub const AISLE_RIGHT: f64 = AISLE_CENTER_X + AISLE_HALF_WIDTH;

/// Outer margins of the Westminster side blocks.
pub const BLOCK_LEFT_MARGIN: f64 = 80.0;
pub const BLOCK_RIGHT_MARGIN: f64 = 900.0;
/// Gap between a block's inner column and the aisle boundary.
pub const BLOCK_AISLE_INSET: f64 = 10.0;
pub const BLOCK_TOP: f64 = 80.0;
pub const BLOCK_BOTTOM: f64 = 500.0;

#[must_use]
pub fn canvas_viewport() -> Viewport {
    Viewport::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}
