//! parliament-chart: deterministic parliamentary seating charts.
//!
//! The `core` module holds the pure seat-layout engine (arch and Westminster
//! positioners). `api` validates chart documents, assigns seats to parties
//! and drives a `render::Renderer`; `interaction` carries hover state.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartOptions};
pub use error::{ChartError, ChartResult};
