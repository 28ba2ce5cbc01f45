//! price-graph: a time-series price chart engine.
//!
//! The crate turns a raw ordered `(unix, price)` series into a backend-agnostic
//! draw pass: pixel-bounded sampling, clip-space scales, a gradient-filled area
//! with a stroked line, positioned axis labels and grid lines, and
//! pointer-driven nearest-point scrubbing.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphEngine, GraphInput, GraphScene};
pub use error::{GraphError, GraphResult};
