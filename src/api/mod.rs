mod colors;
mod engine;
pub mod format;
mod header;
mod labels;
mod scene;

pub use colors::{TrendPalette, palette};
pub use engine::{GraphEngine, RenderPass};
pub use header::{HeaderReadout, header_readout};
pub use labels::{GridLine, PositionedLabel};
pub use scene::{GraphInput, GraphScene, HitTester, build_scene};
