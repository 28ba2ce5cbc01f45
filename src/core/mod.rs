pub mod area;
pub mod project;
pub mod sample;
pub mod scale;
pub mod types;

pub use area::{AreaGeometry, project_area_geometry};
pub use project::{CanvasPoint, GraphProjection, GraphTuning};
pub use sample::{sample_for_width, sample_stride};
pub use scale::{ClipPoint, ClipScale, GraphScales};
pub use types::{PeriodConfig, PricePoint, TrendDirection, Viewport};
