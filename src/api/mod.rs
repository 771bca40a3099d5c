//! Host-facing facade: settings, callbacks and the chart that ties layout,
//! scene and marking together.

mod chart;
mod host;
mod settings;

pub use chart::{FunnelChart, RenderStatus};
pub use host::FunnelHost;
pub use settings::FunnelSettings;

pub use crate::render::FunnelStyle;
