//! funnel-rs: proportional funnel chart engine.
//!
//! The crate is split into a pure layout engine (`core`), an incremental,
//! key-reconciled scene (`scene`), a pointer-driven rectangular marking engine
//! (`interaction`) and backend-agnostic drawing (`render`). `api` ties them
//! together behind [`FunnelChart`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{FunnelChart, FunnelHost, FunnelSettings, FunnelStyle, RenderStatus};
pub use error::{FunnelError, FunnelResult};
