//! Window lifecycle, geometry, and shell UI for the browser desktop.

pub mod apps;
pub mod capture;
pub mod catalog;
pub mod components;
pub mod config;
pub mod desktop;
pub mod drag;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod icons;
pub mod lifecycle;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{DesktopConfig, DesktopIcon};
pub use desktop::DesktopController;
pub use host::DesktopHostContext;
pub use lifecycle::WindowLifecycle;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::load_desktop_config;
