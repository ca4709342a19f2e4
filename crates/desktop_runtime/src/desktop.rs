//! Registry of window lifecycles, one per window type, in declaration order.

use desktop_app_contract::ApplicationId;

use crate::{
    catalog::{validate_catalog, CatalogError},
    lifecycle::WindowLifecycle,
    model::{Viewport, WindowDescriptor},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopController {
    windows: Vec<WindowLifecycle>,
    default_label: String,
}

impl DesktopController {
    /// Builds one closed window per descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the descriptors repeat an identifier or carry invalid bounds.
    pub fn new(
        descriptors: Vec<WindowDescriptor>,
        default_label: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        validate_catalog(&descriptors)?;
        Ok(Self {
            windows: descriptors.into_iter().map(WindowLifecycle::new).collect(),
            default_label: default_label.into(),
        })
    }

    /// Desktop with no window types. Used when the catalog fails to load.
    pub fn empty(default_label: impl Into<String>) -> Self {
        Self {
            windows: Vec::new(),
            default_label: default_label.into(),
        }
    }

    pub fn windows(&self) -> &[WindowLifecycle] {
        &self.windows
    }

    pub fn window(&self, app_id: &ApplicationId) -> Option<&WindowLifecycle> {
        self.windows
            .iter()
            .find(|window| &window.descriptor().app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: &ApplicationId) -> Option<&mut WindowLifecycle> {
        self.windows
            .iter_mut()
            .find(|window| &window.descriptor().app_id == app_id)
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Routes an icon click: reopens a minimized window, opens a closed one, ignores a visible one.
    ///
    /// Returns `None` for an unknown window type.
    pub fn on_icon_activate(&mut self, app_id: &ApplicationId, viewport: Viewport) -> Option<bool> {
        self.window_mut(app_id).map(|window| window.open(viewport))
    }

    /// First visible window in declaration order.
    pub fn active_window(&self) -> Option<&WindowLifecycle> {
        self.windows.iter().find(|window| window.is_visible())
    }

    /// Menu bar label: the active window's label, else the desktop default.
    pub fn active_application(&self) -> &str {
        self.active_window()
            .map(|window| window.descriptor().label.as_str())
            .unwrap_or(&self.default_label)
    }

    /// Refits every window to `viewport`. Returns whether any window changed.
    pub fn refit_all(&mut self, viewport: Viewport) -> bool {
        self.windows
            .iter_mut()
            .fold(false, |changed, window| window.refit(viewport) || changed)
    }
}
