//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

mod host_ui;

use std::rc::Rc;

use platform_host::ExternalUrlService;
use platform_host_web::{external_url_service, host_strategy_name};

use crate::{model::Viewport, reducer::RuntimeEffect};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            external_urls: Rc::new(external_url_service()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl DesktopHostContext {
    /// Host bundle with an injected external URL service.
    pub fn with_external_url_service(external_urls: Rc<dyn ExternalUrlService>) -> Self {
        Self {
            external_urls,
            host_strategy_name: "injected",
        }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(app_id) => host_ui::focus_window_input(&app_id),
            RuntimeEffect::OpenExternalUrl { url, target } => {
                host_ui::open_external_url(self.clone(), url, target)
            }
        }
    }

    /// Returns the current browser viewport in CSS pixels.
    pub fn desktop_viewport(&self) -> Viewport {
        host_ui::desktop_viewport()
    }
}
