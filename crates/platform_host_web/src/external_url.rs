//! Browser external URL adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService, LinkTarget};

/// Window features for new-tab navigation. The opened page gets no handle back to the desktop.
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open` and `location.href`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { imp::open(url, target) })
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use platform_host::LinkTarget;
    use wasm_bindgen::JsValue;

    use super::NEW_TAB_FEATURES;

    fn describe(err: JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    pub fn open(url: &str, target: LinkTarget) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        match target {
            LinkTarget::NewTab => window
                .open_with_url_and_target_and_features(url, "_blank", NEW_TAB_FEATURES)
                .map(|_| ())
                .map_err(describe),
            LinkTarget::SameTab => window.location().set_href(url).map_err(describe),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use platform_host::LinkTarget;

    pub fn open(_url: &str, _target: LinkTarget) -> Result<(), String> {
        Err("external navigation is only available in the browser".to_string())
    }
}
