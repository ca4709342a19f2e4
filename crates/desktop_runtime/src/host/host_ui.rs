#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use desktop_app_contract::ApplicationId;
use leptos::{logging, spawn_local};
use platform_host::LinkTarget;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{host::DesktopHostContext, model::Viewport};

pub(super) fn focus_window_input(app_id: &ApplicationId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_primary_input_dom_id(app_id);
        // The window body mounts in the same tick as the open; look the input up afterwards.
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(&dom_id) else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = app_id;
}

pub(super) fn open_external_url(host: DesktopHostContext, url: String, target: LinkTarget) {
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url, target).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn desktop_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64());
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return Viewport::new(width, height);
            }
        }
    }

    Viewport::default()
}
