//! Desktop shell UI composition and interaction surfaces.

mod menu_bar;
mod window;

use std::time::Duration;

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use self::{menu_bar::MenuBar, window::DesktopWindow};

use crate::{
    capture::{CaptureListener, InputCapture},
    config::{DesktopIcon, IconTarget},
    icons::{GlyphIcon, IconName, IconSize},
    model::PointerPosition,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

impl CaptureListener for WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

#[component]
/// Full-screen desktop: background, menu bar, icon grid, and the window layer.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportChanged {
            viewport: runtime.host.get_value().desktop_viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let background_style = runtime.config.with_value(|config| {
        config
            .background_image
            .as_ref()
            .map(|image| format!("background-image:url('{image}');"))
            .unwrap_or_default()
    });
    let icons = runtime.config.with_value(|config| config.icons.clone());
    let window_ids = move || {
        state.with(|desktop| {
            desktop
                .windows()
                .iter()
                .map(|window| window.descriptor().app_id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=background_style
            data-gesture=move || {
                runtime.interaction.with(|interaction| {
                    if interaction.resizing.is_some() {
                        "resize"
                    } else if interaction.dragging.is_some() {
                        "move"
                    } else {
                        "idle"
                    }
                })
            }
        >
            <MenuBar />
            <div class="desktop-icon-grid" role="list">
                {icons
                    .into_iter()
                    .map(|icon| view! { <DesktopIconButton icon=icon /> })
                    .collect_view()}
            </div>
            <div class="desktop-window-layer">
                <For each=window_ids key=|app_id| app_id.to_string() let:app_id>
                    <DesktopWindow app_id=app_id />
                </For>
            </div>
        </div>
    }
}

#[component]
fn DesktopIconButton(icon: DesktopIcon) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let glyph = IconName::from_token(&icon.icon);
    let label = icon.label.clone();

    let activate = move |_| match icon.target() {
        Some(IconTarget::Window(app_id)) => {
            runtime.dispatch_action(DesktopAction::ActivateIcon {
                app_id: app_id.clone(),
                viewport: runtime.host.get_value().desktop_viewport(),
            })
        }
        Some(IconTarget::Link { href, target }) => {
            runtime.dispatch_action(DesktopAction::OpenExternalLink {
                href: href.to_string(),
                target,
            })
        }
        None => {}
    };

    view! {
        <button type="button" class="desktop-icon" role="listitem" on:click=activate>
            <span class="desktop-icon-glyph">
                <GlyphIcon icon=glyph size=IconSize::Xl />
            </span>
            <span class="desktop-icon-label">{label}</span>
        </button>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Only the primary button of a mouse, or the primary touch/pen contact, starts a gesture.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
    runtime.capture.update_value(|slot| {
        slot.release();
    });
}

/// Routes document-level pointer events to the gesture that just began, until release.
fn capture_pointer_gesture(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|interaction| interaction.is_idle()) {
        return;
    }

    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let viewport = runtime.host.get_value().desktop_viewport();
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer, viewport });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer, viewport });
        }
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        end_active_pointer_interaction(runtime)
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime)
    });

    runtime.capture.update_value(|slot| {
        slot.acquire(InputCapture::new(vec![on_move, on_up, on_cancel]));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureSlot;

    fn assert_capture_listener<L: CaptureListener>() {}

    #[test]
    fn window_listener_handles_fill_the_capture_slot() {
        assert_capture_listener::<WindowListenerHandle>();
        let slot = CaptureSlot::<WindowListenerHandle>::default();
        assert!(!slot.is_active());
    }
}
