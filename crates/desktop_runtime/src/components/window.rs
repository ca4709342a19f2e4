use super::*;
use crate::{
    apps,
    model::{ResizeCorner, WindowState, WindowStatus},
};
use desktop_app_contract::{AppMountContext, AppServices, ApplicationId};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline geometry: percent size, centered, shifted by the drag offset.
fn window_style(state: WindowState) -> String {
    format!(
        "width:{}vw;height:{}vh;transform:translate(-50%,-50%) translate({}px,{}px);",
        state.size.width_percent, state.size.height_percent, state.position.x, state.position.y
    )
}

fn resize_handle_class(corner: ResizeCorner, active: Option<ResizeCorner>) -> String {
    let highlight = if active == Some(corner) { " active" } else { "" };
    format!("window-resize-handle corner-{}{}", corner.token(), highlight)
}

#[component]
pub(super) fn DesktopWindow(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let snapshot = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            runtime.state.with(|desktop| {
                desktop
                    .window(&app_id)
                    .map(|window| (window.state(), window.resize_corner()))
            })
        })
    };
    let title = runtime
        .state
        .with_untracked(|desktop| desktop.window(&app_id).map(|w| w.descriptor().title.clone()))
        .unwrap_or_default();
    let mounted = Signal::derive(move || {
        snapshot
            .get()
            .map(|(state, _)| state.status.is_visible())
            .unwrap_or(false)
    });

    let minimize = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                app_id: app_id.clone(),
            })
        }
    };
    let close = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                app_id: app_id.clone(),
            })
        }
    };
    let toggle_maximize = {
        let app_id = app_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
                viewport: runtime.host.get_value().desktop_viewport(),
            })
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_pointer(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                app_id: app_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
            capture_pointer_gesture(runtime);
        }
    };
    let toggle_from_button = toggle_maximize.clone();
    let toggle_from_titlebar = toggle_maximize;

    view! {
        <Show when=move || mounted.get() fallback=|| ()>
            {
                let app_id = app_id.clone();
                let title = title.clone();
                let minimize = minimize.clone();
                let close = close.clone();
                let begin_move = begin_move.clone();
                let toggle_from_button = toggle_from_button.clone();
                let toggle_from_titlebar = toggle_from_titlebar.clone();
                let state = move || snapshot.get().map(|(state, _)| state);
                let active_corner = move || snapshot.get().and_then(|(_, corner)| corner);
                let maximized = move || {
                    state()
                        .map(|state| state.status == WindowStatus::MaximizedOpen)
                        .unwrap_or(false)
                };

                view! {
                    <section
                        class=move || {
                            let status = state().map(|state| state.status.token()).unwrap_or("closed");
                            format!("desktop-window window-{status}")
                        }
                        style=move || state().map(window_style).unwrap_or_default()
                        role="dialog"
                        aria-label=title.clone()
                        data-app-id=app_id.to_string()
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                toggle_from_titlebar();
                            }
                        >
                            <div class="titlebar-controls">
                                <button
                                    class="titlebar-button close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                >
                                    <GlyphIcon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                                <button
                                    class="titlebar-button minimize"
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                >
                                    <GlyphIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    class="titlebar-button maximize"
                                    aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_from_button();
                                    }
                                >
                                    {move || {
                                        let icon = if maximized() {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        };
                                        view! { <GlyphIcon icon=icon size=IconSize::Xs /> }
                                    }}
                                </button>
                            </div>
                            <span class="titlebar-title">{title.clone()}</span>
                            <span class="titlebar-spacer" aria-hidden="true"></span>
                        </header>
                        <div class="window-body">
                            <WindowBody app_id=app_id.clone() />
                        </div>
                        <Show when=move || !maximized() fallback=|| ()>
                            {
                                let app_id = app_id.clone();
                                ResizeCorner::ALL
                                    .into_iter()
                                    .map(|corner| {
                                        view! {
                                            <WindowResizeHandle
                                                app_id=app_id.clone()
                                                corner=corner
                                                active=Signal::derive(active_corner)
                                            />
                                        }
                                    })
                                    .collect_view()
                            }
                        </Show>
                    </section>
                }
            }
        </Show>
    }
}

#[component]
fn WindowResizeHandle(
    app_id: ApplicationId,
    corner: ResizeCorner,
    active: Signal<Option<ResizeCorner>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app_id: app_id.clone(),
            corner,
            pointer: pointer_from_pointer_event(&ev),
        });
        capture_pointer_gesture(runtime);
    };

    view! {
        <div
            class=move || resize_handle_class(corner, active.get())
            role="separator"
            aria-label=corner.aria_label()
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let command_sender = {
        let app_id = app_id.clone();
        Callback::new(move |command| {
            runtime.dispatch_action(DesktopAction::HandleAppCommand {
                app_id: app_id.clone(),
                command,
            });
        })
    };
    let launch_params = runtime
        .config
        .with_value(|config| config.launch_params_for(&app_id));
    let contents = match apps::app_module(&app_id) {
        Some(module) => module.mount(AppMountContext {
            app_id,
            launch_params,
            services: AppServices::new(command_sender),
        }),
        None => {
            logging::warn!("no app registered for window `{app_id}`");
            view! { <p class="window-body-empty">"Nothing to show."</p> }.into_view()
        }
    };

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowPosition, WindowSize};

    #[test]
    fn style_centers_then_applies_drag_offset() {
        let style = window_style(WindowState {
            status: WindowStatus::Open,
            size: WindowSize::new(50.0, 62.5),
            previous_size: None,
            position: WindowPosition { x: -12.0, y: 40.0 },
        });
        assert_eq!(
            style,
            "width:50vw;height:62.5vh;transform:translate(-50%,-50%) translate(-12px,40px);"
        );
    }

    #[test]
    fn only_the_active_corner_is_highlighted() {
        assert_eq!(
            resize_handle_class(ResizeCorner::SouthEast, Some(ResizeCorner::SouthEast)),
            "window-resize-handle corner-se active"
        );
        assert_eq!(
            resize_handle_class(ResizeCorner::NorthWest, Some(ResizeCorner::SouthEast)),
            "window-resize-handle corner-nw"
        );
    }
}
