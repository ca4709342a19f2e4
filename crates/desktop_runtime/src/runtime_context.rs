//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the pointer
//! capture slot, and host bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use crate::{
    capture::CaptureSlot,
    catalog::bundled_window_catalog,
    config::DesktopConfig,
    desktop::DesktopController,
    effect_executor,
    host::DesktopHostContext,
    model::InteractionState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Desktop icons, background, and per-window launch parameters.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopController>,
    /// Reactive drag/resize ownership signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Document-level listeners of the gesture in progress.
    pub capture: StoredValue<CaptureSlot<WindowListenerHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Bundled desktop configuration, or the built-in default when it does not parse.
pub fn load_desktop_config() -> DesktopConfig {
    DesktopConfig::bundled().unwrap_or_else(|err| {
        logging::warn!("desktop config rejected, using defaults: {err}");
        DesktopConfig::default()
    })
}

fn load_desktop(config: &DesktopConfig) -> DesktopController {
    let catalog = match bundled_window_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("window catalog rejected: {err}");
            return DesktopController::empty(config.default_label.clone());
        }
    };
    if let Err(err) = config.validate_against(&catalog) {
        logging::warn!("desktop config does not match the window catalog: {err}");
    }
    DesktopController::new(catalog, config.default_label.clone()).unwrap_or_else(|err| {
        logging::warn!("window catalog rejected: {err}");
        DesktopController::empty(config.default_label.clone())
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Desktop configuration. Defaults to the bundled one.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Host bundle. Defaults to the compile-time selected browser host.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(load_desktop_config);
    let host = host.unwrap_or_default();
    logging::log!("desktop host strategy: {}", host.host_strategy_name());

    let state = create_rw_signal(load_desktop(&config));
    let host = store_value(host);
    let config = store_value(config);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let capture = store_value(CaptureSlot::<WindowListenerHandle>::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        state,
        interaction,
        effects,
        capture,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);
    on_cleanup(move || {
        capture.update_value(|slot| {
            slot.release();
        });
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
