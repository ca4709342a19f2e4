//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, ApplicationId};
use platform_host::LinkTarget;
use thiserror::Error;

use crate::{
    desktop::DesktopController,
    lifecycle::WindowLifecycle,
    model::{InteractionState, PointerPosition, ResizeCorner, Viewport},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate the [`DesktopController`].
pub enum DesktopAction {
    /// A desktop icon bound to a window type was clicked.
    ActivateIcon {
        /// Window type the icon opens.
        app_id: ApplicationId,
        /// Current viewport, used to pick the default size.
        viewport: Viewport,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        app_id: ApplicationId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: ApplicationId,
    },
    /// Maximize an open window or restore a maximized one.
    ToggleMaximize {
        /// Window to toggle.
        app_id: ApplicationId,
        /// Current viewport, used to pick the maximized size.
        viewport: Viewport,
    },
    /// Begin resizing a window from a corner handle.
    BeginResize {
        /// Window being resized.
        app_id: ApplicationId,
        /// Corner the gesture is anchored to.
        corner: ResizeCorner,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update the in-progress resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport.
        viewport: Viewport,
    },
    /// End the in-progress resize.
    EndResize,
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        app_id: ApplicationId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the in-progress drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport.
        viewport: Viewport,
    },
    /// End the in-progress drag.
    EndMove,
    /// The browser viewport changed size.
    ViewportChanged {
        /// New viewport.
        viewport: Viewport,
    },
    /// A desktop icon bound to a link was clicked.
    OpenExternalLink {
        /// Link destination.
        href: String,
        /// Where the icon's link opens.
        target: LinkTarget,
    },
    /// A command sent by the app mounted in a window.
    HandleAppCommand {
        /// Window whose app sent the command.
        app_id: ApplicationId,
        /// The command.
        command: AppCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Move focus into the window's primary input.
    FocusWindowInput(ApplicationId),
    /// Navigate to a URL outside the desktop.
    OpenExternalUrl {
        /// Destination.
        url: String,
        /// Where to open it.
        target: LinkTarget,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference something the desktop does not have.
pub enum ReducerError {
    /// The action named a window type that is not in the catalog.
    #[error("unknown window type `{0}`")]
    UnknownWindow(ApplicationId),
}

/// Applies a [`DesktopAction`] to the desktop and collects resulting side effects.
///
/// Transitions that do not apply to a window's current status are absorbed without error.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownWindow`] when an action references a window type that is not
/// present.
pub fn reduce_desktop(
    desktop: &mut DesktopController,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateIcon { app_id, viewport } => {
            let opened = desktop
                .on_icon_activate(&app_id, viewport)
                .ok_or_else(|| ReducerError::UnknownWindow(app_id.clone()))?;
            if opened {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::CloseWindow { app_id } => {
            find_window_mut(desktop, &app_id)?.close();
            forget_gestures(interaction, &app_id);
        }
        DesktopAction::MinimizeWindow { app_id } => {
            find_window_mut(desktop, &app_id)?.minimize();
            forget_gestures(interaction, &app_id);
        }
        DesktopAction::ToggleMaximize { app_id, viewport } => {
            let window = find_window_mut(desktop, &app_id)?;
            if window.toggle_maximize(viewport) {
                forget_gestures(interaction, &app_id);
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::BeginResize {
            app_id,
            corner,
            pointer,
        } => {
            find_window_mut(desktop, &app_id)?;
            end_all_gestures(desktop, interaction);
            if find_window_mut(desktop, &app_id)?.begin_resize(corner, pointer) {
                interaction.resizing = Some(app_id);
            }
        }
        DesktopAction::UpdateResize { pointer, viewport } => {
            if let Some(app_id) = interaction.resizing.clone() {
                find_window_mut(desktop, &app_id)?.update_resize(pointer, viewport);
            }
        }
        DesktopAction::EndResize => {
            if let Some(app_id) = interaction.resizing.take() {
                find_window_mut(desktop, &app_id)?.end_resize();
            }
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            find_window_mut(desktop, &app_id)?;
            end_all_gestures(desktop, interaction);
            if find_window_mut(desktop, &app_id)?.begin_drag(pointer) {
                interaction.dragging = Some(app_id);
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(app_id) = interaction.dragging.clone() {
                find_window_mut(desktop, &app_id)?.update_drag(pointer, viewport);
            }
        }
        DesktopAction::EndMove => {
            if let Some(app_id) = interaction.dragging.take() {
                find_window_mut(desktop, &app_id)?.end_drag();
            }
        }
        DesktopAction::ViewportChanged { viewport } => {
            desktop.refit_all(viewport);
        }
        DesktopAction::OpenExternalLink { href, target } => {
            effects.push(RuntimeEffect::OpenExternalUrl { url: href, target });
        }
        DesktopAction::HandleAppCommand { app_id, command } => match command {
            AppCommand::CloseWindow => {
                return reduce_desktop(desktop, interaction, DesktopAction::CloseWindow { app_id });
            }
        },
    }

    Ok(effects)
}

fn find_window_mut<'a>(
    desktop: &'a mut DesktopController,
    app_id: &ApplicationId,
) -> Result<&'a mut WindowLifecycle, ReducerError> {
    desktop
        .window_mut(app_id)
        .ok_or_else(|| ReducerError::UnknownWindow(app_id.clone()))
}

/// Drops gesture ownership held by `app_id`. Its lifecycle already ended the gestures.
fn forget_gestures(interaction: &mut InteractionState, app_id: &ApplicationId) {
    if interaction.resizing.as_ref() == Some(app_id) {
        interaction.resizing = None;
    }
    if interaction.dragging.as_ref() == Some(app_id) {
        interaction.dragging = None;
    }
}

/// Ends whatever gesture is in progress so a new one starts from a clean anchor.
fn end_all_gestures(desktop: &mut DesktopController, interaction: &mut InteractionState) {
    if let Some(window) = interaction
        .resizing
        .take()
        .and_then(|app_id| desktop.window_mut(&app_id))
    {
        window.end_resize();
    }
    if let Some(window) = interaction
        .dragging
        .take()
        .and_then(|app_id| desktop.window_mut(&app_id))
    {
        window.end_drag();
    }
}
