//! Shared contract types between the desktop window runtime and the apps it hosts.
//!
//! Apps never touch window state directly. They receive an [`AppMountContext`] when their window
//! body mounts and talk back to the runtime through [`AppServices`], which turns calls into
//! [`AppCommand`] values routed to the owning window's lifecycle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a window type (one window instance per type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

/// Returns the DOM id an app should give its primary text input so the runtime can focus it.
pub fn window_primary_input_dom_id(app_id: &ApplicationId) -> String {
    format!("window-input-{}", app_id.as_str().replace('.', "-"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Close the hosting window, exactly like its close control.
    CloseWindow,
}

#[derive(Clone, Copy)]
/// Window chrome actions available to an app.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests that the hosting window close.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }
}

#[derive(Clone, Copy)]
/// Services the runtime hands to a mounted app.
pub struct AppServices {
    /// Hosting window controls.
    pub window: WindowService,
}

impl AppServices {
    /// Wraps the runtime's command callback.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self {
            window: WindowService { sender },
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime when a window body mounts.
pub struct AppMountContext {
    /// Window type identifier from the runtime catalog.
    pub app_id: ApplicationId,
    /// Launch params supplied by the desktop configuration.
    pub launch_params: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
