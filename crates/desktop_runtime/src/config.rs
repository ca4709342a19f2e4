//! Desktop configuration: background, default label, and the icon grid.

use std::collections::BTreeMap;

use desktop_app_contract::ApplicationId;
use platform_host::LinkTarget;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{catalog::DESKTOP_CONFIG_JSON, model::WindowDescriptor};

const DEFAULT_LABEL: &str = "Finder";

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors in the desktop configuration.
pub enum ConfigError {
    /// The configuration payload could not be decoded.
    #[error("malformed desktop config: {0}")]
    Parse(String),
    /// An icon must carry exactly one of `href` or `window`.
    #[error("icon `{0}` must declare exactly one of `href` or `window`")]
    AmbiguousIcon(String),
    /// An icon targets a window type missing from the catalog.
    #[error("icon `{label}` targets unknown window type `{app_id}`")]
    UnknownWindow {
        /// Icon label.
        label: String,
        /// Missing window type.
        app_id: ApplicationId,
    },
}

/// One clickable desktop icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub window: Option<ApplicationId>,
}

/// What activating an icon does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTarget<'a> {
    Window(&'a ApplicationId),
    Link { href: &'a str, target: LinkTarget },
}

impl DesktopIcon {
    pub fn target(&self) -> Option<IconTarget<'_>> {
        match (&self.window, &self.href) {
            (Some(app_id), None) => Some(IconTarget::Window(app_id)),
            (None, Some(href)) => Some(IconTarget::Link {
                href,
                target: LinkTarget::for_href(href),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Menu bar label when no window is visible.
    #[serde(default = "default_label")]
    pub default_label: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub icons: Vec<DesktopIcon>,
    /// Launch parameters handed to each window type's app when its body mounts.
    #[serde(default)]
    pub launch_params: BTreeMap<ApplicationId, Value>,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            default_label: default_label(),
            background_image: None,
            icons: Vec::new(),
            launch_params: BTreeMap::new(),
        }
    }
}

impl DesktopConfig {
    /// Parses a configuration payload and checks each icon's shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or an icon with both or neither target.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        if let Some(icon) = config.icons.iter().find(|icon| icon.target().is_none()) {
            return Err(ConfigError::AmbiguousIcon(icon.label.clone()));
        }
        Ok(config)
    }

    /// Configuration compiled from `desktop.toml`.
    ///
    /// # Errors
    ///
    /// See [`DesktopConfig::from_json`].
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(DESKTOP_CONFIG_JSON)
    }

    /// Checks that every window icon names a cataloged window type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownWindow`] for the first dangling icon.
    pub fn validate_against(&self, catalog: &[WindowDescriptor]) -> Result<(), ConfigError> {
        for icon in &self.icons {
            if let Some(app_id) = &icon.window {
                if !catalog.iter().any(|d| &d.app_id == app_id) {
                    return Err(ConfigError::UnknownWindow {
                        label: icon.label.clone(),
                        app_id: app_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn with_launch_params(mut self, app_id: ApplicationId, params: Value) -> Self {
        self.launch_params.insert(app_id, params);
        self
    }

    pub fn launch_params_for(&self, app_id: &ApplicationId) -> Value {
        self.launch_params
            .get(app_id)
            .cloned()
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::catalog::bundled_window_catalog;

    #[test]
    fn bundled_config_parses_and_matches_catalog() {
        let config = DesktopConfig::bundled().expect("bundled config");
        assert_eq!(config.default_label, "Finder");
        assert_eq!(config.icons.len(), 4);
        let catalog = bundled_window_catalog().expect("bundled catalog");
        assert_eq!(config.validate_against(&catalog), Ok(()));
    }

    #[test]
    fn icon_targets_distinguish_windows_and_links() {
        let config = DesktopConfig::bundled().expect("bundled config");
        let targets: Vec<_> = config.icons.iter().filter_map(DesktopIcon::target).collect();
        assert!(matches!(targets[0], IconTarget::Window(id) if id.as_str() == "system.terminal"));
        assert!(matches!(
            targets[2],
            IconTarget::Link {
                target: LinkTarget::NewTab,
                ..
            }
        ));
        assert!(matches!(
            targets[3],
            IconTarget::Link {
                target: LinkTarget::SameTab,
                ..
            }
        ));
    }

    #[test]
    fn icon_with_both_targets_is_rejected() {
        let raw = json!({
            "icons": [{
                "icon": "x",
                "label": "Both",
                "href": "https://example.com",
                "window": "system.terminal"
            }]
        })
        .to_string();
        assert_eq!(
            DesktopConfig::from_json(&raw),
            Err(ConfigError::AmbiguousIcon("Both".to_string()))
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = DesktopConfig::from_json("{}").expect("empty config");
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn dangling_window_icon_is_reported() {
        let raw = json!({
            "icons": [{ "icon": "x", "label": "Ghost", "window": "system.ghost" }]
        })
        .to_string();
        let config = DesktopConfig::from_json(&raw).expect("shape is valid");
        let catalog = bundled_window_catalog().expect("bundled catalog");
        assert_eq!(
            config.validate_against(&catalog),
            Err(ConfigError::UnknownWindow {
                label: "Ghost".to_string(),
                app_id: ApplicationId::trusted("system.ghost"),
            })
        );
    }

    #[test]
    fn launch_params_default_to_null() {
        let app_id = ApplicationId::trusted("system.document-viewer");
        let config = DesktopConfig::default();
        assert_eq!(config.launch_params_for(&app_id), Value::Null);
        let config = config.with_launch_params(app_id.clone(), json!({ "content": "# Hi" }));
        assert_eq!(config.launch_params_for(&app_id), json!({ "content": "# Hi" }));
    }
}
