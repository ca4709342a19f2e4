//! Window type catalog compiled from each app's `window.manifest.toml`.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{SizeBounds, ViewportClass, WindowDescriptor};

include!(concat!(env!("OUT_DIR"), "/catalog_generated.rs"));

#[derive(Debug, Error, Clone, PartialEq)]
/// Configuration errors found while building the window catalog.
pub enum CatalogError {
    /// Two descriptors share a window type identifier.
    #[error("duplicate window type `{0}`")]
    DuplicateWindow(String),
    /// A descriptor's size table violates its own bounds.
    #[error("window type `{app_id}` has invalid bounds: {reason}")]
    InvalidBounds {
        /// Offending window type.
        app_id: String,
        /// What was wrong.
        reason: String,
    },
    /// The catalog payload could not be decoded.
    #[error("malformed window catalog: {0}")]
    Parse(String),
}

/// Decodes and validates a catalog payload, preserving declaration order.
///
/// # Errors
///
/// Returns [`CatalogError`] when the JSON is malformed, an identifier repeats, or a size table
/// falls outside its declared bounds.
pub fn parse_window_catalog(json: &str) -> Result<Vec<WindowDescriptor>, CatalogError> {
    let descriptors: Vec<WindowDescriptor> =
        serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;
    validate_catalog(&descriptors)?;
    Ok(descriptors)
}

/// Catalog bundled at build time.
///
/// # Errors
///
/// See [`parse_window_catalog`].
pub fn bundled_window_catalog() -> Result<Vec<WindowDescriptor>, CatalogError> {
    parse_window_catalog(WINDOW_CATALOG_JSON)
}

/// Checks identifier uniqueness and every descriptor's size table.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_catalog(descriptors: &[WindowDescriptor]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for descriptor in descriptors {
        if !seen.insert(descriptor.app_id.as_str()) {
            return Err(CatalogError::DuplicateWindow(
                descriptor.app_id.to_string(),
            ));
        }
        validate_descriptor(descriptor)?;
    }
    Ok(())
}

/// Checks that default and maximized sizes sit inside the bounds for both viewport classes.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidBounds`] describing the first violation.
pub fn validate_descriptor(descriptor: &WindowDescriptor) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBounds {
        app_id: descriptor.app_id.to_string(),
        reason,
    };
    let bounds: SizeBounds = descriptor.bounds;

    if bounds.max.normal.width_percent > bounds.max.narrow.width_percent {
        return Err(invalid(
            "normal max width exceeds narrow max width".to_string(),
        ));
    }
    for class in [ViewportClass::Normal, ViewportClass::Narrow] {
        let max = bounds.max.for_class(class);
        if bounds.min.width_percent > max.width_percent
            || bounds.min.height_percent > max.height_percent
        {
            return Err(invalid(format!("min exceeds max for {class:?} viewports")));
        }
        let default = descriptor.default_size.for_class(class);
        if !bounds.contains(default, class) {
            return Err(invalid(format!(
                "default size {default:?} outside bounds for {class:?} viewports"
            )));
        }
        let maximized = descriptor.maximized_size.for_class(class);
        if !bounds.contains(maximized, class) {
            return Err(invalid(format!(
                "maximized size {maximized:?} outside bounds for {class:?} viewports"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowSize;

    #[test]
    fn bundled_catalog_lists_terminal_before_document_viewer() {
        let catalog = bundled_window_catalog().expect("bundled catalog");
        let ids: Vec<&str> = catalog.iter().map(|d| d.app_id.as_str()).collect();
        assert_eq!(ids, vec!["system.terminal", "system.document-viewer"]);
    }

    #[test]
    fn bundled_catalog_keeps_terminal_size_table() {
        let catalog = bundled_window_catalog().expect("bundled catalog");
        let terminal = &catalog[0];
        assert_eq!(terminal.label, "Terminal");
        assert_eq!(terminal.default_size.normal, WindowSize::new(50.0, 50.0));
        assert_eq!(terminal.bounds.max.narrow, WindowSize::new(100.0, 80.0));
    }

    #[test]
    fn duplicate_window_types_are_rejected() {
        let mut catalog = bundled_window_catalog().expect("bundled catalog");
        catalog.push(catalog[0].clone());
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateWindow("system.terminal".to_string()))
        );
    }

    #[test]
    fn default_size_outside_bounds_is_rejected() {
        let mut descriptor = bundled_window_catalog().expect("bundled catalog")[0].clone();
        descriptor.default_size.normal = WindowSize::new(90.0, 50.0);
        assert!(matches!(
            validate_descriptor(&descriptor),
            Err(CatalogError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_window_catalog("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
