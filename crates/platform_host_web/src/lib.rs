//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;

pub use adapters::{
    external_url_service, host_strategy_name, selected_host_strategy, ExternalUrlServiceAdapter,
    HostStrategy,
};
pub use external_url::WebExternalUrlService;
