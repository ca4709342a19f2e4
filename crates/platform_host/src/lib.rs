//! Typed host-service contracts used by the desktop runtime and implemented by browser adapters.
//!
//! Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, LinkTarget, NoopExternalUrlService,
};
