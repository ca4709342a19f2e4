//! External URL host-service contracts.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Where an external link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    /// A new browsing context with no opener or referrer.
    NewTab,
    /// The current browsing context. Used for `mailto:` links.
    SameTab,
}

impl LinkTarget {
    /// `mailto:` links navigate in place; everything else opens a new tab.
    pub fn for_href(href: &str) -> Self {
        let is_mailto = href
            .trim_start()
            .get(..7)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"));
        if is_mailto {
            Self::SameTab
        } else {
            Self::NewTab
        }
    }
}

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for hosts without navigation.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(
        &'a self,
        _url: &'a str,
        _target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}
