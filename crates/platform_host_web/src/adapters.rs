use platform_host::{
    ExternalUrlFuture, ExternalUrlService, LinkTarget, NoopExternalUrlService,
};

use crate::WebExternalUrlService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// No-op adapters for builds without a browser (tests, prerendering).
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser-backed external URL opening.
    Browser(WebExternalUrlService),
    /// No-op fallback.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url, target),
            Self::Headless(service) => service.open_url(url, target),
        }
    }
}

/// Builds the external URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Headless => ExternalUrlServiceAdapter::Headless(NoopExternalUrlService),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strategy_name_matches_selection() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::Headless => "headless",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn factory_follows_strategy() {
        let adapter = external_url_service();
        match selected_host_strategy() {
            HostStrategy::Browser => {
                assert!(matches!(adapter, ExternalUrlServiceAdapter::Browser(_)))
            }
            HostStrategy::Headless => {
                assert!(matches!(adapter, ExternalUrlServiceAdapter::Headless(_)))
            }
        }
    }
}
