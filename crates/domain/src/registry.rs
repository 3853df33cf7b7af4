//! Upstream endpoint registry.
//!
//! Maps every [`ProvidesMode`] to the URL of the matching Quad9 DoH service.
//! The table is built once on first use and never mutated afterwards.

use crate::errors::DomainError;
use crate::provides::ProvidesMode;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Quad9 upstreams, one per provides mode.
pub static QUAD9_UPSTREAMS: LazyLock<Arc<EndpointRegistry>> = LazyLock::new(|| {
    Arc::new(EndpointRegistry::from_entries([
        (ProvidesMode::Default, "https://9.9.9.9/dns-query"),
        (ProvidesMode::Secured, "https://dns9.quad9.net/dns-query"),
        (ProvidesMode::Unsecured, "https://dns10.quad9.net/dns-query"),
    ]))
});

#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: HashMap<ProvidesMode, Arc<str>>,
}

impl EndpointRegistry {
    pub fn from_entries<I, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProvidesMode, U)>,
        U: Into<Arc<str>>,
    {
        Self {
            endpoints: entries
                .into_iter()
                .map(|(mode, url)| (mode, url.into()))
                .collect(),
        }
    }

    pub fn lookup(&self, mode: ProvidesMode) -> Option<&str> {
        self.endpoints.get(&mode).map(|url| &**url)
    }

    /// Like [`lookup`](Self::lookup) but reports a missing mode as a
    /// configuration error.
    pub fn resolve(&self, mode: ProvidesMode) -> Result<&str, DomainError> {
        self.lookup(mode)
            .ok_or_else(|| DomainError::UnsupportedProvides(mode.to_string()))
    }

    pub fn contains(&self, mode: ProvidesMode) -> bool {
        self.endpoints.contains_key(&mode)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
