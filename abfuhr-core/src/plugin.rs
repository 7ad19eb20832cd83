//! Municipality registry and the port bundle for one upstream source.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::MunicipalityId;
use crate::ports::{ExtractPort, PagePort};

/// Static mapping from municipality display name to upstream id.
#[derive(Debug, Clone, Default)]
pub struct MunicipalityRegistry {
    entries: BTreeMap<String, MunicipalityId>,
}

impl MunicipalityRegistry {
    /// Build a registry from `(display name, upstream id)` pairs.
    #[must_use]
    pub fn new<I, N, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, id)| (name.into(), MunicipalityId(id.into())))
            .collect();
        Self { entries }
    }

    /// Exact, case-sensitive lookup of a display name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&MunicipalityId> {
        self.entries.get(name)
    }

    /// All display names, sorted ascending.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Collection of ports implementing one upstream source.
pub struct SourcePlugin {
    /// Municipalities served by this source.
    pub registry: MunicipalityRegistry,
    /// Implementation for downloading pages.
    pub page_port: Arc<dyn PagePort>,
    /// Implementation for parsing downloaded pages.
    pub extract_port: Arc<dyn ExtractPort>,
}
