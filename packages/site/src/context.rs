use crate::config::SiteConfig;
use crate::http::{AssetProbe, HttpClient};
use crate::storage::PreferenceStore;
use crate::types::SystemSignals;
use std::rc::Rc;

/// Everything the site logic needs from its environment.
///
/// Cloning is cheap; the services are shared behind `Rc`.
#[derive(Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub signals: SystemSignals,
    store: Rc<dyn PreferenceStore>,
    http: Rc<dyn HttpClient>,
    probe: Option<Rc<dyn AssetProbe>>,
}

impl Site {
    pub fn new(
        config: SiteConfig,
        signals: SystemSignals,
        store: Rc<dyn PreferenceStore>,
        http: Rc<dyn HttpClient>,
    ) -> Self {
        Self {
            config,
            signals,
            store,
            http,
            probe: None,
        }
    }

    /// Verify logo assets load before swapping them in.
    pub fn with_probe(mut self, probe: Rc<dyn AssetProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn http(&self) -> &dyn HttpClient {
        self.http.as_ref()
    }

    pub fn probe(&self) -> Option<&dyn AssetProbe> {
        self.probe.as_deref()
    }
}
