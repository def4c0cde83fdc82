use serde::{Deserialize, Serialize};

/// Kjøreoppsett for rapport-driveren. Alle felt er valgfrie i JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cfg {
    /// true (standard): første feil stopper hele batchen.
    /// false: feilen logges og neste pakke kjøres.
    pub fail_fast: Option<bool>,
    /// Sti til JSON-fil med pakker. Mangler den, brukes standardpakkene.
    pub packages_path: Option<String>,
}

impl Cfg {
    pub fn fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(true)
    }
}
