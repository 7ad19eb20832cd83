//! Page download for the Korneuburg waste association.

use abfuhr_core::{
    model::MunicipalityId,
    ports::{FetchError, PagePort},
};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT_LANGUAGE, COOKIE, USER_AGENT},
};
use tracing::debug;

/// Public address of the association's collection calendar.
pub const BASE_URL: &str = "https://korneuburg.umweltverbaende.at/";

// The page only renders localized entries for browser-like clients.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";
const LANGUAGE: &str = "de-DE,de;q=0.9,en;q=0.8";

/// Downloads one calendar page per municipality.
pub struct KorneuburgPagePort {
    client: Client,
    base_url: String,
}

impl KorneuburgPagePort {
    /// Create a new page port bound to the given HTTP client and base URL.
    ///
    /// Timeouts are taken from the client.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PagePort for KorneuburgPagePort {
    async fn fetch(&self, id: &MunicipalityId) -> Result<String, FetchError> {
        debug!(%id, url = %self.base_url, "requesting calendar page");

        // The id is sent both as query parameter and as the cookie the site
        // uses to remember the selected municipality.
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("gem_nr", id.0.as_str())])
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT_LANGUAGE, LANGUAGE)
            .header(COOKIE, format!("gemeindenummer={id}"))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}
