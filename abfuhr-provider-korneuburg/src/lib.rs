//! Provider implementation for the Korneuburg waste association calendar page.

use std::sync::Arc;

use abfuhr_core::plugin::SourcePlugin;
use reqwest::Client;

/// Year-less date resolution.
pub mod dates;
/// Page parsing for the `lay_1` layout.
pub mod extract;
/// Page download.
pub mod fetch;
/// Category label mapping.
pub mod fraction;
/// Static municipality table.
pub mod municipalities;

pub use extract::KorneuburgExtractor;
pub use fetch::{BASE_URL, KorneuburgPagePort};

/// Build the plugin bundle for the Korneuburg provider.
#[must_use]
pub fn plugin(client: Client, base_url: impl Into<String>) -> SourcePlugin {
    SourcePlugin {
        registry: municipalities::registry(),
        page_port: Arc::new(KorneuburgPagePort::new(client, base_url)),
        extract_port: Arc::new(KorneuburgExtractor),
    }
}
