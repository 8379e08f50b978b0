pub mod combined;

use anyhow::{Context, Result};
use lightbox::{CombinedClient, CombinedClientBuilder};

/// Upstream settings shared by all commands.
pub struct Upstream {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Upstream {
    /// Build the combined client from command-line settings.
    pub fn client(self) -> Result<CombinedClient> {
        let url = self.url.context(
            "LIGHTBOX_COMBINED_URL environment variable not set. Use --url or set LIGHTBOX_COMBINED_URL",
        )?;

        let mut builder = CombinedClientBuilder::new(url)
            .timeout_secs(self.timeout_secs)
            .max_retries(self.max_retries);

        if let Some(key) = self.api_key.filter(|k| !k.is_empty()) {
            builder = builder.api_key(key);
        }

        builder.build().context("Failed to create LightBox client")
    }
}
