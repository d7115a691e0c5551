use anyhow::Context;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen: SocketAddr,
    /// Origin of the backend API and the session provider, without trailing slash.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen = std::env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(&listen, &base_url)
    }

    pub fn new(listen: &str, base_url: &str) -> anyhow::Result<Self> {
        let listen: SocketAddr = listen
            .parse()
            .with_context(|| format!("parse LISTEN: {listen}"))?;

        let url = reqwest::Url::parse(base_url).with_context(|| format!("parse BASE_URL: {base_url}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("BASE_URL must be http(s): {}", base_url);
        }

        Ok(Self {
            listen,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Appends each segment percent-encoded, so `/`, `?` or `#` inside one
    /// cannot change the target.
    pub fn api_segments_url(&self, segments: &[&str]) -> anyhow::Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("parse base url: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("base url cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
