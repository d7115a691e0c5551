use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{form::Visibility, state::AppState};

#[derive(Debug, Clone, Deserialize)]
pub struct App {
    #[serde(rename = "sId")]
    pub s_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub visibility: Visibility,
}

#[derive(Deserialize)]
struct AppsResp {
    apps: Vec<App>,
}

#[derive(Debug)]
pub enum Preload {
    Found(Vec<App>),
    NotFound,
}

/// GET {base}/api/apps/{username}. Only 404 is an expected outcome; every
/// other non-2xx status or undecodable body is an error.
pub async fn preload(
    state: &AppState,
    username: &str,
    cookie: Option<&str>,
) -> anyhow::Result<Preload> {
    let url = state.config.api_segments_url(&["api", "apps", username])?;
    debug!(%url, "preloading apps");

    let mut req = state.http.get(url);
    if let Some(c) = cookie {
        req = req.header(http::header::COOKIE, c);
    }

    let resp = req
        .send()
        .await
        .with_context(|| format!("request apps for {}", username))?;

    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        info!(%username, "apps collection not found");
        return Ok(Preload::NotFound);
    }
    if !status.is_success() {
        anyhow::bail!("apps endpoint returned {} for {}", status, username);
    }

    let body: AppsResp = resp.json().await.context("decode apps")?;
    debug!(%username, count = body.apps.len(), "apps preloaded");

    Ok(Preload::Found(body.apps))
}
