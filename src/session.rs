use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

#[derive(Deserialize)]
struct SessionResp {
    user: Option<SessionUser>,
}

#[derive(Deserialize)]
struct SessionUser {
    username: Option<String>,
}

/// Resolve the caller's session by asking the auth provider with the
/// caller's own cookies. Every failure counts as "no session".
pub async fn resolve(state: &AppState, cookie: Option<&str>) -> Option<Session> {
    match fetch(state, cookie).await {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "session lookup failed");
            None
        }
    }
}

async fn fetch(state: &AppState, cookie: Option<&str>) -> anyhow::Result<Option<Session>> {
    let url = state.config.api_url("/api/auth/session");
    debug!(%url, has_cookie = cookie.is_some(), "resolving session");

    let mut req = state.http.get(&url);
    if let Some(c) = cookie {
        req = req.header(http::header::COOKIE, c);
    }

    let resp = req.send().await.context("request session")?;
    if !resp.status().is_success() {
        anyhow::bail!("session endpoint returned {}", resp.status());
    }

    let body: SessionResp = resp.json().await.context("decode session")?;

    Ok(body
        .user
        .and_then(|u| u.username)
        .filter(|u| !u.is_empty())
        .map(|username| Session { username }))
}
