use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect},
};
use tracing::{debug, error, info};

use crate::{
    apps::{self, Preload},
    form::{FormState, Prefill},
    guard::{self, Denied},
    session,
    state::AppState,
    views,
};

pub async fn home() -> impl IntoResponse {
    Html(views::home_page())
}

pub async fn new_app(
    State(state): State<AppState>,
    Path(user): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());

    let resolved = session::resolve(&state, cookie).await;
    let session = match guard::authorize(resolved, &user) {
        Ok(s) => s,
        Err(denied) => {
            let reason = match denied {
                Denied::NoSession => "no session",
                Denied::WrongUser => "user mismatch",
            };
            info!(%user, reason, "redirecting to home");
            return Redirect::temporary("/").into_response();
        }
    };

    let apps = match apps::preload(&state, &session.username, cookie).await {
        Ok(Preload::Found(a)) => a,
        Ok(Preload::NotFound) => {
            return (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
        }
        Err(e) => {
            error!(user = %session.username, error = %format!("{e:#}"), "preload apps failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error_page()))
                .into_response();
        }
    };

    // Parsed only once the guard has passed; a bad query just means no pre-fill.
    let prefill = match Query::<Prefill>::try_from_uri(&uri) {
        Ok(Query(p)) => p,
        Err(e) => {
            debug!(error = %e, "ignoring unparsable pre-fill query");
            Prefill::default()
        }
    };

    let form = FormState::from(prefill);
    Html(views::new_app_page(&session.username, &form, &apps)).into_response()
}
