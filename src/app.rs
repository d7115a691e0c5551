use axum::{extract::MatchedPath, routing::get, Router};
use http::{header::HeaderName, Request};
use std::time::Duration;
use tower_http::{
    classify::ServerErrorsFailureClass,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer, RequestId},
    trace::{OnFailure, OnResponse, TraceLayer},
};
use tracing::{info_span, Span};

use crate::handlers::ui;
use crate::state::AppState;

#[derive(Clone)]
struct LogOnResponse;

impl<B> OnResponse<B> for LogOnResponse {
    fn on_response(self, response: &http::Response<B>, latency: Duration, span: &Span) {
        let rid = response
            .extensions()
            .get::<RequestId>()
            .and_then(|v| v.header_value().to_str().ok())
            .unwrap_or("-");

        // guard redirects carry their target
        let location = response
            .headers()
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info!(
            parent: span,
            request_id = %rid,
            status = %response.status().as_u16(),
            location = %location,
            latency_ms = %latency.as_millis(),
        );
    }
}

#[derive(Clone)]
struct LogOnFailure;

impl OnFailure<ServerErrorsFailureClass> for LogOnFailure {
    fn on_failure(
        &mut self,
        failure: ServerErrorsFailureClass,
        latency: Duration,
        span: &Span,
    ) {
        tracing::warn!(
            parent: span,
            failure = %failure,
            latency_ms = %latency.as_millis(),
        );
    }
}

pub fn router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/", get(ui::home))
        .route("/{user}/apps/new", get(ui::new_app))
        // request id is generated here and echoed back in the response
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid))
        // one access log line per request
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    let route = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or("-");
                    info_span!(
                        "http.request",
                        method = %req.method(),
                        route = %route,
                        path = %req.uri().path(),
                    )
                })
                .on_response(LogOnResponse)
                .on_failure(LogOnFailure),
        )
        .with_state(state)
}
