use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::ErrorReport;

/// Logs every request, using the `ErrorReport` a failed handler leaves on its response.
/// In development, server errors also get their detail echoed back in the body.
pub async fn logging_middleware(
    State(config): State<Arc<Config>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        );
        return response;
    };

    if status.is_server_error() {
        error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            detail = %report.detail,
            "Failed to process request"
        );

        if config.is_development() {
            return with_details(status, report);
        }
    } else {
        warn!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            error = %report.message,
            "Rejected request"
        );
    }

    response
}

fn with_details(status: StatusCode, report: ErrorReport) -> Response {
    let mut response = (
        status,
        Json(json!({
            "error": report.message,
            "details": report.detail,
        })),
    )
        .into_response();
    response.extensions_mut().insert(report);
    response
}
