//! Request logging middleware
//!
//! Emits one `REQUEST_HANDLED` line per request once the response is ready.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::{Event, Logger};

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    Logger::info(
        Event::RequestHandled,
        &[
            ("method", &method),
            ("path", &path),
            ("status", response.status().as_str()),
            ("duration_ms", &started.elapsed().as_millis().to_string()),
        ],
    );
    response
}
