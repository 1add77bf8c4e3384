//! Route configuration for the console API server.

mod internal;
mod v1;

use crate::{error::ApiError, state::AppState};
use axum::{
    error_handling::HandleErrorLayer,
    extract::Request,
    response::{IntoResponse, Response},
    BoxError, Router,
};
use console_common_log::spans::request_span;
use std::any::Any;
use std::time::Duration;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    let common_middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            request_span(req.method().as_str(), req.uri().path())
        }))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(HandleErrorLayer::new(move |err: BoxError| async move {
            middleware_error(err, request_timeout)
        }))
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .nest("/api/v1", v1::router())
        .nest("/internal", internal::router())
        .fallback(fallback_handler)
        .layer(common_middleware)
        .with_state(state)
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Route".into())
}

fn middleware_error(err: BoxError, request_timeout: Duration) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::RequestTimeout(request_timeout)
    } else {
        ApiError::Internal(anyhow::anyhow!("unhandled middleware error: {}", err))
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_panic_becomes_json_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "internal_error");
    }

    #[test]
    fn test_elapsed_maps_to_request_timeout() {
        let err = middleware_error(Box::new(Elapsed::new()), Duration::from_secs(30));
        assert!(matches!(err, ApiError::RequestTimeout(d) if d == Duration::from_secs(30)));
        assert_eq!(err.status_code(), StatusCode::REQUEST_TIMEOUT);
    }
}
