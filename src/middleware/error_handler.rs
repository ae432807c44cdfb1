use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    http::StatusCode,
    Error, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;
use crate::middleware::request_id::request_id;

/// Middleware that logs failed requests
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Err(err) => tracing::error!("Request error: {:?}", err),
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let request_id = request_id(res.request()).unwrap_or_default();
                        if res.status().is_server_error() {
                            tracing::error!(
                                request_id = %request_id,
                                status = %res.status(),
                                "Request failed: {}",
                                err
                            );
                        } else {
                            tracing::warn!(
                                request_id = %request_id,
                                status = %res.status(),
                                "Request rejected: {}",
                                err
                            );
                        }
                    }
                }
            }

            result
        })
    }
}

/// Turn JSON extractor failures into the application's 400 error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(err.to_string()).into()
}

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message.into(),
        }
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}
