use actix_web::{
    body::EitherBody,
    dev::{forward_ready, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

use crate::utils::token_utils::verify_jwt;

/// Requires a valid bearer token and makes the acting user's claims
/// available to handlers via `ReqData<Claims>`. Token checks are
/// stateless, so rejected requests never touch the database.
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware { service: Arc::new(service) }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: Arc<S>,
}

impl<S, B> actix_web::dev::Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let secret = match req.app_data::<Data<Vec<u8>>>() {
                Some(s) => s.clone(),
                None => {
                    let err = actix_web::error::ErrorInternalServerError("Missing JWT secret");
                    return Ok(req.into_response(err.error_response().map_into_right_body()));
                }
            };

            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("");

            let token_value = auth_header.strip_prefix("Bearer ").unwrap_or("");

            let claims = match verify_jwt(token_value, &secret) {
                Some(c) => c,
                None => {
                    let err = actix_web::error::ErrorUnauthorized("Invalid or missing token");
                    return Ok(req.into_response(err.error_response().map_into_right_body()));
                }
            };

            // Attach claims to request extensions for handlers
            req.extensions_mut().insert(claims);

            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}
