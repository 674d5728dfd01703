use crate::{error, StateTrait};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use headers::{authorization::Basic, Authorization, HeaderMapExt};
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use subtle::ConstantTimeEq;
use tower::{Layer, Service};

/// Gate for the admin routes. Validates the HTTP Basic password on the
/// server, before the handler runs; any username is accepted.
#[derive(Debug, Clone)]
pub struct AdminAuthLayer<ST> {
    state: ST,
}

impl<ST> AdminAuthLayer<ST> {
    pub fn new(state: ST) -> Self {
        Self { state }
    }
}

impl<S, ST> Layer<S> for AdminAuthLayer<ST>
where
    ST: Clone,
{
    type Service = AdminAuth<S, ST>;

    fn layer(&self, inner: S) -> Self::Service {
        AdminAuth::new(self.state.clone(), inner)
    }
}

#[derive(Debug, Clone)]
pub struct AdminAuth<S, ST> {
    state: ST,
    inner: S,
}

impl<S, ST> AdminAuth<S, ST> {
    fn new(state: ST, inner: S) -> Self {
        AdminAuth { state, inner }
    }
}

impl<S, B, ST> Service<Request<B>> for AdminAuth<S, ST>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Send + 'static,
    B: Send + 'static,
    ST: StateTrait,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(header) = req.headers().typed_get::<Authorization<Basic>>() else {
            return Box::pin(async { Ok(error::MISSING_CREDENTIALS.into_response()) });
        };

        // constant-time comparison
        let password_matches: bool = header
            .password()
            .as_bytes()
            .ct_eq(self.state.admin_password().as_bytes())
            .into();

        if !password_matches {
            warn!("rejected admin credentials for user {:?}", header.username());
            return Box::pin(async { Ok(error::WRONG_CREDENTIALS.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
