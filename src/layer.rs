use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::{Request, Response};
use tower::{Layer, Service};

use crate::config::Config;
use crate::filter::{AuthRelay, Reconciliation};

/// Tower layer that installs the credential-reconciliation filter in front
/// of an inner service.
///
/// The layer holds the immutable filter; every wrapped service shares the
/// same configuration and log attribution. Forwarded requests reach the
/// inner service mutated in place; redirect outcomes are answered directly
/// and the inner service is never called for them.
///
/// # Examples
///
/// ```
/// use auth_relay::{AuthRelayLayer, Config};
/// use tower::ServiceBuilder;
///
/// # fn wrap<S>(inner: S) -> impl Sized where S: Clone {
/// ServiceBuilder::new()
///     .layer(AuthRelayLayer::new(Config::default()))
///     .service(inner)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AuthRelayLayer {
    relay: AuthRelay,
}

impl AuthRelayLayer {
    /// Creates a layer with the default instance name.
    pub fn new(config: Config) -> Self {
        Self::named(config, "auth-relay")
    }

    /// Creates a layer whose log output is attributed to `name`.
    pub fn named(config: Config, name: impl Into<String>) -> Self {
        Self {
            relay: AuthRelay::new(config, name),
        }
    }
}

impl<S> Layer<S> for AuthRelayLayer {
    type Service = AuthRelayService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthRelayService {
            relay: self.relay.clone(),
            inner,
        }
    }
}

/// Service produced by [`AuthRelayLayer`].
#[derive(Debug, Clone)]
pub struct AuthRelayService<S> {
    relay: AuthRelay,
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for AuthRelayService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Response<ResBody>, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<ReqBody>) -> Self::Future {
        match self.relay.reconcile(&mut request) {
            Reconciliation::Forward => Box::pin(self.inner.call(request)),
            Reconciliation::Redirect(redirect) => {
                Box::pin(std::future::ready(Ok(redirect.into_response())))
            }
        }
    }
}
