use actix_web::http::Method;
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;
use std::future::Future;

use crate::api::{error, response::Response};
use crate::router::{
    pattern::{Pattern, PatternError},
    request::Request,
};

/// Method selector of a route. `All` accepts every request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    All,
}

impl RouteMethod {
    pub fn accepts(self, method: &Method) -> bool {
        match self {
            RouteMethod::Get => *method == Method::GET,
            RouteMethod::Post => *method == Method::POST,
            RouteMethod::All => true,
        }
    }
}

pub type Handler = Box<dyn Fn(Request) -> LocalBoxFuture<'static, Response> + Send + Sync>;

/// Wraps a fallible handler function into a route `Handler`.
///
/// This is the single place where an `Err` returned by a handler is turned
/// into its HTTP error response.
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, error::Error>> + 'static,
{
    Box::new(move |req| {
        let fut = f(req);
        Box::pin(async move { fut.await.unwrap_or_else(Response::from) })
    })
}

pub struct Route {
    method: RouteMethod,
    pattern: Pattern,
    handler: Handler,
}

impl Route {
    pub fn method(&self) -> RouteMethod {
        self.method
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn matches(&self, req: &Request) -> Option<HashMap<String, String>> {
        if !self.method.accepts(req.method()) {
            return None;
        }
        self.pattern.matches(req.path())
    }
}

/// Ordered list of routes. Matching priority is registration order: the
/// first route whose method and pattern both match wins.
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        method: RouteMethod,
        pattern: &str,
        handler: Handler,
    ) -> Result<&mut Self, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        self.routes.push(Route { method, pattern, handler });
        Ok(self)
    }

    pub fn get(&mut self, pattern: &str, handler: Handler) -> Result<&mut Self, PatternError> {
        self.register(RouteMethod::Get, pattern, handler)
    }

    pub fn post(&mut self, pattern: &str, handler: Handler) -> Result<&mut Self, PatternError> {
        self.register(RouteMethod::Post, pattern, handler)
    }

    pub fn all(&mut self, pattern: &str, handler: Handler) -> Result<&mut Self, PatternError> {
        self.register(RouteMethod::All, pattern, handler)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Seals the table by appending the catch-all `ALL *` route. Nothing can
    /// be registered after it, so every request finds a handler.
    pub fn fallback(self, handler: Handler) -> Dispatcher {
        let fallback = Route {
            method: RouteMethod::All,
            pattern: Pattern::catch_all(),
            handler,
        };
        Dispatcher { routes: self.routes, fallback }
    }
}

pub struct Dispatcher {
    routes: Vec<Route>,
    fallback: Route,
}

impl Dispatcher {
    /// Invokes exactly one handler: the first matching route, or the
    /// not-found fallback.
    pub async fn dispatch(&self, req: Request) -> Response {
        let (route, params) = self
            .routes
            .iter()
            .find_map(|route| route.matches(&req).map(|params| (route, params)))
            .unwrap_or((&self.fallback, HashMap::new()));

        log::debug!(
            "{} {} -> {:?} {}",
            req.method(),
            req.path(),
            route.method,
            route.pattern.as_str()
        );

        (route.handler)(req.with_params(params)).await
    }

    /// All routes in matching order, the fallback last.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }
}
