//! Route Dispatcher
//!
//! Binds operation prefixes (`view`, `edit`, `save`, ...) to handlers and
//! wraps every one of them in the same title check: a request under
//! `/<prefix>/` reaches its handler only if the whole path validates, and
//! the handler receives the already-validated [`Title`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};

use super::state::WikiState;
use crate::observability::{Event, Logger};
use crate::wiki::{Title, TitleValidator, WikiError, WikiResult};

/// Future returned by a boxed operation handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = WikiResult<Response>> + Send>>;

/// Operation handler as stored by the dispatcher
pub type BoxedHandler = Arc<dyn Fn(Arc<WikiState>, Title, Request) -> HandlerFuture + Send + Sync>;

struct Route {
    prefix: String,
    handler: BoxedHandler,
}

/// Collects operation routes before the title pattern is compiled
#[derive(Default)]
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `/<prefix>/<title>` with `handler`
    pub fn register<H, Fut>(mut self, prefix: impl Into<String>, handler: H) -> Self
    where
        H: Fn(Arc<WikiState>, Title, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = WikiResult<Response>> + Send + 'static,
    {
        let boxed: BoxedHandler = Arc::new(
            move |state: Arc<WikiState>, title: Title, req: Request| -> HandlerFuture {
                Box::pin(handler(state, title, req))
            },
        );
        self.routes.push(Route {
            prefix: prefix.into(),
            handler: boxed,
        });
        self
    }

    /// Compile the title pattern over every registered prefix
    pub fn build(self) -> WikiResult<RouteTable> {
        for (i, route) in self.routes.iter().enumerate() {
            if self.routes[..i].iter().any(|r| r.prefix == route.prefix) {
                return Err(WikiError::InvalidOperation(route.prefix.clone()));
            }
        }

        let validator = TitleValidator::new(self.routes.iter().map(|r| r.prefix.clone()))?;
        Ok(RouteTable {
            validator,
            routes: self.routes,
        })
    }
}

/// Immutable routing table used while serving
pub struct RouteTable {
    validator: TitleValidator,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn validator(&self) -> &TitleValidator {
        &self.validator
    }

    /// Whether `path` falls under one of the operation prefixes
    pub fn claims(&self, path: &str) -> bool {
        self.route_for(path).is_some()
    }

    fn route_for(&self, path: &str) -> Option<&Route> {
        let rest = path.strip_prefix('/')?;
        self.routes.iter().find(|route| {
            rest.strip_prefix(route.prefix.as_str())
                .is_some_and(|tail| tail.starts_with('/'))
        })
    }

    /// Validate the title in `req` and run the matching handler.
    ///
    /// An invalid title answers 404 without invoking any handler.
    pub async fn dispatch(&self, state: Arc<WikiState>, req: Request) -> Response {
        let path = req.uri().path().to_owned();

        let Some(route) = self.route_for(&path) else {
            return WikiError::InvalidTitle(path).into_response();
        };

        let title = match self.validator.extract_title(&path) {
            Ok(title) => title,
            Err(err) => {
                Logger::warn(Event::InvalidTitle, &[("path", &path)]);
                return err.into_response();
            }
        };

        (route.handler)(state, title, req)
            .await
            .unwrap_or_else(IntoResponse::into_response)
    }
}
