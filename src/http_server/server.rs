//! # HTTP Server
//!
//! Wires the store, renderer and dispatcher into one axum router.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request, State};
use axum::middleware;
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;

use super::dispatcher::{Dispatcher, RouteTable};
use super::handlers;
use super::health::health_routes;
use super::request_log::log_requests;
use super::state::WikiState;
use crate::config::WikiConfig;
use crate::observability::{Event, Logger};
use crate::render::Renderer;
use crate::store::FileStore;
use crate::wiki::WikiResult;

#[derive(Clone)]
struct AppState {
    wiki: Arc<WikiState>,
    routes: Arc<RouteTable>,
}

/// HTTP server for the wiki
pub struct WikiServer {
    config: WikiConfig,
    router: Router,
}

impl WikiServer {
    /// Open the file store and load templates as configured.
    ///
    /// Missing or malformed templates fail here, before anything listens.
    pub fn from_config(config: WikiConfig) -> WikiResult<Self> {
        let policy = config.page_policy()?;

        let renderer = Renderer::from_dir(&config.template_dir, &policy.required_templates())?;
        Logger::info(
            Event::TemplatesLoaded,
            &[("template_dir", &display(&config.template_dir))],
        );

        let store = FileStore::open(&config.data_dir)?;
        Logger::info(Event::StoreOpened, &[("data_dir", &display(store.root()))]);

        Self::with_state(config, WikiState::new(Arc::new(store), renderer, policy))
    }

    /// Serve an already assembled state, e.g. one backed by another store
    pub fn with_state(config: WikiConfig, state: WikiState) -> WikiResult<Self> {
        let router = Self::build_router(Arc::new(state), config.max_body_bytes)?;
        Ok(Self { config, router })
    }

    /// Build the router serving `state`
    pub fn build_router(state: Arc<WikiState>, max_body_bytes: usize) -> WikiResult<Router> {
        let routes = Dispatcher::new()
            .register("edit", handlers::edit)
            .register("save", handlers::save)
            .register("view", handlers::view)
            .build()?;

        let app = AppState {
            wiki: Arc::clone(&state),
            routes: Arc::new(routes),
        };

        Ok(Router::new()
            .fallback(serve_request)
            .with_state(app)
            .merge(health_routes(state))
            .layer(middleware::from_fn(log_requests))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(max_body_bytes)))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e))
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(Event::Serving, &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn serve_request(State(app): State<AppState>, req: Request) -> Response {
    if app.routes.claims(req.uri().path()) {
        return app.routes.dispatch(Arc::clone(&app.wiki), req).await;
    }
    handlers::root(app.wiki.policy(), req.uri().path())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    use crate::wiki::WikiError;

    fn write_templates(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(format!("{}.html", name)), "{{ title }}").unwrap();
        }
    }

    fn config_in(temp: &TempDir) -> WikiConfig {
        let template_dir = temp.path().join("templates");
        fs::create_dir(&template_dir).unwrap();
        WikiConfig {
            port: 8081,
            data_dir: temp.path().join("pages"),
            template_dir,
            ..WikiConfig::default()
        }
    }

    #[test]
    fn test_from_config_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        write_templates(&config.template_dir, &["view", "edit", "front"]);

        let server = WikiServer::from_config(config.clone()).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8081");
        assert!(config.data_dir.is_dir());
    }

    #[test]
    fn test_missing_front_template_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        write_templates(&config.template_dir, &["view", "edit"]);

        let result = WikiServer::from_config(config);
        assert!(matches!(result, Err(WikiError::Render(_))));
    }

    #[test]
    fn test_malformed_template_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        write_templates(&config.template_dir, &["view", "edit", "front"]);
        fs::write(config.template_dir.join("edit.html"), "{% for %}").unwrap();

        assert!(matches!(
            WikiServer::from_config(config),
            Err(WikiError::Render(_))
        ));
    }
}
