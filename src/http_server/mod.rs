//! # tinywiki HTTP Server Module
//!
//! Serves the wiki over HTTP with axum.
//!
//! # Endpoints
//!
//! - `/` - Redirect to the front page
//! - `/view/<title>` - Rendered page
//! - `/edit/<title>` - Edit form
//! - `/save/<title>` - Form target, writes the page
//! - `/health` - Health check

pub mod dispatcher;
pub mod handlers;
pub mod health;
pub mod request_log;
pub mod server;
pub mod state;

pub use dispatcher::{Dispatcher, RouteTable};
pub use server::WikiServer;
pub use state::WikiState;
