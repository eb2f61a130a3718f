//! tinywiki - A minimal server-rendered wiki
//!
//! Pages are addressed by alphanumeric titles, stored one file per page
//! and edited through plain HTML forms.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod render;
pub mod store;
pub mod wiki;
