pub mod api_doc;
pub mod auth;
pub mod config;
pub mod error;
pub mod extension;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
