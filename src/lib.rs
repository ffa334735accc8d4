pub mod config;
pub mod demo;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use routes::AppState;
