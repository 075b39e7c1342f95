pub mod bootstrap;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
