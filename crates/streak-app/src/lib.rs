// Application and presentation layers of the streak tracker.
// `main.rs` only wires configuration, logging and the server together.

pub mod application;
pub mod presentation;
