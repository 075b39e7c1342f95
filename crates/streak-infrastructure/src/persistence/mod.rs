pub mod repositories;
mod transaction;

pub use transaction::InMemoryTransaction;
