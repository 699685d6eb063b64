//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod cart;
pub mod pool;
pub mod products;
pub mod purchases;
pub mod users;

pub use pool::SqliteDb;
