//! kaufhaus-db – Datenbank-Abstraktion
//!
//! Dieses Crate stellt das Repository-Pattern bereit: die Geschaeftslogik
//! arbeitet gegen die Traits in [`repository`], die konkrete
//! SQLite-Implementierung lebt in [`sqlite`]. Die Eindeutigkeit des
//! Benutzernamens wird auf Storage-Ebene durch einen UNIQUE-Constraint
//! garantiert und als [`DbError::Eindeutigkeit`] sichtbar gemacht.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::DbError;
pub use repository::{
    CartRepository, DatabaseConfig, DbResult, ProductRepository, PurchaseRepository,
    UserRepository,
};
pub use sqlite::SqliteDb;
