//! kaufhaus-api – REST-Schnittstelle fuer Kaufhaus
//!
//! Axum-basierte JSON-API unter `/v1/...`. Geschuetzte Endpunkte
//! verlangen ein Bearer-Token im Authorization-Header; die Pruefung
//! laeuft ausschliesslich ueber den Extractor
//! [`extract::AngemeldeterBenutzer`] – es gibt keinen zweiten
//! Durchsetzungspunkt.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;

use std::sync::Arc;

use kaufhaus_auth::AuthService;
use kaufhaus_db::SqliteDb;

/// Axum-State fuer die REST-API
#[derive(Clone)]
pub struct ApiState {
    /// Auth-Service (Registrierung, Anmeldung, Token)
    pub auth: Arc<AuthService<SqliteDb>>,
    /// Datenbank-Handle fuer die CRUD-Repositories
    pub db: SqliteDb,
}

impl ApiState {
    pub fn neu(auth: Arc<AuthService<SqliteDb>>, db: SqliteDb) -> Self {
        Self { auth, db }
    }
}

pub use error::ApiError;
pub use extract::AngemeldeterBenutzer;
pub use routes::v1_router;
pub use server::{ApiServer, ApiServerKonfig};
