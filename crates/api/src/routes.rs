//! Route-Definitionen fuer die REST-API (/v1/...)

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, server, ApiState};

/// Erstellt den vollstaendigen Router
///
/// Oeffentlich sind nur Anmeldung, Registrierung, Benutzerliste und der
/// Health-Check; alles andere laeuft durch das Request-Gate.
pub fn v1_router() -> Router<ApiState> {
    Router::new()
        // Health
        .route("/health", get(server::health))
        // Anmeldung
        .route("/v1/token", post(handlers::token::login))
        // Benutzer
        .route("/v1/benutzer", get(handlers::benutzer::list_benutzer))
        .route("/v1/benutzer", post(handlers::benutzer::create_benutzer))
        .route("/v1/benutzer/:id", put(handlers::benutzer::update_benutzer))
        .route(
            "/v1/benutzer/:id",
            delete(handlers::benutzer::delete_benutzer),
        )
        // Produkte
        .route("/v1/produkte", get(handlers::produkte::list_produkte))
        .route("/v1/produkte", post(handlers::produkte::create_produkt))
        .route("/v1/produkte/:id", put(handlers::produkte::update_produkt))
        .route(
            "/v1/produkte/:id",
            delete(handlers::produkte::delete_produkt),
        )
        // Warenkorb – GET/POST adressieren den Benutzer, PUT/DELETE den Eintrag
        .route("/v1/warenkorb/:id", get(handlers::warenkorb::list_warenkorb))
        .route("/v1/warenkorb/:id", post(handlers::warenkorb::add_eintrag))
        .route("/v1/warenkorb/:id", put(handlers::warenkorb::update_eintrag))
        .route(
            "/v1/warenkorb/:id",
            delete(handlers::warenkorb::delete_eintrag),
        )
        // Kaeufe – GET/POST adressieren den Benutzer, PUT/DELETE den Kauf
        .route("/v1/kaeufe/:id", get(handlers::kaeufe::list_kaeufe))
        .route("/v1/kaeufe/:id", post(handlers::kaeufe::create_kauf))
        .route("/v1/kaeufe/:id", put(handlers::kaeufe::update_kauf))
        .route("/v1/kaeufe/:id", delete(handlers::kaeufe::delete_kauf))
}
