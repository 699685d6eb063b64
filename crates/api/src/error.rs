//! Fehlertypen fuer die REST-API
//!
//! Alle Handler geben `Result<_, ApiError>` zurueck; die Uebersetzung
//! in HTTP-Status und JSON-Fehlerhuelle passiert an genau einer Stelle
//! in der `IntoResponse`-Implementierung.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use kaufhaus_auth::AuthError;
use kaufhaus_db::DbError;

/// Alle moeglichen Fehler an der API-Grenze
#[derive(Debug, Error)]
pub enum ApiError {
    /// Sammelbecken fuer jede Art gescheiterter Token-Pruefung.
    /// Die Aussenwelt erfaehrt nicht, WARUM das Token nicht taugt.
    #[error("Anmeldedaten konnten nicht validiert werden")]
    NichtAuthentifiziert,

    #[error("Benutzername oder Passwort falsch")]
    AnmeldungFehlgeschlagen,

    #[error("Benutzername bereits vergeben: {0}")]
    Konflikt(String),

    #[error("Ressource nicht gefunden: {0}")]
    NichtGefunden(String),

    #[error("Ungueltige Eingabe: {0}")]
    UngueltigeEingabe(String),

    #[error("Interner Fehler")]
    Intern(String),
}

impl ApiError {
    /// HTTP-Statuscode fuer diesen Fehler
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NichtAuthentifiziert | Self::AnmeldungFehlgeschlagen => {
                StatusCode::UNAUTHORIZED
            }
            Self::Konflikt(_) => StatusCode::CONFLICT,
            Self::NichtGefunden(_) => StatusCode::NOT_FOUND,
            Self::UngueltigeEingabe(_) => StatusCode::BAD_REQUEST,
            Self::Intern(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        if e.ist_token_fehler() {
            // Interne Unterscheidung nur fuers Log, nie fuer den Client
            tracing::debug!(fehler = %e, "Token-Pruefung fehlgeschlagen");
            return Self::NichtAuthentifiziert;
        }
        match e {
            AuthError::UngueltigeAnmeldedaten => Self::AnmeldungFehlgeschlagen,
            AuthError::BenutzernameVergeben(name) => Self::Konflikt(name),
            AuthError::BenutzerNichtGefunden(id) => Self::NichtGefunden(id),
            e => {
                tracing::error!(fehler = %e, "Auth-Service-Fehler");
                Self::Intern(e.to_string())
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NichtGefunden(was) => Self::NichtGefunden(was),
            e if e.ist_eindeutigkeit() => Self::Konflikt(e.to_string()),
            DbError::Sqlx(e) if e.to_string().contains("FOREIGN KEY") => {
                Self::UngueltigeEingabe("Referenziertes Objekt existiert nicht".into())
            }
            e => {
                tracing::error!(fehler = %e, "Datenbankfehler an der API-Grenze");
                Self::Intern(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let nachricht = match &self {
            // Interna nicht nach aussen spiegeln
            Self::Intern(_) => "Interner Fehler".to_string(),
            andere => andere.to_string(),
        };

        (
            status,
            Json(json!({
                "error": {
                    "code": status.as_u16(),
                    "message": nachricht
                }
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_zuordnung() {
        assert_eq!(
            ApiError::NichtAuthentifiziert.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Konflikt("alice".into()).http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::NichtGefunden("x".into()).http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn token_fehler_kollabieren_zu_einer_antwort() {
        for fehler in [
            AuthError::TokenAbgelaufen,
            AuthError::TokenSignaturUngueltig,
            AuthError::TokenMissgebildet,
            AuthError::SubjektUnbekannt("geist".into()),
        ] {
            let api: ApiError = fehler.into();
            assert!(matches!(api, ApiError::NichtAuthentifiziert));
        }
    }

    #[test]
    fn anmeldefehler_bleibt_eigenstaendig() {
        let api: ApiError = AuthError::UngueltigeAnmeldedaten.into();
        assert!(matches!(api, ApiError::AnmeldungFehlgeschlagen));
        assert_eq!(api.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn interner_fehler_verschleiert_details() {
        let antwort = ApiError::Intern("sqlx: geheimes Detail".into()).into_response();
        assert_eq!(antwort.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
