//! REST-Handler fuer Benutzer-Endpunkte

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kaufhaus_core::BenutzerId;
use kaufhaus_db::{models::BenutzerRecord, UserRepository};

use crate::{error::ApiError, extract::AngemeldeterBenutzer, ApiState};

/// Benutzer-Darstellung nach aussen – ohne Passwort-Hash
#[derive(Debug, Serialize)]
pub struct BenutzerAntwort {
    pub id: BenutzerId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<BenutzerRecord> for BenutzerAntwort {
    fn from(r: BenutzerRecord) -> Self {
        Self {
            id: r.id,
            username: r.username,
            created_at: r.created_at,
            last_login: r.last_login,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BenutzerAnlegenBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegistrierungsAntwort {
    pub user: BenutzerAntwort,
    pub access_token: String,
    pub token_type: &'static str,
}

/// GET /v1/benutzer – alle Benutzer auflisten
pub async fn list_benutzer(
    State(state): State<ApiState>,
) -> Result<Json<Vec<BenutzerAntwort>>, ApiError> {
    let benutzer = state.db.list().await?;
    Ok(Json(benutzer.into_iter().map(Into::into).collect()))
}

/// POST /v1/benutzer – Registrierung
///
/// Gibt den angelegten Benutzer zusammen mit einem frischen Token
/// zurueck, damit die Anmeldung nicht separat erfolgen muss.
pub async fn create_benutzer(
    State(state): State<ApiState>,
    Json(body): Json<BenutzerAnlegenBody>,
) -> Result<(StatusCode, Json<RegistrierungsAntwort>), ApiError> {
    let benutzer = state
        .auth
        .registrieren(&body.username, &body.password)
        .await?;
    let access_token = state.auth.token_ausstellen(&benutzer)?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrierungsAntwort {
            user: benutzer.into(),
            access_token,
            token_type: "bearer",
        }),
    ))
}

/// PUT /v1/benutzer/:id – Anmeldedaten aktualisieren
///
/// Benutzername und Passwort aendern sich als Einheit.
pub async fn update_benutzer(
    State(state): State<ApiState>,
    Path(id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<BenutzerAnlegenBody>,
) -> Result<Json<BenutzerAntwort>, ApiError> {
    let benutzer = state
        .auth
        .anmeldedaten_aktualisieren(id, &body.username, &body.password)
        .await?;

    Ok(Json(benutzer.into()))
}

/// DELETE /v1/benutzer/:id – Benutzer loeschen
pub async fn delete_benutzer(
    State(state): State<ApiState>,
    Path(id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<StatusCode, ApiError> {
    if !state.db.delete(id).await? {
        return Err(ApiError::NichtGefunden(format!("Benutzer {id}")));
    }
    tracing::info!(user_id = %id, "Benutzer geloescht");
    Ok(StatusCode::NO_CONTENT)
}
