//! Handler fuer die Anmeldung (Token-Ausstellung)

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, ApiState};

#[derive(Debug, Deserialize)]
pub struct AnmeldeBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenAntwort {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /v1/token – Anmeldung mit Benutzername + Passwort
pub async fn login(
    State(state): State<ApiState>,
    Json(body): Json<AnmeldeBody>,
) -> Result<Json<TokenAntwort>, ApiError> {
    tracing::info!(username = %body.username, "Anmeldeversuch");

    let benutzer = state.auth.anmelden(&body.username, &body.password).await?;
    let access_token = state.auth.token_ausstellen(&benutzer)?;

    Ok(Json(TokenAntwort {
        access_token,
        token_type: "bearer",
    }))
}
