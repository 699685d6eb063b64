//! Request-Gate: Identitaets-Extractor fuer geschuetzte Endpunkte
//!
//! Geschuetzte Handler nehmen [`AngemeldeterBenutzer`] als Argument;
//! Axum ruft dafuer `from_request_parts` auf, bevor der Handler laeuft.
//! Schlaegt die Pruefung fehl, endet die Anfrage hier mit 401 und
//! erreicht den Handler nie. Das ist der einzige Durchsetzungspunkt.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use kaufhaus_db::models::BenutzerRecord;

use crate::{error::ApiError, ApiState};

/// Die fuer die Dauer einer Anfrage aufgeloeste Identitaet
///
/// Fehlender Authorization-Header, falsches Header-Format, abgelaufene,
/// manipulierte oder missgebildete Tokens und geloeschte Subjekte sind
/// von aussen nicht unterscheidbar: alle enden in derselben 401-Antwort.
#[derive(Debug, Clone)]
pub struct AngemeldeterBenutzer(pub BenutzerRecord);

#[async_trait]
impl FromRequestParts<ApiState> for AngemeldeterBenutzer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .ok_or(ApiError::NichtAuthentifiziert)?;

        let benutzer = state.auth.identitaet_aufloesen(token).await?;

        Ok(Self(benutzer))
    }
}
