//! REST-Handler fuer Warenkorb-Endpunkte

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use kaufhaus_core::{BenutzerId, ProduktId, WarenkorbEintragId};
use kaufhaus_db::{
    models::{NeuerWarenkorbEintrag, WarenkorbEintragRecord},
    CartRepository,
};

use crate::{error::ApiError, extract::AngemeldeterBenutzer, ApiState};

#[derive(Debug, Deserialize)]
pub struct WarenkorbEintragBody {
    pub product_id: ProduktId,
    pub quantity: i64,
}

/// GET /v1/warenkorb/:user_id – Warenkorb eines Benutzers auflisten
pub async fn list_warenkorb(
    State(state): State<ApiState>,
    Path(user_id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<Json<Vec<WarenkorbEintragRecord>>, ApiError> {
    Ok(Json(state.db.list_for_user(user_id).await?))
}

/// POST /v1/warenkorb/:user_id – Eintrag zum Warenkorb hinzufuegen
pub async fn add_eintrag(
    State(state): State<ApiState>,
    Path(user_id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<WarenkorbEintragBody>,
) -> Result<(StatusCode, Json<WarenkorbEintragRecord>), ApiError> {
    let eintrag = state
        .db
        .add(NeuerWarenkorbEintrag {
            user_id,
            product_id: body.product_id,
            quantity: body.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(eintrag)))
}

/// PUT /v1/warenkorb/:eintrag_id – Eintrag aktualisieren
pub async fn update_eintrag(
    State(state): State<ApiState>,
    Path(eintrag_id): Path<WarenkorbEintragId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<WarenkorbEintragBody>,
) -> Result<Json<WarenkorbEintragRecord>, ApiError> {
    let eintrag = state
        .db
        .update(eintrag_id, body.product_id, body.quantity)
        .await?;
    Ok(Json(eintrag))
}

/// DELETE /v1/warenkorb/:eintrag_id – Eintrag entfernen
pub async fn delete_eintrag(
    State(state): State<ApiState>,
    Path(eintrag_id): Path<WarenkorbEintragId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<StatusCode, ApiError> {
    if !state.db.delete(eintrag_id).await? {
        return Err(ApiError::NichtGefunden(format!(
            "Warenkorb-Eintrag {eintrag_id}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
