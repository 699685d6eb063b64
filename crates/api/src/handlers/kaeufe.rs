//! REST-Handler fuer Kauf-Endpunkte

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use kaufhaus_core::{BenutzerId, KaufId, ProduktId};
use kaufhaus_db::{
    models::{KaufRecord, NeuerKauf},
    PurchaseRepository,
};

use crate::{error::ApiError, extract::AngemeldeterBenutzer, ApiState};

#[derive(Debug, Deserialize)]
pub struct KaufAnlegenBody {
    pub total_price: f64,
    pub product_id: Option<ProduktId>,
}

#[derive(Debug, Deserialize)]
pub struct KaufAktualisierenBody {
    pub total_price: f64,
}

/// GET /v1/kaeufe/:user_id – Kaeufe eines Benutzers auflisten
pub async fn list_kaeufe(
    State(state): State<ApiState>,
    Path(user_id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<Json<Vec<KaufRecord>>, ApiError> {
    Ok(Json(state.db.list_for_user(user_id).await?))
}

/// POST /v1/kaeufe/:user_id – Kauf anlegen
pub async fn create_kauf(
    State(state): State<ApiState>,
    Path(user_id): Path<BenutzerId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<KaufAnlegenBody>,
) -> Result<(StatusCode, Json<KaufRecord>), ApiError> {
    let kauf = state
        .db
        .create(NeuerKauf {
            user_id,
            product_id: body.product_id,
            total_price: body.total_price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(kauf)))
}

/// PUT /v1/kaeufe/:kauf_id – Gesamtpreis aktualisieren
pub async fn update_kauf(
    State(state): State<ApiState>,
    Path(kauf_id): Path<KaufId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<KaufAktualisierenBody>,
) -> Result<Json<KaufRecord>, ApiError> {
    let kauf = state.db.update_total(kauf_id, body.total_price).await?;
    Ok(Json(kauf))
}

/// DELETE /v1/kaeufe/:kauf_id – Kauf loeschen
pub async fn delete_kauf(
    State(state): State<ApiState>,
    Path(kauf_id): Path<KaufId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<StatusCode, ApiError> {
    if !state.db.delete(kauf_id).await? {
        return Err(ApiError::NichtGefunden(format!("Kauf {kauf_id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
