//! REST-Handler fuer Produkt-Endpunkte

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use kaufhaus_core::ProduktId;
use kaufhaus_db::{
    models::{NeuesProdukt, ProduktRecord},
    ProductRepository,
};

use crate::{error::ApiError, extract::AngemeldeterBenutzer, ApiState};

#[derive(Debug, Deserialize)]
pub struct ProduktBody {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl ProduktBody {
    fn als_neues_produkt(&self) -> NeuesProdukt<'_> {
        NeuesProdukt {
            name: &self.name,
            description: &self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// GET /v1/produkte – Katalog auflisten
pub async fn list_produkte(
    State(state): State<ApiState>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<Json<Vec<ProduktRecord>>, ApiError> {
    Ok(Json(state.db.list().await?))
}

/// POST /v1/produkte – Produkt anlegen
pub async fn create_produkt(
    State(state): State<ApiState>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<ProduktBody>,
) -> Result<(StatusCode, Json<ProduktRecord>), ApiError> {
    let produkt = state.db.create(body.als_neues_produkt()).await?;
    Ok((StatusCode::CREATED, Json(produkt)))
}

/// PUT /v1/produkte/:id – Produkt vollstaendig aktualisieren
pub async fn update_produkt(
    State(state): State<ApiState>,
    Path(id): Path<ProduktId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
    Json(body): Json<ProduktBody>,
) -> Result<Json<ProduktRecord>, ApiError> {
    let produkt = state.db.update(id, body.als_neues_produkt()).await?;
    Ok(Json(produkt))
}

/// DELETE /v1/produkte/:id – Produkt loeschen
pub async fn delete_produkt(
    State(state): State<ApiState>,
    Path(id): Path<ProduktId>,
    AngemeldeterBenutzer(_aufrufer): AngemeldeterBenutzer,
) -> Result<StatusCode, ApiError> {
    if !state.db.delete(id).await? {
        return Err(ApiError::NichtGefunden(format!("Produkt {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
