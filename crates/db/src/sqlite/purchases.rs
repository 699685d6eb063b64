//! SQLite-Implementierung des PurchaseRepository

use chrono::Utc;
use uuid::Uuid;

use kaufhaus_core::{BenutzerId, KaufId, ProduktId};

use crate::error::DbError;
use crate::models::{KaufRecord, NeuerKauf};
use crate::repository::{DbResult, PurchaseRepository};
use crate::sqlite::pool::SqliteDb;

impl PurchaseRepository for SqliteDb {
    async fn create(&self, data: NeuerKauf) -> DbResult<KaufRecord> {
        let id = KaufId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO purchases (id, user_id, product_id, total_price, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.user_id.inner().to_string())
        .bind(data.product_id.map(|p| p.inner().to_string()))
        .bind(data.total_price)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(KaufRecord {
            id,
            user_id: data.user_id,
            product_id: data.product_id,
            total_price: data.total_price,
            created_at: now,
        })
    }

    async fn get_by_id(&self, id: KaufId) -> DbResult<Option<KaufRecord>> {
        let row = sqlx::query(
            "SELECT id, user_id, product_id, total_price, created_at
             FROM purchases WHERE id = ?",
        )
        .bind(id.inner().to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_kauf(&r)).transpose()
    }

    async fn list_for_user(&self, user_id: BenutzerId) -> DbResult<Vec<KaufRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, product_id, total_price, created_at
             FROM purchases WHERE user_id = ? ORDER BY created_at",
        )
        .bind(user_id.inner().to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_kauf).collect()
    }

    async fn update_total(&self, id: KaufId, total_price: f64) -> DbResult<KaufRecord> {
        let affected = sqlx::query("UPDATE purchases SET total_price = ? WHERE id = ?")
            .bind(total_price)
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Kauf {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Kauf nach Update nicht gefunden"))
    }

    async fn delete(&self, id: KaufId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM purchases WHERE id = ?")
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_kauf(row: &sqlx::sqlite::SqliteRow) -> DbResult<KaufRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let user_str: String = row.try_get("user_id")?;
    let product_str: Option<String> = row.try_get("product_id")?;

    let parse = |s: &str| {
        Uuid::parse_str(s).map_err(|e| DbError::intern(format!("Ungueltige UUID '{s}': {e}")))
    };

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(KaufRecord {
        id: KaufId(parse(&id_str)?),
        user_id: BenutzerId(parse(&user_str)?),
        product_id: product_str
            .as_deref()
            .map(|s| parse(s).map(ProduktId))
            .transpose()?,
        total_price: row.try_get("total_price")?,
        created_at,
    })
}
