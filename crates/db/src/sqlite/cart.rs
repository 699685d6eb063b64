//! SQLite-Implementierung des CartRepository

use uuid::Uuid;

use kaufhaus_core::{BenutzerId, ProduktId, WarenkorbEintragId};

use crate::error::DbError;
use crate::models::{NeuerWarenkorbEintrag, WarenkorbEintragRecord};
use crate::repository::{CartRepository, DbResult};
use crate::sqlite::pool::SqliteDb;

impl CartRepository for SqliteDb {
    async fn add(&self, data: NeuerWarenkorbEintrag) -> DbResult<WarenkorbEintragRecord> {
        let id = WarenkorbEintragId::new();

        sqlx::query(
            "INSERT INTO cart_items (id, user_id, product_id, quantity)
             VALUES (?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.user_id.inner().to_string())
        .bind(data.product_id.inner().to_string())
        .bind(data.quantity)
        .execute(&self.pool)
        .await?;

        Ok(WarenkorbEintragRecord {
            id,
            user_id: data.user_id,
            product_id: data.product_id,
            quantity: data.quantity,
        })
    }

    async fn list_for_user(
        &self,
        user_id: BenutzerId,
    ) -> DbResult<Vec<WarenkorbEintragRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, product_id, quantity
             FROM cart_items WHERE user_id = ?",
        )
        .bind(user_id.inner().to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_eintrag).collect()
    }

    async fn update(
        &self,
        id: WarenkorbEintragId,
        product_id: ProduktId,
        quantity: i64,
    ) -> DbResult<WarenkorbEintragRecord> {
        let affected =
            sqlx::query("UPDATE cart_items SET product_id = ?, quantity = ? WHERE id = ?")
                .bind(product_id.inner().to_string())
                .bind(quantity)
                .bind(id.inner().to_string())
                .execute(&self.pool)
                .await?
                .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Warenkorb-Eintrag {id}")));
        }

        let row = sqlx::query(
            "SELECT id, user_id, product_id, quantity
             FROM cart_items WHERE id = ?",
        )
        .bind(id.inner().to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_eintrag(&r))
            .transpose()?
            .ok_or_else(|| DbError::intern("Warenkorb-Eintrag nach Update nicht gefunden"))
    }

    async fn delete(&self, id: WarenkorbEintragId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM cart_items WHERE id = ?")
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_eintrag(row: &sqlx::sqlite::SqliteRow) -> DbResult<WarenkorbEintragRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let user_str: String = row.try_get("user_id")?;
    let product_str: String = row.try_get("product_id")?;

    let parse = |s: &str| {
        Uuid::parse_str(s).map_err(|e| DbError::intern(format!("Ungueltige UUID '{s}': {e}")))
    };

    Ok(WarenkorbEintragRecord {
        id: WarenkorbEintragId(parse(&id_str)?),
        user_id: BenutzerId(parse(&user_str)?),
        product_id: ProduktId(parse(&product_str)?),
        quantity: row.try_get("quantity")?,
    })
}
