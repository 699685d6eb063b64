//! SQLite-Implementierung des ProductRepository

use chrono::Utc;
use uuid::Uuid;

use kaufhaus_core::ProduktId;

use crate::error::DbError;
use crate::models::{NeuesProdukt, ProduktRecord};
use crate::repository::{DbResult, ProductRepository};
use crate::sqlite::pool::SqliteDb;

impl ProductRepository for SqliteDb {
    async fn create(&self, data: NeuesProdukt<'_>) -> DbResult<ProduktRecord> {
        let id = ProduktId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO products (id, name, description, price, stock, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.name)
        .bind(data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("Produktname '{}' bereits vergeben", data.name))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(ProduktRecord {
            id,
            name: data.name.to_string(),
            description: data.description.to_string(),
            price: data.price,
            stock: data.stock,
            created_at: now,
        })
    }

    async fn get_by_id(&self, id: ProduktId) -> DbResult<Option<ProduktRecord>> {
        let row = sqlx::query(
            "SELECT id, name, description, price, stock, created_at
             FROM products WHERE id = ?",
        )
        .bind(id.inner().to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_produkt(&r)).transpose()
    }

    async fn list(&self) -> DbResult<Vec<ProduktRecord>> {
        let rows = sqlx::query(
            "SELECT id, name, description, price, stock, created_at
             FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_produkt).collect()
    }

    async fn update(&self, id: ProduktId, data: NeuesProdukt<'_>) -> DbResult<ProduktRecord> {
        let affected = sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, stock = ? WHERE id = ?",
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(id.inner().to_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Produkt {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Produkt nach Update nicht gefunden"))
    }

    async fn delete(&self, id: ProduktId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_produkt(row: &sqlx::sqlite::SqliteRow) -> DbResult<ProduktRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(ProduktRecord {
        id: ProduktId(id),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        created_at,
    })
}
