//! SQLite-Implementierung des UserRepository

use chrono::Utc;
use uuid::Uuid;

use kaufhaus_core::BenutzerId;

use crate::error::DbError;
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::{DbResult, UserRepository};
use crate::sqlite::pool::SqliteDb;

impl UserRepository for SqliteDb {
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let id = BenutzerId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO users (id, username, password_hash, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.username)
        .bind(data.password_hash)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!(
                    "Benutzername '{}' bereits vergeben",
                    data.username
                ))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(BenutzerRecord {
            id,
            username: data.username.to_string(),
            password_hash: data.password_hash.to_string(),
            created_at: now,
            last_login: None,
        })
    }

    async fn get_by_id(&self, id: BenutzerId) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at, last_login
             FROM users WHERE id = ?",
        )
        .bind(id.inner().to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at, last_login
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn update_credentials(
        &self,
        id: BenutzerId,
        username: &str,
        password_hash: &str,
    ) -> DbResult<BenutzerRecord> {
        // Anmeldedaten aendern sich als Einheit: ein Statement, beide Spalten
        let affected = sqlx::query("UPDATE users SET username = ?, password_hash = ? WHERE id = ?")
            .bind(username)
            .bind(password_hash)
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains("UNIQUE") || msg.contains("unique") {
                    DbError::Eindeutigkeit(format!("Benutzername '{username}' bereits vergeben"))
                } else {
                    DbError::Sqlx(e)
                }
            })?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Benutzer {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Benutzer nach Update nicht gefunden"))
    }

    async fn update_last_login(&self, id: BenutzerId) -> DbResult<()> {
        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(Utc::now().to_rfc3339())
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: BenutzerId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.inner().to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }

    async fn list(&self) -> DbResult<Vec<BenutzerRecord>> {
        let rows = sqlx::query(
            "SELECT id, username, password_hash, created_at, last_login
             FROM users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_benutzer).collect()
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    let last_login: Option<String> = row.try_get("last_login")?;
    let last_login = last_login
        .as_deref()
        .map(|s| {
            chrono::DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| DbError::intern(format!("Ungueltige last_login '{s}': {e}")))
        })
        .transpose()?;

    Ok(BenutzerRecord {
        id: BenutzerId(id),
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        created_at,
        last_login,
    })
}
