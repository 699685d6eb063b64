//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Die SQLite-Implementierungen leben in
//! [`crate::sqlite`]; Tests koennen eigene In-Memory-Implementierungen
//! bereitstellen.

use kaufhaus_core::{BenutzerId, KaufId, ProduktId, WarenkorbEintragId};

use crate::error::DbError;
use crate::models::{
    BenutzerRecord, KaufRecord, NeuerBenutzer, NeuerKauf, NeuerWarenkorbEintrag, NeuesProdukt,
    ProduktRecord, WarenkorbEintragRecord,
};

/// Result-Alias fuer alle Repository-Operationen
pub type DbResult<T> = Result<T, DbError>;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://kaufhaus.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://kaufhaus.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Benutzer-Datenzugriffe
///
/// Der UNIQUE-Constraint auf `username` ist die autoritative Garantie
/// gegen doppelte Benutzernamen; `create` meldet eine Verletzung als
/// [`DbError::Eindeutigkeit`].
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Einen neuen Benutzer anlegen
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    /// Einen Benutzer anhand seiner ID laden
    async fn get_by_id(&self, id: BenutzerId) -> DbResult<Option<BenutzerRecord>>;

    /// Einen Benutzer anhand seines Namens laden
    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>>;

    /// Anmeldedaten als Einheit aktualisieren (Benutzername + Passwort-Hash)
    async fn update_credentials(
        &self,
        id: BenutzerId,
        username: &str,
        password_hash: &str,
    ) -> DbResult<BenutzerRecord>;

    /// Zeitpunkt der letzten Anmeldung setzen
    async fn update_last_login(&self, id: BenutzerId) -> DbResult<()>;

    /// Einen Benutzer loeschen
    async fn delete(&self, id: BenutzerId) -> DbResult<bool>;

    /// Alle Benutzer auflisten
    async fn list(&self) -> DbResult<Vec<BenutzerRecord>>;
}

/// Repository fuer Produkt-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait ProductRepository: Send + Sync {
    /// Ein neues Produkt anlegen
    async fn create(&self, data: NeuesProdukt<'_>) -> DbResult<ProduktRecord>;

    /// Ein Produkt anhand seiner ID laden
    async fn get_by_id(&self, id: ProduktId) -> DbResult<Option<ProduktRecord>>;

    /// Alle Produkte auflisten
    async fn list(&self) -> DbResult<Vec<ProduktRecord>>;

    /// Ein Produkt vollstaendig aktualisieren
    async fn update(&self, id: ProduktId, data: NeuesProdukt<'_>) -> DbResult<ProduktRecord>;

    /// Ein Produkt loeschen
    async fn delete(&self, id: ProduktId) -> DbResult<bool>;
}

/// Repository fuer Warenkorb-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait CartRepository: Send + Sync {
    /// Einen Eintrag zum Warenkorb hinzufuegen
    async fn add(&self, data: NeuerWarenkorbEintrag) -> DbResult<WarenkorbEintragRecord>;

    /// Alle Eintraege im Warenkorb eines Benutzers laden
    async fn list_for_user(&self, user_id: BenutzerId) -> DbResult<Vec<WarenkorbEintragRecord>>;

    /// Einen Eintrag aktualisieren (Produkt + Menge)
    async fn update(
        &self,
        id: WarenkorbEintragId,
        product_id: ProduktId,
        quantity: i64,
    ) -> DbResult<WarenkorbEintragRecord>;

    /// Einen Eintrag entfernen
    async fn delete(&self, id: WarenkorbEintragId) -> DbResult<bool>;
}

/// Repository fuer Kauf-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait PurchaseRepository: Send + Sync {
    /// Einen Kauf anlegen
    async fn create(&self, data: NeuerKauf) -> DbResult<KaufRecord>;

    /// Einen Kauf anhand seiner ID laden
    async fn get_by_id(&self, id: KaufId) -> DbResult<Option<KaufRecord>>;

    /// Alle Kaeufe eines Benutzers laden
    async fn list_for_user(&self, user_id: BenutzerId) -> DbResult<Vec<KaufRecord>>;

    /// Den Gesamtpreis eines Kaufs aktualisieren
    async fn update_total(&self, id: KaufId, total_price: f64) -> DbResult<KaufRecord>;

    /// Einen Kauf loeschen
    async fn delete(&self, id: KaufId) -> DbResult<bool>;
}
