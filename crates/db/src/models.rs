//! Datenbankmodelle fuer Kaufhaus
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind reine Datenuebertragungsobjekte ohne Geschaeftslogik.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kaufhaus_core::{BenutzerId, KaufId, ProduktId, WarenkorbEintragId};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
///
/// `password_hash` enthaelt ausschliesslich den PHC-String des Argon2id-Hashes.
/// Das Klartext-Passwort wird zu keinem Zeitpunkt gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenutzerRecord {
    pub id: BenutzerId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Produkte
// ---------------------------------------------------------------------------

/// Produkt-Datensatz aus der Datenbank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduktRecord {
    pub id: ProduktId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Erstellen oder vollstaendigen Aktualisieren eines Produkts
#[derive(Debug, Clone)]
pub struct NeuesProdukt<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub stock: i64,
}

// ---------------------------------------------------------------------------
// Warenkorb
// ---------------------------------------------------------------------------

/// Eintrag im Warenkorb eines Benutzers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarenkorbEintragRecord {
    pub id: WarenkorbEintragId,
    pub user_id: BenutzerId,
    pub product_id: ProduktId,
    pub quantity: i64,
}

/// Daten zum Hinzufuegen eines Warenkorb-Eintrags
#[derive(Debug, Clone)]
pub struct NeuerWarenkorbEintrag {
    pub user_id: BenutzerId,
    pub product_id: ProduktId,
    pub quantity: i64,
}

// ---------------------------------------------------------------------------
// Kaeufe
// ---------------------------------------------------------------------------

/// Kauf-Datensatz aus der Datenbank
///
/// Die Produkt-Referenz ist optional: ein Kauf bleibt bestehen auch wenn
/// das Produkt spaeter aus dem Katalog entfernt wird.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaufRecord {
    pub id: KaufId,
    pub user_id: BenutzerId,
    pub product_id: Option<ProduktId>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines Kaufs
#[derive(Debug, Clone)]
pub struct NeuerKauf {
    pub user_id: BenutzerId,
    pub product_id: Option<ProduktId>,
    pub total_price: f64,
}
