//! Gemeinsame Identifikationstypen fuer Kaufhaus
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen. Ueber serde
//! (de)serialisieren sie transparent als UUID-String, sodass sie direkt
//! in Pfad-Parametern und JSON-Koerpern verwendet werden koennen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige Benutzer-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BenutzerId(pub Uuid);

impl BenutzerId {
    /// Erstellt eine neue zufaellige BenutzerId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for BenutzerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BenutzerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "benutzer:{}", self.0)
    }
}

/// Eindeutige Produkt-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProduktId(pub Uuid);

impl ProduktId {
    /// Erstellt eine neue zufaellige ProduktId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for ProduktId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProduktId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "produkt:{}", self.0)
    }
}

/// Eindeutige ID eines Warenkorb-Eintrags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarenkorbEintragId(pub Uuid);

impl WarenkorbEintragId {
    /// Erstellt eine neue zufaellige WarenkorbEintragId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for WarenkorbEintragId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WarenkorbEintragId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warenkorb-eintrag:{}", self.0)
    }
}

/// Eindeutige Kauf-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KaufId(pub Uuid);

impl KaufId {
    /// Erstellt eine neue zufaellige KaufId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for KaufId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KaufId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "kauf:{}", self.0)
    }
}
