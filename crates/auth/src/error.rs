//! Fehlertypen fuer den Auth-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Authentifizierung ---
    #[error("Benutzername oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    // --- Token ---
    #[error("Token abgelaufen")]
    TokenAbgelaufen,

    #[error("Token-Signatur ungueltig")]
    TokenSignaturUngueltig,

    #[error("Token missgebildet")]
    TokenMissgebildet,

    #[error("Token-Subjekt unbekannt: {0}")]
    SubjektUnbekannt(String),

    // --- Benutzerverwaltung ---
    #[error("Benutzername bereits vergeben: {0}")]
    BenutzernameVergeben(String),

    #[error("Benutzer nicht gefunden: {0}")]
    BenutzerNichtGefunden(String),

    // --- Konfiguration ---
    #[error("Unbekannter Signatur-Algorithmus: {0}")]
    UnbekannterAlgorithmus(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] kaufhaus_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    /// Gibt true zurueck wenn der Fehler aus der Token-Pruefung stammt.
    ///
    /// Diese Fehler duerfen an der Aussengrenze nicht unterschieden
    /// werden; die Unterscheidung existiert nur fuer Diagnose-Logs.
    pub fn ist_token_fehler(&self) -> bool {
        matches!(
            self,
            Self::TokenAbgelaufen
                | Self::TokenSignaturUngueltig
                | Self::TokenMissgebildet
                | Self::SubjektUnbekannt(_)
        )
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_fehler_erkennung() {
        assert!(AuthError::TokenAbgelaufen.ist_token_fehler());
        assert!(AuthError::TokenSignaturUngueltig.ist_token_fehler());
        assert!(AuthError::TokenMissgebildet.ist_token_fehler());
        assert!(AuthError::SubjektUnbekannt("geist".into()).ist_token_fehler());
        assert!(!AuthError::UngueltigeAnmeldedaten.ist_token_fehler());
    }
}
