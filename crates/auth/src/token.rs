//! Zustandslose Identity-Tokens
//!
//! Ein Token ist ein kompakter, URL-sicherer String mit den Claims
//! `{sub, iat, exp}`, symmetrisch signiert mit dem prozessweiten
//! Schluessel. Der Server fuehrt keine Liste ausgestellter Tokens:
//! Gueltigkeit ergibt sich allein aus Signatur und Ablaufzeitpunkt.
//! Der Ablauf steht bei Ausstellung fest und ist nicht verlaengerbar –
//! wer weiter will, meldet sich neu an.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Claims eines Identity-Tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subjekt: der Benutzername
    pub sub: String,
    /// Ausstellungszeitpunkt (Unix-Sekunden)
    pub iat: i64,
    /// Ablaufzeitpunkt (Unix-Sekunden)
    pub exp: i64,
}

/// Codec zum Ausstellen und Pruefen von Identity-Tokens
///
/// Wird einmal beim Start aus der Konfiguration gebaut und danach
/// unveraendert geteilt. Ein Schluesselwechsel invalidiert alle zuvor
/// ausgestellten Tokens.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    header: Header,
    validation: Validation,
    gueltigkeit: chrono::Duration,
}

impl TokenCodec {
    /// Erstellt einen neuen Codec.
    ///
    /// `algorithmus` muss ein symmetrisches HMAC-Verfahren benennen
    /// ("HS256", "HS384" oder "HS512") – alles andere ist ein
    /// Konfigurationsfehler und schlaegt beim Start fehl.
    pub fn neu(
        schluessel: &str,
        algorithmus: &str,
        gueltigkeit: chrono::Duration,
    ) -> AuthResult<Self> {
        let alg: Algorithm = algorithmus
            .parse()
            .map_err(|_| AuthError::UnbekannterAlgorithmus(algorithmus.to_string()))?;

        if !matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(AuthError::UnbekannterAlgorithmus(algorithmus.to_string()));
        }

        let mut validation = Validation::new(alg);
        // Ablauf ist exakt, keine Kulanzsekunden
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(schluessel.as_bytes()),
            decoding: DecodingKey::from_secret(schluessel.as_bytes()),
            header: Header::new(alg),
            validation,
            gueltigkeit,
        })
    }

    /// Stellt ein Token fuer das gegebene Subjekt aus.
    pub fn ausstellen(&self, subjekt: &str) -> AuthResult<String> {
        let jetzt = Utc::now();
        let claims = TokenClaims {
            sub: subjekt.to_string(),
            iat: jetzt.timestamp(),
            exp: (jetzt + self.gueltigkeit).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding)
            .map_err(|e| AuthError::intern(format!("Token-Encoding fehlgeschlagen: {e}")))
    }

    /// Prueft ein Token und gibt die Claims zurueck.
    ///
    /// Fehlerabbildung:
    /// - abgelaufen        -> [`AuthError::TokenAbgelaufen`]
    /// - Signatur falsch   -> [`AuthError::TokenSignaturUngueltig`]
    /// - alles andere      -> [`AuthError::TokenMissgebildet`]
    pub fn pruefen(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|daten| daten.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenAbgelaufen,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AuthError::TokenSignaturUngueltig
                }
                _ => AuthError::TokenMissgebildet,
            })
    }

    /// Gibt die konfigurierte Token-Lebensdauer zurueck
    pub fn gueltigkeit(&self) -> chrono::Duration {
        self.gueltigkeit
    }
}
