//! kaufhaus-auth – Authentifizierung und Identitaet
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - Zustandslose, signierte Identity-Tokens mit fester Lebensdauer
//! - AuthService (Registrierung, Anmeldung, Token-Ausstellung,
//!   Identitaets-Aufloesung, Anmeldedaten-Aktualisierung)
//!
//! Der Service haelt keinerlei Zustand ueber ausgestellte Tokens: ein
//! Token ist genau dann gueltig, wenn Signatur und Ablaufzeitpunkt
//! stimmen. Jeder Prozess mit demselben Signatur-Schluessel kann Tokens
//! jedes anderen Prozesses pruefen.

pub mod error;
pub mod password;
pub mod service;
pub mod token;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use password::{passwort_hashen, passwort_verifizieren};
pub use service::AuthService;
pub use token::{TokenClaims, TokenCodec};
