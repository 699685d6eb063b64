//! Passwort-Hashing mit Argon2id
//!
//! Argon2id ist der empfohlene Algorithmus gemaess OWASP-Richtlinien.
//! Der erzeugte PHC-String traegt Algorithmus, Version, Parameter und
//! Salt in sich – die Kostenparameter koennen also spaeter angehoben
//! werden, ohne dass bereits gespeicherte Digests unpruefbar werden.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::error::AuthError;

/// Argon2id-Parameter gemaess OWASP-Empfehlungen (Stand 2024):
/// 64 MiB Speicher, 3 Iterationen, 1 Thread
fn argon2_instanz() -> Argon2<'static> {
    let params = Params::new(
        64 * 1024, // m_cost: 64 MiB
        3,         // t_cost: 3 Iterationen
        1,         // p_cost: 1 Thread
        None,      // output_len: Standard (32 Bytes)
    )
    .expect("Argon2-Parameter ungueltig");

    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params)
}

/// Hasht ein Passwort mit Argon2id und einem zufaelligen Salt.
///
/// Zwei Aufrufe mit demselben Passwort erzeugen verschiedene Digests.
pub fn passwort_hashen(passwort: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2_instanz()
        .hash_password(passwort.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswortHashing(e.to_string()))
}

/// Verifiziert ein Passwort gegen einen gespeicherten PHC-Digest.
///
/// Gibt bei Nichtuebereinstimmung ODER missgebildetem Digest `false`
/// zurueck – beide Eingaben koennen von aussen stammen, deshalb darf
/// die Pruefung niemals fehlschlagen statt abzulehnen.
pub fn passwort_verifizieren(passwort: &str, digest: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(fehler = %e, "Gespeicherter Digest nicht parsebar");
            return false;
        }
    };

    match argon2_instanz().verify_password(passwort.as_bytes(), &parsed) {
        Ok(()) => true,
        Err(argon2::password_hash::Error::Password) => false,
        Err(e) => {
            tracing::debug!(fehler = %e, "Passwort-Verifikation fehlgeschlagen");
            false
        }
    }
}
