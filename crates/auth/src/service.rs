//! Auth-Service fuer Kaufhaus
//!
//! Zentraler Service fuer Registrierung, Anmeldung, Token-Ausstellung
//! und die Aufloesung eines Tokens zur Benutzer-Identitaet. Repository
//! und Token-Codec werden beim Start injiziert; der Service selbst ist
//! zustandslos und kann beliebig parallel genutzt werden.

use std::sync::Arc;

use kaufhaus_core::BenutzerId;
use kaufhaus_db::{
    models::{BenutzerRecord, NeuerBenutzer},
    repository::UserRepository,
};

use crate::{
    error::{AuthError, AuthResult},
    password::{passwort_hashen, passwort_verifizieren},
    token::TokenCodec,
};

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    codec: TokenCodec,
}

impl<U: UserRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    pub fn neu(user_repo: Arc<U>, codec: TokenCodec) -> Self {
        Self { user_repo, codec }
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Prueft zuerst ob der Benutzername vergeben ist. Verliert diese
    /// Pruefung ein Rennen gegen eine gleichzeitige Registrierung,
    /// faengt der UNIQUE-Constraint der Datenbank den Duplikatfall ab –
    /// beides wird als [`AuthError::BenutzernameVergeben`] gemeldet.
    pub async fn registrieren(
        &self,
        username: &str,
        passwort: &str,
    ) -> AuthResult<BenutzerRecord> {
        if self.user_repo.get_by_name(username).await?.is_some() {
            return Err(AuthError::BenutzernameVergeben(username.to_string()));
        }

        let passwort_hash = passwort_hashen(passwort)?;

        let benutzer = self
            .user_repo
            .create(NeuerBenutzer {
                username,
                password_hash: &passwort_hash,
            })
            .await
            .map_err(|e| {
                if e.ist_eindeutigkeit() {
                    AuthError::BenutzernameVergeben(username.to_string())
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Neuer Benutzer registriert"
        );

        Ok(benutzer)
    }

    /// Prueft Benutzername und Passwort und gibt den Benutzer zurueck
    ///
    /// Unbekannter Benutzer und falsches Passwort sind von aussen nicht
    /// unterscheidbar: beide enden in
    /// [`AuthError::UngueltigeAnmeldedaten`].
    pub async fn anmelden(&self, username: &str, passwort: &str) -> AuthResult<BenutzerRecord> {
        let benutzer = self
            .user_repo
            .get_by_name(username)
            .await?
            .ok_or(AuthError::UngueltigeAnmeldedaten)?;

        if !passwort_verifizieren(passwort, &benutzer.password_hash) {
            tracing::warn!(username = %username, "Fehlgeschlagener Anmeldeversuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        self.user_repo.update_last_login(benutzer.id).await?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Benutzer angemeldet"
        );

        Ok(benutzer)
    }

    /// Stellt ein Identity-Token fuer den gegebenen Benutzer aus
    pub fn token_ausstellen(&self, benutzer: &BenutzerRecord) -> AuthResult<String> {
        self.codec.ausstellen(&benutzer.username)
    }

    /// Loest ein Token zur Benutzer-Identitaet auf
    ///
    /// Prueft Signatur und Ablauf, laedt dann das Subjekt aus dem
    /// User-Store. Existiert der Benutzer nicht mehr (z.B. nach
    /// Loeschung), ist das Token wertlos: [`AuthError::SubjektUnbekannt`].
    pub async fn identitaet_aufloesen(&self, token: &str) -> AuthResult<BenutzerRecord> {
        let claims = self.codec.pruefen(token)?;

        self.user_repo
            .get_by_name(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::SubjektUnbekannt(claims.sub.clone()))
    }

    /// Aktualisiert die Anmeldedaten eines Benutzers
    ///
    /// Benutzername und Passwort-Hash aendern sich als eine Einheit.
    /// Bereits ausgestellte Tokens bleiben bis zu ihrem Ablauf gueltig,
    /// sofern ihr Subjekt weiterhin aufloesbar ist.
    pub async fn anmeldedaten_aktualisieren(
        &self,
        user_id: BenutzerId,
        username: &str,
        passwort: &str,
    ) -> AuthResult<BenutzerRecord> {
        let passwort_hash = passwort_hashen(passwort)?;

        let benutzer = self
            .user_repo
            .update_credentials(user_id, username, &passwort_hash)
            .await
            .map_err(|e| {
                if e.ist_eindeutigkeit() {
                    AuthError::BenutzernameVergeben(username.to_string())
                } else if matches!(e, kaufhaus_db::DbError::NichtGefunden(_)) {
                    AuthError::BenutzerNichtGefunden(user_id.to_string())
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(user_id = %user_id, "Anmeldedaten aktualisiert");

        Ok(benutzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    use kaufhaus_db::{DbError, DbResult};

    // Minimaler In-Memory UserRepository fuer Tests
    #[derive(Default)]
    struct TestUserRepo {
        benutzer: Mutex<Vec<BenutzerRecord>>,
    }

    impl UserRepository for TestUserRepo {
        async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            if benutzer.iter().any(|u| u.username == data.username) {
                return Err(DbError::Eindeutigkeit(data.username.to_string()));
            }
            let record = BenutzerRecord {
                id: BenutzerId::new(),
                username: data.username.to_string(),
                password_hash: data.password_hash.to_string(),
                created_at: Utc::now(),
                last_login: None,
            };
            benutzer.push(record.clone());
            Ok(record)
        }

        async fn get_by_id(&self, id: BenutzerId) -> DbResult<Option<BenutzerRecord>> {
            Ok(self
                .benutzer
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>> {
            Ok(self
                .benutzer
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn update_credentials(
            &self,
            id: BenutzerId,
            username: &str,
            password_hash: &str,
        ) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            if benutzer
                .iter()
                .any(|u| u.username == username && u.id != id)
            {
                return Err(DbError::Eindeutigkeit(username.to_string()));
            }
            let user = benutzer
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| DbError::nicht_gefunden(id.to_string()))?;
            user.username = username.to_string();
            user.password_hash = password_hash.to_string();
            Ok(user.clone())
        }

        async fn update_last_login(&self, id: BenutzerId) -> DbResult<()> {
            let mut benutzer = self.benutzer.lock().unwrap();
            if let Some(user) = benutzer.iter_mut().find(|u| u.id == id) {
                user.last_login = Some(Utc::now());
            }
            Ok(())
        }

        async fn delete(&self, id: BenutzerId) -> DbResult<bool> {
            let mut benutzer = self.benutzer.lock().unwrap();
            let vorher = benutzer.len();
            benutzer.retain(|u| u.id != id);
            Ok(benutzer.len() < vorher)
        }

        async fn list(&self) -> DbResult<Vec<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().clone())
        }
    }

    fn test_service() -> AuthService<TestUserRepo> {
        let repo = Arc::new(TestUserRepo::default());
        let codec = TokenCodec::neu("test_geheimnis", "HS256", chrono::Duration::minutes(400))
            .expect("Codec-Erstellung fehlgeschlagen");
        AuthService::neu(repo, codec)
    }

    #[tokio::test]
    async fn registrieren_und_anmelden() {
        let service = test_service();

        let user = service
            .registrieren("testuser", "sicheres_passwort!")
            .await
            .expect("Registrierung fehlgeschlagen");

        assert_eq!(user.username, "testuser");
        assert_ne!(
            user.password_hash, "sicheres_passwort!",
            "Klartext darf niemals gespeichert werden"
        );

        let angemeldeter = service
            .anmelden("testuser", "sicheres_passwort!")
            .await
            .expect("Anmeldung fehlgeschlagen");

        assert_eq!(angemeldeter.id, user.id);
    }

    #[tokio::test]
    async fn doppelte_registrierung_schlaegt_fehl() {
        let service = test_service();
        service.registrieren("duplikat", "passwort").await.unwrap();

        let ergebnis = service.registrieren("duplikat", "anderes").await;
        assert!(matches!(ergebnis, Err(AuthError::BenutzernameVergeben(_))));

        // Genau ein Datensatz bleibt bestehen
        let alle = service.user_repo.list().await.unwrap();
        assert_eq!(alle.len(), 1);
    }

    #[tokio::test]
    async fn verlorenes_rennen_wird_als_duplikat_gemeldet() {
        // Simuliert den Fall, dass die Vorabpruefung nichts sieht, der
        // Store die Eindeutigkeit aber beim Einfuegen durchsetzt
        struct RennenRepo {
            inner: TestUserRepo,
        }

        impl UserRepository for RennenRepo {
            async fn create(&self, _data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
                Err(DbError::Eindeutigkeit("verlorenes Rennen".into()))
            }
            async fn get_by_id(&self, id: BenutzerId) -> DbResult<Option<BenutzerRecord>> {
                self.inner.get_by_id(id).await
            }
            async fn get_by_name(&self, _username: &str) -> DbResult<Option<BenutzerRecord>> {
                Ok(None)
            }
            async fn update_credentials(
                &self,
                id: BenutzerId,
                username: &str,
                password_hash: &str,
            ) -> DbResult<BenutzerRecord> {
                self.inner.update_credentials(id, username, password_hash).await
            }
            async fn update_last_login(&self, id: BenutzerId) -> DbResult<()> {
                self.inner.update_last_login(id).await
            }
            async fn delete(&self, id: BenutzerId) -> DbResult<bool> {
                self.inner.delete(id).await
            }
            async fn list(&self) -> DbResult<Vec<BenutzerRecord>> {
                self.inner.list().await
            }
        }

        let repo = Arc::new(RennenRepo {
            inner: TestUserRepo::default(),
        });
        let codec =
            TokenCodec::neu("test_geheimnis", "HS256", chrono::Duration::minutes(400)).unwrap();
        let service = AuthService::neu(repo, codec);

        let ergebnis = service.registrieren("wettlauf", "passwort").await;
        assert!(matches!(ergebnis, Err(AuthError::BenutzernameVergeben(_))));
    }

    #[tokio::test]
    async fn falsches_passwort_und_geist_sind_ununterscheidbar() {
        let service = test_service();
        service.registrieren("alice", "richtig").await.unwrap();

        let falsches_passwort = service.anmelden("alice", "falsch").await;
        let unbekannter_name = service.anmelden("geist", "irgendwas").await;

        assert!(matches!(
            falsches_passwort,
            Err(AuthError::UngueltigeAnmeldedaten)
        ));
        assert!(matches!(
            unbekannter_name,
            Err(AuthError::UngueltigeAnmeldedaten)
        ));
    }

    #[tokio::test]
    async fn token_ausstellen_und_identitaet_aufloesen() {
        let service = test_service();
        let user = service.registrieren("bob", "pw123").await.unwrap();

        let token = service.token_ausstellen(&user).unwrap();
        let aufgeloest = service.identitaet_aufloesen(&token).await.unwrap();

        assert_eq!(aufgeloest.username, "bob");
        assert_eq!(aufgeloest.id, user.id);
    }

    #[tokio::test]
    async fn geloeschter_benutzer_macht_token_wertlos() {
        let service = test_service();
        let user = service.registrieren("fluechtig", "pw").await.unwrap();
        let token = service.token_ausstellen(&user).unwrap();

        service.user_repo.delete(user.id).await.unwrap();

        let ergebnis = service.identitaet_aufloesen(&token).await;
        assert!(matches!(ergebnis, Err(AuthError::SubjektUnbekannt(_))));
    }

    #[tokio::test]
    async fn anmeldedaten_aktualisieren_als_einheit() {
        let service = test_service();
        let user = service.registrieren("carol", "altes_pw").await.unwrap();

        service
            .anmeldedaten_aktualisieren(user.id, "caroline", "neues_pw")
            .await
            .unwrap();

        // Altes Passwort und alter Name funktionieren nicht mehr
        assert!(service.anmelden("carol", "altes_pw").await.is_err());
        assert!(service.anmelden("caroline", "altes_pw").await.is_err());

        // Neue Kombination funktioniert
        let angemeldet = service.anmelden("caroline", "neues_pw").await.unwrap();
        assert_eq!(angemeldet.id, user.id);
    }

    #[tokio::test]
    async fn altes_token_nach_namensaenderung_wertlos() {
        // Das Subjekt ist der Benutzername: eine Namensaenderung macht
        // ausstehende Tokens unaufloesbar (dokumentiertes Verhalten)
        let service = test_service();
        let user = service.registrieren("vorher", "pw").await.unwrap();
        let token = service.token_ausstellen(&user).unwrap();

        service
            .anmeldedaten_aktualisieren(user.id, "nachher", "pw")
            .await
            .unwrap();

        let ergebnis = service.identitaet_aufloesen(&token).await;
        assert!(matches!(ergebnis, Err(AuthError::SubjektUnbekannt(_))));
    }

    #[tokio::test]
    async fn passwortwechsel_invalidiert_token_nicht() {
        // Zustandslose Tokens: ein Passwortwechsel (bei gleichem Namen)
        // laesst ausgestellte Tokens bis zum Ablauf gueltig
        let service = test_service();
        let user = service.registrieren("dauerhaft", "pw1").await.unwrap();
        let token = service.token_ausstellen(&user).unwrap();

        service
            .anmeldedaten_aktualisieren(user.id, "dauerhaft", "pw2")
            .await
            .unwrap();

        let aufgeloest = service.identitaet_aufloesen(&token).await.unwrap();
        assert_eq!(aufgeloest.id, user.id);
    }
}
