//! kaufhaus-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und verdrahtet Datenbank, Auth-Service
//! und REST-API zu einem lauffaehigen Prozess.

pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result};

use kaufhaus_api::{ApiServer, ApiServerKonfig, ApiState};
use kaufhaus_auth::{AuthService, TokenCodec};
use kaufhaus_db::{DatabaseConfig, SqliteDb};

use config::ServerConfig;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
    signatur_schluessel: String,
}

impl Server {
    /// Erstellt einen neuen Server aus Konfiguration und Signatur-Schluessel
    ///
    /// Der Schluessel wird genau einmal beim Start uebergeben und lebt
    /// danach unveraendert im Token-Codec. Ein Wechsel invalidiert alle
    /// zuvor ausgestellten Tokens.
    pub fn neu(config: ServerConfig, signatur_schluessel: String) -> Self {
        Self {
            config,
            signatur_schluessel,
        }
    }

    /// Startet alle Server-Subsysteme und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Datenbankverbindung herstellen, Migrationen ausfuehren
    /// 2. Token-Codec und Auth-Service bauen
    /// 3. REST-API starten
    /// 4. Auf Ctrl-C / SIGTERM warten
    pub async fn starten(self) -> Result<()> {
        tracing::info!(
            server_name = %self.config.server.name,
            api = %self.config.api_bind_adresse(),
            "Server startet"
        );

        let db = SqliteDb::oeffnen(&DatabaseConfig {
            url: self.config.datenbank.url.clone(),
            max_verbindungen: self.config.datenbank.max_verbindungen,
            sqlite_wal: self.config.datenbank.sqlite_wal,
        })
        .await
        .context("Datenbankverbindung fehlgeschlagen")?;

        let codec = TokenCodec::neu(
            &self.signatur_schluessel,
            &self.config.auth.algorithmus,
            chrono::Duration::minutes(self.config.auth.token_gueltigkeit_minuten),
        )
        .context("Token-Codec konnte nicht erstellt werden")?;

        let auth = Arc::new(AuthService::neu(Arc::new(db.clone()), codec));
        let state = ApiState::neu(auth, db);

        let api = ApiServer::neu(ApiServerKonfig {
            bind_addr: self
                .config
                .api_bind_adresse()
                .parse()
                .context("Ungueltige Bind-Adresse")?,
            cors_origins: self.config.netzwerk.cors_origins.clone(),
        });

        let mut api_task = tokio::spawn(api.starten(state));

        tracing::info!("Server laeuft. Warte auf Shutdown-Signal (Ctrl-C)...");

        tokio::select! {
            ergebnis = &mut api_task => {
                ergebnis.context("API-Task abgestuerzt")??;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
                api_task.abort();
            }
        }

        Ok(())
    }
}
