//! Module d'authentification (`Login`)

use super::SERVICE_NS;
use crate::error::Result;
use crate::models::UserProfile;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use tracing::info;
use vitosoap::{HasResultHeader, ResultHeader, SoapResult, encode_body};

/// Identifiant d'application attendu par le service
pub const APP_ID: &str = "prod";

/// Version du client annoncée au service
pub const APP_VERSION: &str = "4.3.1";

/// Système d'exploitation annoncé au service
pub const PLATFORM: &str = "Android";

/// Élément `Login` ; l'ordre des champs est celui attendu par le service
#[derive(Debug, Serialize)]
#[serde(rename = "Login")]
struct LoginRequest<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    #[serde(rename = "AppId")]
    app_id: &'a str,
    #[serde(rename = "AppVersion")]
    app_version: &'a str,
    #[serde(rename = "Passwort")]
    password: &'a str,
    #[serde(rename = "Betriebssystem")]
    system: &'a str,
    #[serde(rename = "Benutzer")]
    login: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResultWire {
    #[serde(rename = "Ergebnis")]
    code: i32,
    #[serde(rename = "ErgebnisText", default)]
    message: String,
    #[serde(rename = "TechVersion", default)]
    tech_version: String,
    #[serde(rename = "Anrede", default)]
    salutation: i32,
    #[serde(rename = "Vorname", default)]
    first_name: String,
    #[serde(rename = "Nachname", default)]
    last_name: String,
}

/// Résultat de `Login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "LoginResultWire")]
pub struct LoginResult {
    pub header: ResultHeader,
    pub profile: UserProfile,
}

impl From<LoginResultWire> for LoginResult {
    fn from(wire: LoginResultWire) -> Self {
        Self {
            header: ResultHeader::new(wire.code, wire.message),
            profile: UserProfile {
                tech_version: wire.tech_version,
                salutation: wire.salutation,
                first_name: wire.first_name,
                last_name: wire.last_name,
            },
        }
    }
}

impl HasResultHeader for LoginResult {
    fn result_header(&self) -> &ResultHeader {
        &self.header
    }
}

impl SoapResult for LoginResult {
    const RESULT_PATH: &'static [&'static str] = &["LoginResponse", "LoginResult"];
}

impl Session {
    /// Authentifie la session avec les identifiants du compte
    ///
    /// # Errors
    ///
    /// * `VitotrolError::Application` - identifiants refusés par le service
    /// * erreurs de transport ou de décodage de [`Session::send_request`]
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        info!("Attempting to login to Vitotrol as {}", username);

        let body = encode_body(&LoginRequest {
            xmlns: SERVICE_NS,
            app_id: APP_ID,
            app_version: APP_VERSION,
            password,
            system: PLATFORM,
            login: username,
        })?;

        let result: LoginResult = self.send_request("Login", &body)?;

        info!(
            user = %result.profile.display_name(),
            tech_version = %result.profile.tech_version,
            "Login successful"
        );

        self.profile = Some(result.profile);
        self.authenticated = true;
        Ok(())
    }
}
