//! Session avec le service Vitotrol
//!
//! Une session porte l'affinité avec le serveur (cookies), l'état issu du
//! login et la dernière liste d'appareils. Une seule requête à la fois par
//! session ; des sessions distinctes sont indépendantes.

use crate::cookies::CookieJar;
use crate::models::{Device, DeviceId, UserProfile};
use tracing::debug;
use ureq::Agent;
use vitoconfig::{ClientConfig, Config};

/// Session cliente du web service
pub struct Session {
    pub(crate) config: ClientConfig,
    pub(crate) agent: Agent,
    pub(crate) cookies: CookieJar,
    pub(crate) devices: Vec<Device>,
    pub(crate) profile: Option<UserProfile>,
    pub(crate) authenticated: bool,
}

impl Session {
    /// Crée une session non authentifiée
    pub fn new(config: ClientConfig) -> Self {
        debug!(endpoint=%config.endpoint, timeout=?config.timeout(), "Creating Vitotrol session");

        // Les statuts 4xx/5xx sont traités par le dispatcher, pas par ureq
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .into();

        Self {
            config,
            agent,
            cookies: CookieJar::new(),
            devices: Vec::new(),
            profile: None,
            authenticated: false,
        }
    }

    /// Crée une session vers une autre URL, avec les réglages par défaut
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(ClientConfig::with_endpoint(endpoint))
    }

    /// Crée une session depuis la configuration chargée par `vitoconfig`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.client.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    /// Active le log des corps de requêtes et réponses
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Cookies renvoyés à chaque requête
    pub fn cookies(&self) -> &[String] {
        self.cookies.as_slice()
    }

    pub fn set_cookies<I, S>(&mut self, cookies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cookies.replace(cookies);
    }

    /// Vérifie si un `Login` a réussi sur cette session
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Profil renvoyé par le dernier `Login` réussi
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Appareils issus du dernier `GetDevices`
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn device(&self, device_id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.device_id == device_id)
    }

    pub fn device_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.device_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn device(id: DeviceId, name: &str) -> Device {
        Device {
            location_id: 1,
            location_name: "Paris".to_string(),
            device_id: id,
            device_name: name.to_string(),
            has_error: false,
            is_connected: true,
            attributes: HashMap::new(),
            timesheets: HashMap::new(),
        }
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::with_endpoint("http://127.0.0.1:1/");

        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());
        assert!(session.devices().is_empty());
        assert!(session.cookies().is_empty());
        assert_eq!(session.endpoint(), "http://127.0.0.1:1/");
        assert!(!session.debug());
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        let session = Session::from_config(&config);
        assert_eq!(session.endpoint(), vitoconfig::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_device_lookup() {
        let mut session = Session::with_endpoint("http://127.0.0.1:1/");
        session.devices = vec![device(40213, "VT 200 (HO1C)"), device(7, "Other")];

        assert_eq!(session.device(7).map(|d| d.device_name.as_str()), Some("Other"));
        assert_eq!(
            session.device_by_name("VT 200 (HO1C)").map(|d| d.device_id),
            Some(40213)
        );
        assert!(session.device(1).is_none());
    }

    #[test]
    fn test_set_cookies() {
        let mut session = Session::with_endpoint("http://127.0.0.1:1/");
        session.set_cookies(["foo=123", "bar=456"]);
        assert_eq!(session.cookies(), ["foo=123", "bar=456"]);
    }
}
