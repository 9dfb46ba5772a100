//! Statut des mises à jour asynchrones (`RequestRefreshStatus`, `RequestWriteStatus`)

use super::SERVICE_NS;
use crate::error::Result;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitosoap::{HasResultHeader, ResultHeader, SoapResult, encode_body_as};

/// Requête de statut, seul l'identifiant de corrélation est transmis
#[derive(Debug, Serialize)]
struct StatusRequest<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    #[serde(rename = "AktualisierungsId")]
    update_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResultWire {
    #[serde(rename = "Ergebnis")]
    code: i32,
    #[serde(rename = "ErgebnisText", default)]
    message: String,
    #[serde(rename = "Status", default)]
    status: i32,
}

/// Résultat de `RequestRefreshStatus`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "StatusResultWire")]
pub struct RefreshStatusResult {
    pub header: ResultHeader,
    pub status: i32,
}

/// Résultat de `RequestWriteStatus`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "StatusResultWire")]
pub struct WriteStatusResult {
    pub header: ResultHeader,
    pub status: i32,
}

impl From<StatusResultWire> for RefreshStatusResult {
    fn from(wire: StatusResultWire) -> Self {
        Self {
            header: ResultHeader::new(wire.code, wire.message),
            status: wire.status,
        }
    }
}

impl From<StatusResultWire> for WriteStatusResult {
    fn from(wire: StatusResultWire) -> Self {
        Self {
            header: ResultHeader::new(wire.code, wire.message),
            status: wire.status,
        }
    }
}

impl HasResultHeader for RefreshStatusResult {
    fn result_header(&self) -> &ResultHeader {
        &self.header
    }
}

impl HasResultHeader for WriteStatusResult {
    fn result_header(&self) -> &ResultHeader {
        &self.header
    }
}

impl SoapResult for RefreshStatusResult {
    const RESULT_PATH: &'static [&'static str] =
        &["RequestRefreshStatusResponse", "RequestRefreshStatusResult"];
}

impl SoapResult for WriteStatusResult {
    const RESULT_PATH: &'static [&'static str] =
        &["RequestWriteStatusResponse", "RequestWriteStatusResult"];
}

/// Corps d'une requête de statut, l'élément racine porte le nom de l'action
fn status_body(action: &str, update_id: &str) -> Result<String> {
    let request = StatusRequest {
        xmlns: SERVICE_NS,
        update_id,
    };
    Ok(encode_body_as(action, &request)?)
}

impl Session {
    /// Statut courant d'une demande de rafraîchissement
    pub fn request_refresh_status(&mut self, update_id: &str) -> Result<i32> {
        let body = status_body("RequestRefreshStatus", update_id)?;
        let result: RefreshStatusResult = self.send_request("RequestRefreshStatus", &body)?;
        debug!(update_id, status = result.status, "Refresh status");
        Ok(result.status)
    }

    /// Statut courant d'une demande d'écriture
    pub fn request_write_status(&mut self, update_id: &str) -> Result<i32> {
        let body = status_body("RequestWriteStatus", update_id)?;
        let result: WriteStatusResult = self.send_request("RequestWriteStatus", &body)?;
        debug!(update_id, status = result.status, "Write status");
        Ok(result.status)
    }
}
