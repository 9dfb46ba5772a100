//! Couche d'accès au web service SOAP
//!
//! [`Session::send_request`] est le moteur générique : chaque opération typée
//! ne fait que fournir son action, son élément de requête et son type résultat.

pub mod auth;
pub mod devices;
pub mod status;

use crate::error::{Result, VitotrolError};
use crate::session::Session;
use tracing::{debug, warn};
use url::Url;
use vitosoap::{SOAP_CONTENT_TYPE, SoapResult, build_soap_request, check_result, decode_response};

/// Base des en-têtes `SOAPAction`, suivie du nom de l'action
pub const SOAP_ACTION_BASE: &str = "http://www.e-controlnet.de/services/vii/";

/// Namespace des éléments de requête
pub(crate) const SERVICE_NS: &str = SOAP_ACTION_BASE;

impl Session {
    /// Invoque une action SOAP et décode son élément résultat.
    ///
    /// - `action`: nom de l'action, ex: "GetDevices"
    /// - `body`: fragment XML de l'élément de requête, inséré tel quel
    ///
    /// Les cookies reçus sont intégrés à la session dès que le statut HTTP
    /// est valide, même si le décodage échoue ensuite. Un seul essai.
    pub fn send_request<R: SoapResult>(&mut self, action: &str, body: &str) -> Result<R> {
        // 1. Resolve endpoint before any network I/O
        let url = Url::parse(&self.config.endpoint).map_err(|source| {
            VitotrolError::BadEndpoint {
                url: self.config.endpoint.clone(),
                source,
            }
        })?;

        // 2. Build headers and envelope
        let soap_action = format!("{SOAP_ACTION_BASE}{action}");
        let payload = build_soap_request(body);

        debug!(action = %action, url = %url, "Sending SOAP request");
        if self.config.debug {
            debug!(action = %action, request = %payload, "SOAP request body");
        }

        let mut request = self
            .agent
            .post(url.as_str())
            .header("Content-Type", SOAP_CONTENT_TYPE)
            .header("SOAPAction", &soap_action);

        if let Some(cookie) = self.cookies.header_value() {
            request = request.header("Cookie", &cookie);
        }

        // 3. Send
        let mut response = request
            .send(payload)
            .map_err(|e| VitotrolError::transport(action, e))?;

        // 4. HTTP status, body left untouched on failure
        let status = response.status();
        debug!(action = %action, status = %status, "SOAP response received");

        if !status.is_success() {
            warn!(action = %action, status = %status, "SOAP request failed");
            return Err(VitotrolError::HttpStatus {
                action: action.to_string(),
                status: status.as_u16(),
            });
        }

        // 5. Session-sticky cookies
        for value in response.headers().get_all("set-cookie") {
            match value.to_str() {
                Ok(cookie) => self.cookies.merge_set_cookie(cookie),
                Err(_) => warn!(action = %action, "Ignoring non ASCII Set-Cookie header"),
            }
        }

        let raw_body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| VitotrolError::transport(action, e))?;

        if self.config.debug {
            let text = String::from_utf8_lossy(&raw_body);
            debug!(action = %action, response = %text, "SOAP response body");
        }

        // 6. Decode, invalid encodings included
        let result: R = decode_response(&raw_body).map_err(|e| {
            warn!(action = %action, error = %e, "Cannot decode SOAP response");
            VitotrolError::decode(action, e)
        })?;

        // 7. Application-level result
        check_result(result).map_err(|header| {
            warn!(action = %action, code = header.code, message = %header.message, "Service error");
            VitotrolError::Application(header)
        })
    }
}
