//! # vitosoap - Codec SOAP pour le service Vitotrol
//!
//! Ce module implémente l'enveloppe SOAP 1.1 attendue par le web service
//! Vitotrol, ainsi que l'en-tête de résultat (`Ergebnis` / `ErgebnisText`)
//! présent dans chaque réponse.
//!
//! ## Fonctionnalités
//!
//! - Construction de requêtes : en-tête fixe + fragment + pied fixe
//! - Sérialisation des éléments de requête typés (`quick-xml` / serde)
//! - Parsing d'enveloppes, tolérant aux préfixes et namespaces du serveur
//! - Désérialisation des éléments résultat typés via un chemin déclaré
//! - Classification succès / erreur applicative via [`ResultHeader`]
//!
//! Aucune entrée/sortie réseau ici : voir la crate `vitotrol`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use vitosoap::{
//!     HasResultHeader, ResultHeader, SoapResult, build_soap_request, check_result,
//!     decode_response,
//! };
//!
//! #[derive(Deserialize)]
//! struct StatusWire {
//!     #[serde(rename = "Ergebnis")]
//!     code: i32,
//!     #[serde(rename = "ErgebnisText", default)]
//!     message: String,
//!     #[serde(rename = "Status")]
//!     status: i32,
//! }
//!
//! #[derive(Deserialize)]
//! #[serde(from = "StatusWire")]
//! struct StatusResult {
//!     header: ResultHeader,
//!     status: i32,
//! }
//!
//! impl From<StatusWire> for StatusResult {
//!     fn from(wire: StatusWire) -> Self {
//!         Self {
//!             header: ResultHeader::new(wire.code, wire.message),
//!             status: wire.status,
//!         }
//!     }
//! }
//!
//! impl HasResultHeader for StatusResult {
//!     fn result_header(&self) -> &ResultHeader {
//!         &self.header
//!     }
//! }
//!
//! impl SoapResult for StatusResult {
//!     const RESULT_PATH: &'static [&'static str] =
//!         &["RequestRefreshStatusResponse", "RequestRefreshStatusResult"];
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = build_soap_request("<GetDevices xmlns=\"http://www.e-controlnet.de/services/vii/\"/>");
//!     assert!(request.starts_with("<?xml"));
//!
//!     let raw = concat!(
//!         r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>"#,
//!         "<RequestRefreshStatusResponse><RequestRefreshStatusResult>",
//!         "<Ergebnis>0</Ergebnis><ErgebnisText>Kein Fehler</ErgebnisText><Status>4</Status>",
//!         "</RequestRefreshStatusResult></RequestRefreshStatusResponse>",
//!         "</soap:Body></soap:Envelope>",
//!     );
//!
//!     let result: StatusResult = decode_response(raw.as_bytes())?;
//!     let result = check_result(result)?;
//!     assert_eq!(result.status, 4);
//!     Ok(())
//! }
//! ```

mod builder;
mod envelope;
mod parser;
mod result;

pub use builder::{SoapEncodeError, build_soap_request, encode_body, encode_body_as};
pub use envelope::{SoapBody, SoapEnvelope, local_name};
pub use parser::{SoapDecodeError, decode_response, parse_soap_envelope};
pub use result::{HasResultHeader, ResultHeader, SoapResult, check_result};

macro_rules! soap_envelope_ns {
    () => {
        "http://schemas.xmlsoap.org/soap/envelope/"
    };
}

/// Namespace de l'enveloppe SOAP 1.1
pub const SOAP_ENVELOPE_NS: &str = soap_envelope_ns!();

/// Début fixe de toute enveloppe envoyée au service
pub const SOAP_ENVELOPE_HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    r#"<soap:Envelope xmlns:soap=""#,
    soap_envelope_ns!(),
    r#"" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
    "<soap:Body>"
);

/// Fin fixe de toute enveloppe envoyée au service
pub const SOAP_ENVELOPE_FOOTER: &str = "</soap:Body></soap:Envelope>";

/// Valeur de l'en-tête HTTP `Content-Type` des requêtes SOAP
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
