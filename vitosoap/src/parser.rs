//! Parser SOAP pour les réponses du service

use super::{SoapBody, SoapEnvelope, SoapResult, local_name};
use crate::envelope::find_child;
use std::io::BufReader;
use tracing::trace;
use xmltree::Element;

/// Erreur de décodage d'une réponse SOAP
#[derive(Debug, thiserror::Error)]
pub enum SoapDecodeError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("Missing SOAP Envelope")]
    MissingEnvelope,

    #[error("Missing SOAP Body")]
    MissingBody,

    #[error("Missing element {0} in SOAP Body")]
    MissingElement(String),

    #[error("Cannot re-emit result element: {0}")]
    Emit(#[from] xmltree::Error),

    #[error("Result element does not match the expected shape: {0}")]
    Shape(#[from] quick_xml::de::DeError),
}

/// Parse une enveloppe SOAP complète
pub fn parse_soap_envelope(xml: &[u8]) -> Result<SoapEnvelope, SoapDecodeError> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if local_name(&root.name) != "Envelope" {
        return Err(SoapDecodeError::MissingEnvelope);
    }

    let body = find_child(&root, "Body").ok_or(SoapDecodeError::MissingBody)?;

    Ok(SoapEnvelope::new(SoapBody {
        content: body.clone(),
    }))
}

/// Décode l'élément résultat d'une réponse dans le type `R`.
///
/// L'élément est localisé par `R::RESULT_PATH` sous `Body`, puis désérialisé
/// avec `quick-xml`. Le code `Ergebnis` n'est pas interprété ici, voir
/// [`check_result`](crate::check_result).
pub fn decode_response<R: SoapResult>(xml: &[u8]) -> Result<R, SoapDecodeError> {
    let envelope = parse_soap_envelope(xml)?;

    let element = envelope
        .find_path(R::RESULT_PATH)
        .ok_or_else(|| SoapDecodeError::MissingElement(R::RESULT_PATH.join("/")))?;

    let mut buf = Vec::new();
    element.write(&mut buf)?;
    let fragment = String::from_utf8_lossy(&buf);
    trace!(element = %fragment, "Decoding SOAP result element");

    Ok(quick_xml::de::from_str(&fragment)?)
}
