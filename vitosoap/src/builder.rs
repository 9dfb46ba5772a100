//! Construction des requêtes SOAP

use crate::{SOAP_ENVELOPE_FOOTER, SOAP_ENVELOPE_HEADER};
use serde::Serialize;

/// Erreur de sérialisation d'un élément de requête
#[derive(Debug, thiserror::Error)]
#[error("SOAP request serialization error: {0}")]
pub struct SoapEncodeError(#[from] quick_xml::SeError);

/// Enveloppe un fragment XML dans l'enveloppe SOAP fixe du service.
///
/// Le fragment n'est pas validé : l'appelant fournit un XML bien formé.
pub fn build_soap_request(fragment: &str) -> String {
    let mut xml =
        String::with_capacity(SOAP_ENVELOPE_HEADER.len() + fragment.len() + SOAP_ENVELOPE_FOOTER.len());
    xml.push_str(SOAP_ENVELOPE_HEADER);
    xml.push_str(fragment);
    xml.push_str(SOAP_ENVELOPE_FOOTER);
    xml
}

/// Sérialise un élément de requête typé en fragment XML.
///
/// Le nom de l'élément racine est celui de la structure (ou son `rename`),
/// les champs préfixés par `@` deviennent des attributs.
pub fn encode_body<T: Serialize>(body: &T) -> Result<String, SoapEncodeError> {
    Ok(quick_xml::se::to_string(body)?)
}

/// Comme [`encode_body`], avec un nom d'élément racine choisi à l'exécution
pub fn encode_body_as<T: Serialize>(root: &str, body: &T) -> Result<String, SoapEncodeError> {
    Ok(quick_xml::se::to_string_with_root(root, body)?)
}
