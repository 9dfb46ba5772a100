//! En-tête de résultat applicatif (`Ergebnis` / `ErgebnisText`)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Code `Ergebnis` signifiant le succès
pub const RESULT_OK: i32 = 0;

/// En-tête présent dans chaque réponse du service.
///
/// Un code non nul est une erreur applicative ; l'en-tête lui-même sert
/// alors de valeur d'erreur.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[error("service error {code}: {message}")]
pub struct ResultHeader {
    /// Code d'erreur (`Ergebnis`), 0 en cas de succès
    #[serde(rename = "Ergebnis")]
    pub code: i32,

    /// Message lisible (`ErgebnisText`), `"Kein Fehler"` en cas de succès
    #[serde(rename = "ErgebnisText", default)]
    pub message: String,
}

impl ResultHeader {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == RESULT_OK
    }
}

/// Accès à l'en-tête de résultat embarqué dans une réponse
pub trait HasResultHeader {
    fn result_header(&self) -> &ResultHeader;
}

/// Élément résultat d'une action, localisable sous le `Body` SOAP
pub trait SoapResult: DeserializeOwned + HasResultHeader {
    /// Chemin de l'élément sous `Body`, par noms locaux
    /// (ex: `&["LoginResponse", "LoginResult"]`)
    const RESULT_PATH: &'static [&'static str];
}

/// Transforme un code `Ergebnis` non nul en erreur.
///
/// Seul point de passage entre « le service a refusé » et le canal d'erreur.
pub fn check_result<R: HasResultHeader>(response: R) -> Result<R, ResultHeader> {
    let header = response.result_header();
    if header.is_success() {
        Ok(response)
    } else {
        debug!(code = header.code, message = %header.message, "Service returned an error");
        Err(header.clone())
    }
}
