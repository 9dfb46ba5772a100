//! Gestion des erreurs pour le client Vitotrol

use thiserror::Error;
use vitosoap::{ResultHeader, SoapDecodeError, SoapEncodeError};

/// Type Result personnalisé pour vitotrol
pub type Result<T> = std::result::Result<T, VitotrolError>;

/// Erreurs possibles lors d'un appel au service Vitotrol
///
/// Aucune erreur n'est réessayée par le client : la politique de retry
/// appartient à l'appelant.
#[derive(Error, Debug)]
pub enum VitotrolError {
    /// URL du service invalide, détectée avant tout accès réseau
    #[error("Invalid endpoint URL {url}: {source}")]
    BadEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connexion impossible, schéma non supporté, lecture du corps interrompue
    #[error("HTTP error when sending {action}: {source}")]
    Transport {
        action: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Statut HTTP hors 2xx, le corps n'est pas décodé
    #[error("{action} failed with HTTP status {status}")]
    HttpStatus { action: String, status: u16 },

    /// Élément de requête non sérialisable
    #[error(transparent)]
    Encode(#[from] SoapEncodeError),

    /// Réponse illisible ou de forme inattendue
    #[error("Cannot decode {action} response: {source}")]
    Decode {
        action: String,
        #[source]
        source: SoapDecodeError,
    },

    /// Le service a répondu avec un code `Ergebnis` non nul
    #[error(transparent)]
    Application(#[from] ResultHeader),

    /// Le statut n'a pas atteint l'état terminal dans le nombre d'essais imparti
    #[error("Update {update_id} still pending after {attempts} attempts (last status {last_status})")]
    PollExhausted {
        update_id: String,
        attempts: u32,
        last_status: i32,
    },
}

impl VitotrolError {
    pub(crate) fn transport(action: &str, source: ureq::Error) -> Self {
        Self::Transport {
            action: action.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn decode(action: &str, source: SoapDecodeError) -> Self {
        Self::Decode {
            action: action.to_string(),
            source,
        }
    }

    /// Vérifie si l'erreur vient de la couche HTTP (connexion ou statut)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }

    /// Vérifie si la réponse n'a pas pu être décodée
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Retourne l'en-tête de résultat si le service a refusé l'appel
    pub fn application_error(&self) -> Option<&ResultHeader> {
        match self {
            Self::Application(header) => Some(header),
            _ => None,
        }
    }

    /// Statut HTTP si l'erreur en porte un
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_keeps_header() {
        let err = VitotrolError::from(ResultHeader::new(42, "ERROR!!!"));

        assert_eq!(err.application_error(), Some(&ResultHeader::new(42, "ERROR!!!")));
        assert!(!err.is_transport());
        assert!(!err.is_decode());
        assert_eq!(err.to_string(), "service error 42: ERROR!!!");
    }

    #[test]
    fn test_http_status_is_transport() {
        let err = VitotrolError::HttpStatus {
            action: "Login".to_string(),
            status: 500,
        };

        assert!(err.is_transport());
        assert_eq!(err.http_status(), Some(500));
        assert!(err.application_error().is_none());
    }
}
