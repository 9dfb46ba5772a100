//! Structures de l'enveloppe SOAP reçue

use xmltree::Element;

/// Enveloppe SOAP d'une réponse
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    /// Corps SOAP contenant l'élément réponse
    pub body: SoapBody,
}

/// Corps SOAP
#[derive(Debug, Clone)]
pub struct SoapBody {
    /// Élément `Body` tel que reçu
    pub content: Element,
}

impl SoapEnvelope {
    pub fn new(body: SoapBody) -> Self {
        Self { body }
    }

    /// Descend depuis `Body` en suivant les noms locaux de `path`.
    ///
    /// Les préfixes et namespaces du serveur sont ignorés :
    /// `["LoginResponse", "LoginResult"]` trouve aussi bien
    /// `<LoginResponse xmlns="...">` que `<ns1:LoginResponse>`.
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        path.iter()
            .try_fold(&self.body.content, |parent, name| find_child(parent, name))
    }
}

/// Retourne le nom local d'un élément, sans préfixe.
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

pub(crate) fn find_child<'a>(parent: &'a Element, name: &str) -> Option<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .find(|elem| local_name(&elem.name) == name)
}
