//! Cookies de session
//!
//! Le service associe une session à des cookies (`ASP.NET_SessionId`...) qu'il
//! faut renvoyer à chaque requête.

/// Ensemble ordonné de cookies `nom=valeur`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.cookies
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Remplace tout le contenu du jar
    pub fn replace<I, S>(&mut self, cookies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cookies = cookies.into_iter().map(Into::into).collect();
    }

    /// Intègre la valeur d'un en-tête `Set-Cookie`.
    ///
    /// Seule la paire `nom=valeur` est conservée, les attributs (`path`,
    /// `HttpOnly`...) sont ignorés. Un cookie de même nom est remplacé sur
    /// place, sinon le cookie est ajouté en fin de liste.
    pub fn merge_set_cookie(&mut self, header: &str) {
        let pair = header.split(';').next().unwrap_or_default().trim();
        let Some(name) = cookie_name(pair) else {
            return;
        };

        match self
            .cookies
            .iter_mut()
            .find(|existing| cookie_name(existing) == Some(name))
        {
            Some(existing) => *existing = pair.to_string(),
            None => self.cookies.push(pair.to_string()),
        }
    }

    /// Valeur de l'en-tête `Cookie`, `None` si le jar est vide
    pub fn header_value(&self) -> Option<String> {
        (!self.cookies.is_empty()).then(|| self.cookies.join("; "))
    }
}

fn cookie_name(pair: &str) -> Option<&str> {
    let name = pair.split_once('=').map_or(pair, |(name, _)| name).trim();
    (!name.is_empty()).then_some(name)
}
