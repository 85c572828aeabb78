use secrecy::{ExposeSecret, Secret};

/// Opaque credential issued after a successful authentication.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }
}

impl AsRef<Secret<String>> for AccessToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(Secret::new(token))
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
