use crate::config::DEFAULT_SERVER_URL;

/// Authentication status plus the credential and endpoint in use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub server_url: String,
    pub token: String,
    pub is_authenticated: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: String::new(),
            is_authenticated: false,
        }
    }
}
