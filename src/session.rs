/// The signed-in user and the backend they talk to, handed to every
/// component that needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub base_url: String,
}

impl Session {
    pub fn new(user_id: &str, base_url: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
