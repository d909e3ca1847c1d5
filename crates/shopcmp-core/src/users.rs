use serde::{Deserialize, Serialize};

/// Profile returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserProfile {
    /// Full name when set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// Response of `POST /auth/token`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[redacted]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let user = UserProfile {
            id: 1,
            email: "a@example.com".into(),
            username: "anh".into(),
            full_name: Some("  ".into()),
        };
        assert_eq!(user.display_name(), "anh");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let req = SignupRequest {
            email: "a@example.com".into(),
            username: "anh".into(),
            password: "hunter2".into(),
            full_name: None,
        };
        assert!(!format!("{req:?}").contains("hunter2"));

        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc.def","token_type":"bearer"}"#).unwrap();
        assert!(!format!("{token:?}").contains("abc.def"));
    }

    #[test]
    fn signup_serializes_full_name_key() {
        let req = SignupRequest {
            email: "a@example.com".into(),
            username: "anh".into(),
            password: "pw".into(),
            full_name: Some("Nguyen Anh".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["full_name"], "Nguyen Anh");
    }
}
