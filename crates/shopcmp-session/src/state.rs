use shopcmp_core::UserProfile;

/// What the current user is allowed to do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token and guest mode off: only the sign-in flow is available.
    #[default]
    Anonymous,
    /// Browsing and comparing without an account.
    Guest,
    Authenticated(UserProfile),
}

impl SessionState {
    #[must_use]
    pub fn can_view_catalog(&self) -> bool {
        !matches!(self, SessionState::Anonymous)
    }

    #[must_use]
    pub fn can_compare(&self) -> bool {
        !matches!(self, SessionState::Anonymous)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous | SessionState::Guest => None,
        }
    }
}
