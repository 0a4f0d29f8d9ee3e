use crate::models::role::Role;

/// Authenticated identity context read from the cookie jar.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// A session counts as authenticated only when token, user id and role
    /// are all present at the same time. Partial cookies are no session.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user_id.is_some() && self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_session() -> Session {
        Session {
            token: Some("abc123".to_string()),
            user_id: Some("42".to_string()),
            role: Some(Role::Admin),
        }
    }

    #[test]
    fn all_fields_present_is_authenticated() {
        assert!(full_session().is_authenticated());
    }

    #[test]
    fn empty_session_is_not_authenticated() {
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn any_single_missing_field_is_not_authenticated() {
        let mut s = full_session();
        s.token = None;
        assert!(!s.is_authenticated());

        let mut s = full_session();
        s.user_id = None;
        assert!(!s.is_authenticated());

        let mut s = full_session();
        s.role = None;
        assert!(!s.is_authenticated());
    }
}
