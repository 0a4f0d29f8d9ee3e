/// User role as issued by the backend in the `User-Role` header and
/// mirrored in the `user_role` cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Supplier,
    Support,
    /// Any role string this frontend does not know. Keeps the raw value so
    /// the `User-Role` header round-trips unchanged.
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Admin" => Role::Admin,
            "Supplier" => Role::Supplier,
            "Support" => Role::Support,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Supplier => "Supplier",
            Role::Support => "Support",
            Role::Other(raw) => raw,
        }
    }
}

/// Mutating UI actions available to a role. Computed fresh on every render
/// instead of comparing role strings all over the views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Capabilities {
    pub fn for_role(role: &Role) -> Self {
        Self {
            can_view: true,
            can_edit: matches!(role, Role::Admin | Role::Supplier | Role::Support),
            can_delete: matches!(role, Role::Admin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_everything() {
        let caps = Capabilities::for_role(&Role::Admin);
        assert!(caps.can_view);
        assert!(caps.can_edit);
        assert!(caps.can_delete);
    }

    #[test]
    fn supplier_and_support_edit_but_never_delete() {
        for role in [Role::Supplier, Role::Support] {
            let caps = Capabilities::for_role(&role);
            assert!(caps.can_view);
            assert!(caps.can_edit);
            assert!(!caps.can_delete);
        }
    }

    #[test]
    fn unknown_role_is_view_only() {
        let caps = Capabilities::for_role(&Role::parse("Viewer"));
        assert!(caps.can_view);
        assert!(!caps.can_edit);
        assert!(!caps.can_delete);
    }

    #[test]
    fn unknown_role_keeps_raw_value() {
        let role = Role::parse("Auditor");
        assert_eq!(role, Role::Other("Auditor".to_string()));
        assert_eq!(role.as_str(), "Auditor");
    }

    #[test]
    fn known_roles_round_trip() {
        for raw in ["Admin", "Supplier", "Support"] {
            assert_eq!(Role::parse(raw).as_str(), raw);
        }
    }
}
