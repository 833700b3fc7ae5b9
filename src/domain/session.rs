use serde::{Deserialize, Serialize};

/// Logged-in user as persisted by the login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub admin: bool,
    /// Camel-cased admin flag some login serializers send next to `admin`
    #[serde(default, rename = "isAdmin", skip_serializing_if = "std::ops::Not::not")]
    pub is_admin_flag: bool,
    /// JWT access token sent with authenticated requests
    #[serde(default)]
    pub token: Option<String>,
    /// simplejwt's name for the access token; may arrive alongside `token`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.admin || self.is_admin_flag
    }

    /// The bearer token, preferring `token` over `access`.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().or(self.access.as_deref())
    }
}

/// Whether the session (possibly logged out) may manage products.
pub fn can_manage_products(user: Option<&UserInfo>) -> bool {
    user.is_some_and(UserInfo::is_admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_from_login_payload() {
        let json = r#"{
            "id": 3,
            "username": "asha",
            "email": "asha@example.com",
            "admin": true,
            "access": "jwt-token"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.token(), Some("jwt-token"));
        assert!(user.name.is_empty());
    }

    #[test]
    fn test_payload_with_both_spellings() {
        let json = r#"{
            "username": "asha",
            "admin": false,
            "isAdmin": true,
            "token": "long-lived",
            "access": "short-lived"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.token(), Some("long-lived"));
    }

    #[test]
    fn test_camel_case_admin_only() {
        let user: UserInfo =
            serde_json::from_str(r#"{"username": "asha", "isAdmin": true}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.token(), None);
    }

    #[test]
    fn test_can_manage_products() {
        let customer: UserInfo = serde_json::from_str(r#"{"username": "ravi"}"#).unwrap();
        let admin = UserInfo {
            admin: true,
            ..customer.clone()
        };

        assert!(!can_manage_products(None));
        assert!(!can_manage_products(Some(&customer)));
        assert!(can_manage_products(Some(&admin)));
    }
}
