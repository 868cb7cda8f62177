use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub perms: Permissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub usuario_id: String,
    #[serde(default)]
    pub usuario_nombre: String,
}

impl UserInfo {
    /// Display name, falling back to the id when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.usuario_nombre.trim().is_empty() {
            &self.usuario_id
        } else {
            &self.usuario_nombre
        }
    }
}

/// Actions the logged-in user may reach from the menu.
/// Received with the login response and held only in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub capturas: bool,
    #[serde(default)]
    pub reportes: bool,
}

/// Users selectable on the login screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicUsersResponse {
    #[serde(default)]
    pub usuarios: Vec<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_id() {
        let named = UserInfo {
            usuario_id: "u1".to_string(),
            usuario_nombre: "Ana".to_string(),
        };
        assert_eq!(named.display_name(), "Ana");

        let anonymous = UserInfo {
            usuario_id: "u2".to_string(),
            usuario_nombre: "  ".to_string(),
        };
        assert_eq!(anonymous.display_name(), "u2");
    }

    #[test]
    fn login_response_tolerates_missing_perms() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":"t","user":{"usuario_id":"u1","usuario_nombre":"Ana"}}"#,
        )
        .unwrap();
        assert!(!response.perms.capturas);
        assert!(!response.perms.reportes);
    }
}
