//! Login and user account types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST login/access-token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Bearer token issued on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
    #[serde(default)]
    pub login_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_wire_names() {
        let raw = r#"{
            "id": 7,
            "username": "operator",
            "email": "op@example.com",
            "isActive": true,
            "isSuperuser": false,
            "loginTime": "2021-03-04T11:22:33"
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.id, Some(7));
        assert_eq!(profile.is_active, Some(true));
        assert_eq!(profile.is_superuser, Some(false));
        assert!(profile.login_time.is_some());
    }

    #[test]
    fn update_skips_unset_fields() {
        let update = UserUpdate {
            password: Some("hunter2".into()),
            ..UserUpdate::default()
        };
        let raw = serde_json::to_string(&update).unwrap();
        assert_eq!(raw, r#"{"password":"hunter2"}"#);
    }
}
