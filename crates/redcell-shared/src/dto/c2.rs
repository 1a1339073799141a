//! C2 malleable profile types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FilePayload;

/// Stored C2 profile. The backend excludes `profileContent` from list
/// responses but includes it on the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C2Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub name: String,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub profile_content: Option<String>,
}

/// Multipart body of `POST config/c2`: name, then the `.profile` file under
/// its original filename, then remark. Absent optionals are not sent.
#[derive(Debug, Clone)]
pub struct C2ProfileForm {
    pub name: String,
    pub profile: Option<FilePayload>,
    pub remark: Option<String>,
}

impl C2ProfileForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: None,
            remark: None,
        }
    }

    pub fn with_profile(mut self, profile: FilePayload) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}

/// Body of `PUT config/c2/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C2ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}
