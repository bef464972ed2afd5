use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 通知与安全设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct ProfileSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub two_factor_auth: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            two_factor_auth: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub batch: Option<String>,
    pub enrollment_date: DateTime<Utc>,
    pub settings: ProfileSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
