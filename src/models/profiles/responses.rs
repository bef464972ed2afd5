use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::profiles::entities::StudentProfile;
use crate::models::users::entities::UserSummary;

/// 档案详情（附带用户姓名与邮箱）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct ProfileDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub profile: StudentProfile,
    pub user: Option<UserSummary>,
}
