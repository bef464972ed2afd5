use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::assignments::requests::validate_semester;
use crate::models::common::datetime::deserialize_optional_instant;

/// 更新（或创建）学生档案请求
///
/// 除 `name` 与 `enrollmentDate` 外，其余字段整体覆盖，未提供即清空。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    #[ts(type = "string | null")]
    pub date_of_birth: Option<DateTime<Utc>>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub batch: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    #[ts(type = "string | null")]
    pub enrollment_date: Option<DateTime<Utc>>,
}

impl UpdateProfileRequest {
    /// 校验并去除首尾空白
    pub fn normalized(mut self) -> Result<Self> {
        if let Some(semester) = self.semester {
            validate_semester(semester)?;
        }
        self.name = trimmed(self.name);
        self.phone = trimmed(self.phone);
        self.address = trimmed(self.address);
        self.department = trimmed(self.department);
        self.batch = trimmed(self.batch);
        Ok(self)
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
