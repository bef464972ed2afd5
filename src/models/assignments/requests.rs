use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{PortalError, Result};
use crate::models::common::datetime::deserialize_instant;

pub const MIN_SEMESTER: i32 = 1;
pub const MAX_SEMESTER: i32 = 8;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_instant")]
    #[ts(type = "string")]
    pub due_date: DateTime<Utc>, // RFC 3339 或 YYYY-MM-DD
    pub subject: String,
    pub semester: i32,
    pub department: String,
}

impl CreateAssignmentRequest {
    /// 校验并去除首尾空白
    pub fn normalized(mut self) -> Result<Self> {
        self.title = required_trimmed("title", &self.title)?;
        self.subject = required_trimmed("subject", &self.subject)?;
        self.department = required_trimmed("department", &self.department)?;
        if self.description.trim().is_empty() {
            return Err(PortalError::validation("description is required"));
        }
        validate_semester(self.semester)?;
        Ok(self)
    }
}

fn required_trimmed(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PortalError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn validate_semester(semester: i32) -> Result<()> {
    if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&semester) {
        return Err(PortalError::validation(format!(
            "semester must be between {MIN_SEMESTER} and {MAX_SEMESTER}"
        )));
    }
    Ok(())
}

/// 作业列表查询参数（HTTP 请求），空字符串视为未提供
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    pub semester: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub semester: Option<i32>,
    pub department: Option<String>,
    pub subject: Option<String>,
}

impl TryFrom<AssignmentListParams> for AssignmentListQuery {
    type Error = PortalError;

    fn try_from(params: AssignmentListParams) -> Result<Self> {
        let semester = match non_empty(params.semester) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
                PortalError::validation(format!("semester must be an integer, got '{raw}'"))
            })?),
            None => None,
        };

        Ok(Self {
            semester,
            department: non_empty(params.department),
            subject: non_empty(params.subject),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
