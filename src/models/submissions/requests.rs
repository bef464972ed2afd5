use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{PortalError, Result};
use crate::models::common::datetime::deserialize_optional_instant;

/// 创建提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub student_id: i64,
    // 缺省为当前时间
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    #[ts(type = "string | null")]
    pub submission_date: Option<DateTime<Utc>>,
}

impl CreateSubmissionRequest {
    pub fn validate(&self) -> Result<()> {
        if self.student_id <= 0 {
            return Err(PortalError::validation("studentId must be a positive id"));
        }
        Ok(())
    }
}

/// 评分请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    pub feedback: Option<String>,
}

impl GradeSubmissionRequest {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.grade) {
            return Err(PortalError::validation("grade must be between 0 and 100"));
        }
        Ok(())
    }
}

/// 添加评论请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AddCommentRequest {
    pub author_id: i64,
    pub text: String,
}

impl AddCommentRequest {
    pub fn validate(&self) -> Result<()> {
        if self.author_id <= 0 {
            return Err(PortalError::validation("authorId must be a positive id"));
        }
        if self.text.trim().is_empty() {
            return Err(PortalError::validation("comment text is required"));
        }
        Ok(())
    }
}
