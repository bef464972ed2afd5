use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;

/// 提交详情（附带关联作业）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    // 关联作业不存在时为 null
    pub assignment: Option<Assignment>,
}
