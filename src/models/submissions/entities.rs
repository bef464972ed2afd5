use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    #[default]
    Submitted, // 已提交
    Late,   // 迟交
    Graded, // 已评分（仅由评分操作设置）
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const LATE: &'static str = "late";
    pub const GRADED: &'static str = "graded";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid submission status: '{s}'. supported: submitted, late, graded"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Late => write!(f, "{}", SubmissionStatus::LATE),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::LATE => Ok(SubmissionStatus::Late),
            SubmissionStatus::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 提交附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionAttachment {
    pub filename: String,
    pub path: String,
    pub uploaded_at: DateTime<Utc>,
}

/// 提交评论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionComment {
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 关联作业 ID（弱引用）
    pub assignment_id: i64,
    // 学生 ID（弱引用）
    pub student_id: i64,
    // 提交时间
    pub submission_date: DateTime<Utc>,
    pub status: SubmissionStatus,
    // 0-100
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub attachments: Vec<SubmissionAttachment>,
    pub comments: Vec<SubmissionComment>,
    // 乐观锁版本号，不对外输出
    #[serde(skip)]
    #[ts(skip)]
    pub version: i64,
}

/// 评分写入内容
#[derive(Debug, Clone)]
pub struct GradeUpdate {
    pub grade: f64,
    // None 保留原反馈，Some(None) 清空反馈
    pub feedback: Option<Option<String>>,
}

/// 待写入的新提交，状态由服务层推导后传入
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub assignment_id: i64,
    pub student_id: i64,
    pub submission_date: DateTime<Utc>,
    pub status: SubmissionStatus,
}
