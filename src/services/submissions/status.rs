use chrono::{DateTime, Utc};

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::SubmissionStatus;

/// 根据提交时间推导提交状态
///
/// - 已评分的提交保持 `graded`
/// - 找不到关联作业时保持原状态
/// - 提交时间严格晚于截止时间为 `late`，否则为 `submitted`
pub fn derive_status(
    submission_date: DateTime<Utc>,
    current: SubmissionStatus,
    assignment: Option<&Assignment>,
) -> SubmissionStatus {
    if current == SubmissionStatus::Graded {
        return SubmissionStatus::Graded;
    }

    let Some(assignment) = assignment else {
        return current;
    };

    if submission_date > assignment.due_date {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    }
}
