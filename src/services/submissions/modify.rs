//! 提交的读取-修改-条件写入

use tracing::debug;

use crate::errors::{PortalError, Result};
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

// 版本冲突时的最大尝试次数
const MAX_UPDATE_ATTEMPTS: usize = 8;

/// 读取提交并应用修改，按版本号条件写回
///
/// 写入期间若有其它请求先行修改（版本号变化），重新读取最新记录后再次应用修改，
/// 因此 `apply` 可能被调用多次，只应依赖传入的记录。
pub async fn modify_submission<F>(
    storage: &dyn Storage,
    submission_id: i64,
    mut apply: F,
) -> Result<Submission>
where
    F: FnMut(&mut Submission),
{
    for attempt in 1..=MAX_UPDATE_ATTEMPTS {
        let mut submission = storage
            .get_submission_by_id(submission_id)
            .await?
            .ok_or_else(|| PortalError::not_found("Submission not found"))?;

        apply(&mut submission);

        if storage.update_submission(&submission).await? {
            submission.version += 1;
            return Ok(submission);
        }
        debug!(submission_id, attempt, "Submission changed concurrently, retrying");
    }

    Err(PortalError::conflict(
        "Submission is being modified by another request, please retry",
    ))
}
