//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{PortalError, Result};
use crate::models::submissions::entities::{
    GradeUpdate, NewSubmission, Submission, SubmissionStatus,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(&self, req: NewSubmission) -> Result<Submission> {
        let model = ActiveModel {
            assignment_id: Set(req.assignment_id),
            student_id: Set(req.student_id),
            submission_date: Set(req.submission_date.timestamp_millis()),
            status: Set(req.status.to_string()),
            grade: Set(None),
            feedback: Set(None),
            attachments: Set("[]".to_string()),
            comments: Set("[]".to_string()),
            version: Set(0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建提交失败: {e}")))?;

        result.into_submission()
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交失败: {e}")))?;

        result.map(|m| m.into_submission()).transpose()
    }

    /// 获取学生对某作业的最新提交
    pub async fn get_latest_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmissionDate)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交失败: {e}")))?;

        result.map(|m| m.into_submission()).transpose()
    }

    /// 条件写回提交时间、状态、附件与评论
    ///
    /// 仅当库中版本号仍等于 `submission.version` 时写入并把版本号加一；
    /// 返回是否写入。评分与反馈不在此处写入。
    pub async fn update_submission_impl(&self, submission: &Submission) -> Result<bool> {
        let attachments = serde_json::to_string(&submission.attachments)?;
        let comments = serde_json::to_string(&submission.comments)?;

        let result = Submissions::update_many()
            .col_expr(
                Column::SubmissionDate,
                Expr::value(submission.submission_date.timestamp_millis()),
            )
            .col_expr(Column::Status, Expr::value(submission.status.to_string()))
            .col_expr(Column::Attachments, Expr::value(attachments))
            .col_expr(Column::Comments, Expr::value(comments))
            .col_expr(Column::Version, Expr::value(submission.version + 1))
            .filter(Column::Id.eq(submission.id))
            .filter(Column::Version.eq(submission.version))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 评分：只写评分、反馈与状态，版本号在库内自增
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        update: GradeUpdate,
    ) -> Result<Option<Submission>> {
        let mut query = Submissions::update_many()
            .col_expr(Column::Grade, Expr::value(update.grade))
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::Graded.to_string()),
            )
            .col_expr(Column::Version, Expr::cust("version + 1"));
        if let Some(feedback) = update.feedback {
            query = query.col_expr(Column::Feedback, Expr::value(feedback));
        }

        let result = query
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("提交评分失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_submission_by_id_impl(id).await
    }
}
