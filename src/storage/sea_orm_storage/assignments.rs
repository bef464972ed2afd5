//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{PortalError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentFile},
    requests::{AssignmentListQuery, CreateAssignmentRequest},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp_millis()),
            subject: Set(req.subject),
            semester: Set(req.semester),
            department: Set(req.department),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出作业
    pub async fn list_assignments_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find();

        // 学期筛选
        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 院系筛选
        if let Some(department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 科目筛选
        if let Some(subject) = query.subject {
            select = select.filter(Column::Subject.eq(subject));
        }

        let assignments = select
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        Ok(assignments)
    }

    /// 覆盖作业文件字段
    ///
    /// 五个字段在同一条 UPDATE 中写入，读取方不会看到部分更新。
    pub async fn replace_assignment_file_impl(
        &self,
        id: i64,
        file: AssignmentFile,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::update_many()
            .col_expr(Column::FileUrl, Expr::value(file.file_url))
            .col_expr(Column::FileName, Expr::value(file.file_name))
            .col_expr(Column::FileSize, Expr::value(file.file_size))
            .col_expr(Column::FileType, Expr::value(file.file_type))
            .col_expr(
                Column::UploadDate,
                Expr::value(file.upload_date.timestamp_millis()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新作业文件失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_assignment_by_id_impl(id).await
    }

    /// 统计作业数量
    pub async fn count_assignments_impl(&self) -> Result<u64> {
        Assignments::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计作业数量失败: {e}")))
    }
}
