//! 学业表现存储操作

use super::SeaOrmStorage;
use crate::entity::academic_performances::{ActiveModel, Column, Entity as AcademicPerformances};
use crate::errors::{PortalError, Result};
use crate::models::academic::{
    entities::AcademicPerformance, requests::UpsertPerformanceRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取学生最近更新的学业记录
    pub async fn get_latest_performance_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<AcademicPerformance>> {
        let result = AcademicPerformances::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学业记录失败: {e}")))?;

        result.map(|m| m.into_performance()).transpose()
    }

    /// 按 (学生, 学期) 创建或覆盖学业记录
    pub async fn upsert_performance_impl(
        &self,
        req: UpsertPerformanceRequest,
    ) -> Result<AcademicPerformance> {
        let now = chrono::Utc::now().timestamp_millis();
        let subjects = serde_json::to_string(&req.subjects)?;

        let existing = AcademicPerformances::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::Semester.eq(req.semester.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学业记录失败: {e}")))?;

        let model = match existing {
            Some(current) => {
                let credits = req.completed_credits.unwrap_or(current.completed_credits);
                let mut model: ActiveModel = current.into();
                model.subjects = Set(subjects);
                model.gpa = Set(req.gpa);
                model.completed_credits = Set(credits);
                model.updated_at = Set(now);
                model.update(&self.db).await.map_err(|e| {
                    PortalError::database_operation(format!("更新学业记录失败: {e}"))
                })?
            }
            None => ActiveModel {
                student_id: Set(req.student_id),
                semester: Set(req.semester),
                subjects: Set(subjects),
                gpa: Set(req.gpa),
                completed_credits: Set(req.completed_credits.unwrap_or(0)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建学业记录失败: {e}")))?,
        };

        model.into_performance()
    }
}
