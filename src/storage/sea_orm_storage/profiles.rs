//! 学生档案存储操作

use super::SeaOrmStorage;
use crate::entity::student_profiles::{ActiveModel, Column, Entity as StudentProfiles};
use crate::errors::{PortalError, Result};
use crate::models::profiles::{
    entities::{ProfileSettings, StudentProfile},
    requests::UpdateProfileRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 通过用户 ID 获取档案
    pub async fn get_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 创建或覆盖档案
    pub async fn upsert_profile_impl(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> Result<StudentProfile> {
        let now = chrono::Utc::now().timestamp_millis();

        let existing = StudentProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生档案失败: {e}")))?;

        let model = match existing {
            Some(current) => {
                let enrollment_date = req
                    .enrollment_date
                    .map(|dt| dt.timestamp_millis())
                    .unwrap_or(current.enrollment_date);
                let mut model: ActiveModel = current.into();
                model.phone = Set(req.phone);
                model.address = Set(req.address);
                model.date_of_birth = Set(req.date_of_birth.map(|dt| dt.timestamp_millis()));
                model.department = Set(req.department);
                model.semester = Set(req.semester);
                model.batch = Set(req.batch);
                model.enrollment_date = Set(enrollment_date);
                model.updated_at = Set(now);
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| {
                        PortalError::database_operation(format!("更新学生档案失败: {e}"))
                    })?
            }
            None => {
                let settings = ProfileSettings::default();
                ActiveModel {
                    user_id: Set(user_id),
                    phone: Set(req.phone),
                    address: Set(req.address),
                    date_of_birth: Set(req.date_of_birth.map(|dt| dt.timestamp_millis())),
                    department: Set(req.department),
                    semester: Set(req.semester),
                    batch: Set(req.batch),
                    enrollment_date: Set(req
                        .enrollment_date
                        .map(|dt| dt.timestamp_millis())
                        .unwrap_or(now)),
                    email_notifications: Set(settings.email_notifications),
                    sms_notifications: Set(settings.sms_notifications),
                    two_factor_auth: Set(settings.two_factor_auth),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("创建学生档案失败: {e}")))?
            }
        };

        Ok(model.into_profile())
    }
}
