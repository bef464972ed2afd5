use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, ActiveModelTrait};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            student_number: Set(req.student_number),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新用户姓名
    pub async fn update_user_name_impl(&self, id: i64, name: &str) -> Result<Option<User>> {
        let result = Users::update_many()
            .col_expr(Column::Name, sea_orm::sea_query::Expr::value(name.to_string()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新用户姓名失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get_user_by_id_impl(id).await
    }
}
