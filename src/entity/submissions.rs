//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub submission_date: i64,
    pub status: String,
    pub grade: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    // JSON 数组
    #[sea_orm(column_type = "Text")]
    pub attachments: String,
    // JSON 数组
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(
        self,
    ) -> crate::errors::Result<crate::models::submissions::entities::Submission> {
        use crate::errors::PortalError;
        use crate::models::common::datetime::from_millis;
        use crate::models::submissions::entities::Submission;

        let status = self.status.parse().map_err(|e: String| {
            PortalError::serialization(format!("提交 {} 状态无效: {e}", self.id))
        })?;

        Ok(Submission {
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            submission_date: from_millis(self.submission_date),
            status,
            grade: self.grade,
            feedback: self.feedback,
            attachments: serde_json::from_str(&self.attachments)?,
            comments: serde_json::from_str(&self.comments)?,
            version: self.version,
        })
    }
}
