//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub due_date: i64,
    pub subject: String,
    pub semester: i32,
    pub department: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub upload_date: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::{Assignment, AssignmentFile};
        use crate::models::common::datetime::from_millis;

        // 文件字段只有五项齐全时才视为存在
        let file = match (
            self.file_url,
            self.file_name,
            self.file_size,
            self.file_type,
            self.upload_date,
        ) {
            (Some(file_url), Some(file_name), Some(file_size), Some(file_type), Some(uploaded)) => {
                Some(AssignmentFile {
                    file_url,
                    file_name,
                    file_size,
                    file_type,
                    upload_date: from_millis(uploaded),
                })
            }
            _ => None,
        };

        Assignment {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: from_millis(self.due_date),
            subject: self.subject,
            semester: self.semester,
            department: self.department,
            file,
            created_at: from_millis(self.created_at),
        }
    }
}
