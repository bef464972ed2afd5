//! 学业表现实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_performances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: String,
    // JSON 数组
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
    pub gpa: Option<f64>,
    pub completed_credits: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_performance(
        self,
    ) -> crate::errors::Result<crate::models::academic::entities::AcademicPerformance> {
        use crate::models::academic::entities::AcademicPerformance;
        use crate::models::common::datetime::from_millis;

        Ok(AcademicPerformance {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            subjects: serde_json::from_str(&self.subjects)?,
            gpa: self.gpa,
            completed_credits: self.completed_credits,
            created_at: from_millis(self.created_at),
            updated_at: from_millis(self.updated_at),
        })
    }
}
