//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<i64>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub batch: Option<String>,
    pub enrollment_date: i64,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub two_factor_auth: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_profile(self) -> crate::models::profiles::entities::StudentProfile {
        use crate::models::common::datetime::from_millis;
        use crate::models::profiles::entities::{ProfileSettings, StudentProfile};

        StudentProfile {
            id: self.id,
            user_id: self.user_id,
            phone: self.phone,
            address: self.address,
            date_of_birth: self.date_of_birth.map(from_millis),
            department: self.department,
            semester: self.semester,
            batch: self.batch,
            enrollment_date: from_millis(self.enrollment_date),
            settings: ProfileSettings {
                email_notifications: self.email_notifications,
                sms_notifications: self.sms_notifications,
                two_factor_auth: self.two_factor_auth,
            },
            created_at: from_millis(self.created_at),
            updated_at: from_millis(self.updated_at),
        }
    }
}
