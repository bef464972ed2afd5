use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::StudentNumber).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业表（文件字段五项同时为空或同时存在）
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().not_null())
                    .col(
                        ColumnDef::new(Assignments::DueDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Subject).string().not_null())
                    .col(ColumnDef::new(Assignments::Semester).integer().not_null())
                    .col(ColumnDef::new(Assignments::Department).string().not_null())
                    .col(ColumnDef::new(Assignments::FileUrl).string().null())
                    .col(ColumnDef::new(Assignments::FileName).string().null())
                    .col(ColumnDef::new(Assignments::FileSize).big_integer().null())
                    .col(ColumnDef::new(Assignments::FileType).string().null())
                    .col(ColumnDef::new(Assignments::UploadDate).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表（附件与评论以 JSON 文本随行保存）
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmissionDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(ColumnDef::new(Submissions::Grade).double().null())
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(ColumnDef::new(Submissions::Attachments).text().not_null())
                    .col(ColumnDef::new(Submissions::Comments).text().not_null())
                    // 乐观锁版本号，每次写入加一
                    .col(
                        ColumnDef::new(Submissions::Version)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Phone).string().null())
                    .col(ColumnDef::new(StudentProfiles::Address).string().null())
                    .col(
                        ColumnDef::new(StudentProfiles::DateOfBirth)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Department).string().null())
                    .col(ColumnDef::new(StudentProfiles::Semester).integer().null())
                    .col(ColumnDef::new(StudentProfiles::Batch).string().null())
                    .col(
                        ColumnDef::new(StudentProfiles::EnrollmentDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::EmailNotifications)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::SmsNotifications)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::TwoFactorAuth)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学业表现表
        manager
            .create_table(
                Table::create()
                    .table(AcademicPerformances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicPerformances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicPerformances::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicPerformances::Semester)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicPerformances::Subjects)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicPerformances::Gpa).double().null())
                    .col(
                        ColumnDef::new(AcademicPerformances::CompletedCredits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AcademicPerformances::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicPerformances::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_due_date")
                    .table(Assignments::Table)
                    .col(Assignments::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_academic_student_semester")
                    .table(AcademicPerformances::Table)
                    .col(AcademicPerformances::StudentId)
                    .col(AcademicPerformances::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(AcademicPerformances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    StudentNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    Description,
    DueDate,
    Subject,
    Semester,
    Department,
    FileUrl,
    FileName,
    FileSize,
    FileType,
    UploadDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmissionDate,
    Status,
    Grade,
    Feedback,
    Attachments,
    Comments,
    Version,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    Phone,
    Address,
    DateOfBirth,
    Department,
    Semester,
    Batch,
    EnrollmentDate,
    EmailNotifications,
    SmsNotifications,
    TwoFactorAuth,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AcademicPerformances {
    #[sea_orm(iden = "academic_performances")]
    Table,
    Id,
    StudentId,
    Semester,
    Subjects,
    Gpa,
    CompletedCredits,
    CreatedAt,
    UpdatedAt,
}
