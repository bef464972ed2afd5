use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    academic::{entities::AcademicPerformance, requests::UpsertPerformanceRequest},
    assignments::{
        entities::{Assignment, AssignmentFile},
        requests::{AssignmentListQuery, CreateAssignmentRequest},
    },
    profiles::{entities::StudentProfile, requests::UpdateProfileRequest},
    submissions::entities::{GradeUpdate, NewSubmission, Submission},
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;
pub mod uploads;

pub use uploads::UploadStore;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 更新用户姓名
    async fn update_user_name(&self, id: i64, name: &str) -> Result<Option<User>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 按条件列出作业（截止时间升序）
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>>;
    // 单条 UPDATE 覆盖作业文件字段，行不存在时返回 None
    async fn replace_assignment_file(
        &self,
        id: i64,
        file: AssignmentFile,
    ) -> Result<Option<Assignment>>;
    // 统计作业数量
    async fn count_assignments(&self) -> Result<u64>;

    /// 提交管理方法
    // 创建提交
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取学生对某作业的最新提交
    async fn get_latest_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 按版本号条件写回提交时间、状态、附件与评论，版本不一致或行不存在时返回 false
    async fn update_submission(&self, submission: &Submission) -> Result<bool>;
    // 评分（只写评分、反馈与状态），行不存在时返回 None
    async fn grade_submission(&self, id: i64, update: GradeUpdate) -> Result<Option<Submission>>;

    /// 学生档案方法
    async fn get_profile_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    // 不存在则创建
    async fn upsert_profile(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> Result<StudentProfile>;

    /// 学业表现方法
    // 最近更新的一条记录
    async fn get_latest_performance(&self, student_id: i64)
    -> Result<Option<AcademicPerformance>>;
    // 按 (学生, 学期) 创建或覆盖
    async fn upsert_performance(
        &self,
        req: UpsertPerformanceRequest,
    ) -> Result<AcademicPerformance>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
