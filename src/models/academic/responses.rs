use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::academic::entities::SubjectPerformance;
use crate::models::users::entities::UserSummary;

/// 学业报告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct AcademicReport {
    pub student_info: Option<UserSummary>,
    pub semester: String,
    pub gpa: Option<f64>,
    pub completed_credits: i32,
    pub subjects: Vec<SubjectPerformance>,
    pub overall_performance: f64,
}
