use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{PortalError, Result};
use crate::models::academic::entities::SubjectPerformance;

/// 创建或更新学业表现（按学生 + 学期定位）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpsertPerformanceRequest {
    pub student_id: i64,
    pub semester: String,
    #[serde(default)]
    pub subjects: Vec<SubjectPerformance>,
    pub gpa: Option<f64>,
    pub completed_credits: Option<i32>,
}

impl UpsertPerformanceRequest {
    pub fn normalized(mut self) -> Result<Self> {
        if self.student_id <= 0 {
            return Err(PortalError::validation("studentId must be a positive id"));
        }
        self.semester = self.semester.trim().to_string();
        if self.semester.is_empty() {
            return Err(PortalError::validation("semester is required"));
        }
        if let Some(gpa) = self.gpa
            && !(0.0..=4.0).contains(&gpa)
        {
            return Err(PortalError::validation("gpa must be between 0 and 4"));
        }
        if let Some(credits) = self.completed_credits
            && credits < 0
        {
            return Err(PortalError::validation("completedCredits must not be negative"));
        }
        for subject in &mut self.subjects {
            subject.name = subject.name.trim().to_string();
            if subject.name.is_empty() {
                return Err(PortalError::validation("subject name is required"));
            }
            let scores = [
                ("midterm", subject.midterm),
                ("final", subject.final_exam),
                ("assignments", subject.assignments),
                ("attendance", subject.attendance),
            ];
            for (field, score) in scores {
                if let Some(value) = score
                    && !(0.0..=100.0).contains(&value)
                {
                    return Err(PortalError::validation(format!(
                        "{field} score of '{}' must be between 0 and 100",
                        subject.name
                    )));
                }
            }
        }
        Ok(self)
    }
}
