use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目表现等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub enum PerformanceStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceStatus {
    /// 综合表现计算使用的分值
    pub fn score(self) -> u32 {
        match self {
            PerformanceStatus::Excellent => 4,
            PerformanceStatus::Good => 3,
            PerformanceStatus::Average => 2,
            PerformanceStatus::Poor => 1,
        }
    }
}

// 等第成绩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// 单科表现，各项分数范围 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct SubjectPerformance {
    pub name: String,
    pub midterm: Option<f64>,
    #[serde(rename = "final")]
    pub final_exam: Option<f64>,
    pub assignments: Option<f64>,
    pub attendance: Option<f64>,
    pub grade: Option<LetterGrade>,
    pub status: PerformanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct AcademicPerformance {
    pub id: i64,
    pub student_id: i64,
    pub semester: String,
    pub subjects: Vec<SubjectPerformance>,
    // 0-4
    pub gpa: Option<f64>,
    pub completed_credits: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 综合表现：各科等级分值的平均数，保留两位小数；无科目时为 0
pub fn overall_performance(subjects: &[SubjectPerformance]) -> f64 {
    if subjects.is_empty() {
        return 0.0;
    }
    let total: u32 = subjects.iter().map(|s| s.status.score()).sum();
    let mean = f64::from(total) / subjects.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(status: PerformanceStatus) -> SubjectPerformance {
        SubjectPerformance {
            name: "DBMS".to_string(),
            midterm: None,
            final_exam: None,
            assignments: None,
            attendance: None,
            grade: None,
            status,
        }
    }

    #[test]
    fn test_overall_performance_empty_is_zero() {
        assert_eq!(overall_performance(&[]), 0.0);
    }

    #[test]
    fn test_overall_performance_mean() {
        let subjects = [
            subject(PerformanceStatus::Excellent),
            subject(PerformanceStatus::Poor),
        ];
        assert_eq!(overall_performance(&subjects), 2.5);
    }

    #[test]
    fn test_overall_performance_rounds_to_two_decimals() {
        let subjects = [
            subject(PerformanceStatus::Excellent),
            subject(PerformanceStatus::Good),
            subject(PerformanceStatus::Good),
        ];
        assert_eq!(overall_performance(&subjects), 3.33);
    }

    #[test]
    fn test_letter_grade_wire_format() {
        assert_eq!(serde_json::to_string(&LetterGrade::APlus).unwrap(), "\"A+\"");
        let grade: LetterGrade = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(grade, LetterGrade::CPlus);
        assert!(serde_json::from_str::<LetterGrade>("\"E\"").is_err());
    }

    #[test]
    fn test_final_field_name() {
        let json = serde_json::to_value(SubjectPerformance {
            final_exam: Some(88.0),
            ..subject(PerformanceStatus::Good)
        })
        .unwrap();
        assert_eq!(json["final"], 88.0);
        assert_eq!(json["status"], "good");
    }
}
