use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业当前附带的文件，五个字段要么同时存在要么同时缺失
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentFile {
    // 对外访问路径，如 /uploads/1713139200000-123456789.pdf
    pub file_url: String,
    // 原始文件名
    pub file_name: String,
    // 文件大小（字节）
    pub file_size: i64,
    // 上传时声明的 MIME 类型
    pub file_type: String,
    // 上传时间
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 截止时间
    pub due_date: DateTime<Utc>,
    // 科目
    pub subject: String,
    // 学期（1-8）
    pub semester: i32,
    // 院系
    pub department: String,
    // 当前文件，字段平铺输出
    #[serde(flatten)]
    #[ts(skip)]
    pub file: Option<AssignmentFile>,
    // 创建时间
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}
