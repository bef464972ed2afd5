//! 单元测试共用的临时数据库与上传目录

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::config::{DatabaseConfig, UploadConfig};
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::common::datetime::parse_instant;
use crate::storage::{Storage, UploadStore, create_storage};

/// 临时 SQLite 数据库（已迁移），TempDir 需与存储同生命周期
pub(crate) async fn sqlite_storage() -> (TempDir, Arc<dyn Storage>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = DatabaseConfig {
        url: format!("{}/test.db", dir.path().display()),
        pool_size: 2,
        timeout: 5,
    };
    let storage = create_storage(&config).await.expect("create storage");
    (dir, storage)
}

/// 临时上传目录
pub(crate) fn upload_store() -> (TempDir, UploadStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = UploadStore::new(&UploadConfig {
        dir: dir.path().to_string_lossy().into_owned(),
        ..UploadConfig::default()
    });
    (dir, store)
}

pub(crate) fn assignment_request(due_date: &str, semester: i32) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        title: "Data Structures Assignment 1".to_string(),
        description: "Implement a binary search tree.".to_string(),
        due_date: parse_instant(due_date).expect("valid date"),
        subject: "Data Structures".to_string(),
        semester,
        department: "Computer Science".to_string(),
    }
}

/// 目录下的文件名（排序后）
pub(crate) fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
