use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::common::datetime::parse_instant;
use crate::storage::{Storage, UploadStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadStore,
}

// (标题, 描述, 截止日期, 科目, 学期)
const SAMPLE_ASSIGNMENTS: [(&str, &str, &str, &str, i32); 5] = [
    (
        "Data Structures Assignment 1",
        "Implement a binary search tree with insertion, deletion, and traversal operations.",
        "2024-04-15",
        "Data Structures",
        3,
    ),
    (
        "Database Management System Project",
        "Design and implement a normalized database schema for a library management system.",
        "2024-04-20",
        "DBMS",
        4,
    ),
    (
        "Machine Learning Assignment",
        "Implement a neural network for image classification using TensorFlow.",
        "2024-04-25",
        "Machine Learning",
        6,
    ),
    (
        "Web Development Project",
        "Create a responsive e-commerce website using React and Node.js.",
        "2024-04-30",
        "Web Development",
        5,
    ),
    (
        "Operating Systems Lab",
        "Implement process scheduling algorithms: FCFS, SJF, and Round Robin.",
        "2024-05-05",
        "Operating Systems",
        4,
    ),
];

const SAMPLE_DEPARTMENT: &str = "Computer Science";

/// 空库时写入示例作业，返回写入数量
pub async fn seed_sample_assignments(storage: &dyn Storage) -> Result<usize> {
    let count = storage.count_assignments().await?;
    if count > 0 {
        debug!(
            "Database already has {} assignment(s), skipping sample seed",
            count
        );
        return Ok(0);
    }

    info!("No assignments found in database, inserting sample assignments...");
    for (title, description, due_date, subject, semester) in SAMPLE_ASSIGNMENTS {
        let req = CreateAssignmentRequest {
            title: title.to_string(),
            description: description.to_string(),
            due_date: parse_instant(due_date)?,
            subject: subject.to_string(),
            semester,
            department: SAMPLE_DEPARTMENT.to_string(),
        };
        storage.create_assignment(req).await?;
    }

    Ok(SAMPLE_ASSIGNMENTS.len())
}

/// 准备服务器启动的上下文
/// 包括存储与上传目录
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage(&config.database)
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    if config.app.seed_sample_data {
        match seed_sample_assignments(storage.as_ref()).await {
            Ok(0) => {}
            Ok(n) => info!("Inserted {} sample assignment(s)", n),
            Err(e) => warn!("Failed to seed sample assignments: {}", e),
        }
    }

    let uploads = UploadStore::new(&config.upload);
    if let Err(e) = std::fs::create_dir_all(uploads.dir()) {
        // 首次上传时会再次尝试创建
        warn!(
            "Failed to create upload directory {}: {}",
            uploads.dir().display(),
            e
        );
    }
    warn!("Upload directory: {}", uploads.dir().display());

    StartupContext { storage, uploads }
}
