use std::path::Path;
use std::sync::Arc;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use rust_student_portal::config::{DatabaseConfig, UploadConfig};
use rust_student_portal::routes;
use rust_student_portal::storage::{Storage, UploadStore, create_storage};
use rust_student_portal::utils::{json_error_handler, path_error_handler, query_error_handler};

pub mod paths {
    pub const ASSIGNMENTS: &str = "/api/assignments";
    pub const ACADEMIC: &str = "/api/academic";

    pub fn assignment(id: i64) -> String {
        format!("/api/assignments/{id}")
    }

    pub fn assignment_submit(id: i64) -> String {
        format!("/api/assignments/{id}/submit")
    }

    pub fn assignment_submissions(id: i64) -> String {
        format!("/api/assignments/{id}/submissions")
    }

    pub fn student_submission(id: i64, student_id: i64) -> String {
        format!("/api/assignments/{id}/submission/{student_id}")
    }

    pub fn submission_attachments(id: i64) -> String {
        format!("/api/submissions/{id}/attachments")
    }

    pub fn submission_grade(id: i64) -> String {
        format!("/api/submissions/{id}/grade")
    }

    pub fn submission_comments(id: i64) -> String {
        format!("/api/submissions/{id}/comments")
    }

    pub fn profile(user_id: i64) -> String {
        format!("/api/profile/{user_id}")
    }

    pub fn academic(student_id: i64) -> String {
        format!("/api/academic/{student_id}")
    }

    pub fn academic_report(student_id: i64) -> String {
        format!("/api/academic/{student_id}/report")
    }
}

const BOUNDARY: &str = "----portal-test-boundary";

/// multipart 表单中的一个字段
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: Vec<u8>,
}

impl<'a> Part<'a> {
    /// 名为 `file` 的文件字段
    pub fn file(filename: &'a str, content_type: &'a str, data: &[u8]) -> Self {
        Self {
            name: "file",
            filename: Some(filename),
            content_type: Some(content_type),
            data: data.to_vec(),
        }
    }

    pub fn text(name: &'a str, value: &str) -> Self {
        Self {
            name,
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }
}

/// 构造 multipart/form-data 请求
pub fn multipart_request(path: &str, parts: &[Part<'_>]) -> TestRequest {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    TestRequest::post()
        .uri(path)
        .insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

/// 解析后的响应
pub struct TestResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// JSON 响应体，非 JSON 时为 `Null`
    pub body: Value,
}

/// 独立的数据库与上传目录
pub struct TestApp {
    _db_dir: TempDir,
    upload_dir: TempDir,
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadStore,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create database dir");
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let storage = create_storage(&DatabaseConfig {
            url: format!("{}/portal.db", db_dir.path().display()),
            pool_size: 2,
            timeout: 5,
        })
        .await
        .expect("Failed to create storage");

        let uploads = UploadStore::new(&UploadConfig {
            dir: upload_dir.path().to_string_lossy().into_owned(),
            ..UploadConfig::default()
        });

        Self {
            _db_dir: db_dir,
            upload_dir,
            storage,
            uploads,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        self.upload_dir.path()
    }

    /// 上传目录下的文件名（排序后）
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir())
            .expect("Failed to read upload dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub async fn send(&self, req: TestRequest) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new(self.storage.clone()))
                .app_data(web::Data::new(self.uploads.clone()))
                .configure(routes::configure_all_routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let bytes = test::read_body(res).await.to_vec();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            bytes,
            body,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(TestRequest::get().uri(path)).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        self.send(TestRequest::post().uri(path).set_json(body)).await
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> TestResponse {
        self.send(TestRequest::put().uri(path).set_json(body)).await
    }

    pub async fn upload(&self, path: &str, parts: &[Part<'_>]) -> TestResponse {
        self.send(multipart_request(path, parts)).await
    }

    /// 创建作业并返回 ID
    pub async fn create_assignment(&self, title: &str, due_date: &str, semester: i32) -> i64 {
        let res = self
            .post_json(
                paths::ASSIGNMENTS,
                &json!({
                    "title": title,
                    "description": "Coursework",
                    "dueDate": due_date,
                    "subject": "Data Structures",
                    "semester": semester,
                    "department": "Computer Science",
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create assignment failed: {}", res.body);
        res.body["id"].as_i64().expect("assignment id")
    }

    /// 创建提交并返回 ID
    pub async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_date: &str,
    ) -> i64 {
        let res = self
            .post_json(
                &paths::assignment_submissions(assignment_id),
                &json!({ "studentId": student_id, "submissionDate": submission_date }),
            )
            .await;
        assert_eq!(res.status, 201, "create submission failed: {}", res.body);
        res.body["id"].as_i64().expect("submission id")
    }
}
