use serde_json::json;

use crate::common::{Part, TestApp, paths};

const PDF: &[u8] = b"%PDF-1.7\n% binary search tree report";

mod assignment_crud {
    use super::*;

    #[actix_web::test]
    async fn create_returns_created_assignment_without_file() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                paths::ASSIGNMENTS,
                &json!({
                    "title": "  Data Structures Assignment 1 ",
                    "description": "Implement a binary search tree.",
                    "dueDate": "2024-04-15",
                    "subject": "Data Structures",
                    "semester": 3,
                    "department": "Computer Science",
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["title"], "Data Structures Assignment 1");
        assert_eq!(res.body["semester"], 3);
        assert!(res.body["dueDate"].as_str().unwrap().starts_with("2024-04-15T00:00:00"));
        assert!(res.body.get("fileUrl").is_none());

        let id = res.body["id"].as_i64().unwrap();
        let detail = app.get(&paths::assignment(id)).await;
        assert_eq!(detail.status, 200);
        assert_eq!(detail.body["department"], "Computer Science");
    }

    #[actix_web::test]
    async fn create_rejects_invalid_fields() {
        let app = TestApp::spawn().await;
        let valid = json!({
            "title": "Lab",
            "description": "Scheduling",
            "dueDate": "2024-05-05",
            "subject": "Operating Systems",
            "semester": 4,
            "department": "Computer Science",
        });

        for (field, value) in [
            ("title", json!("   ")),
            ("semester", json!(9)),
            ("dueDate", json!("someday")),
        ] {
            let mut body = valid.clone();
            body[field] = value;
            let res = app.post_json(paths::ASSIGNMENTS, &body).await;
            assert_eq!(res.status, 400, "field {field} should be rejected");
            assert!(res.body["error"].is_string());
        }

        let mut missing = valid.clone();
        missing.as_object_mut().unwrap().remove("subject");
        let res = app.post_json(paths::ASSIGNMENTS, &missing).await;
        assert_eq!(res.status, 400);

        let list = app.get(paths::ASSIGNMENTS).await;
        assert_eq!(list.body.as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn unknown_or_malformed_id() {
        let app = TestApp::spawn().await;

        let res = app.get(&paths::assignment(404)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Assignment not found");

        let res = app.get("/api/assignments/abc").await;
        assert_eq!(res.status, 400);
        assert!(res.body["error"].as_str().unwrap().contains("id"));

        let res = app.get("/api/assignments/0").await;
        assert_eq!(res.status, 400);
    }
}

mod assignment_list {
    use super::*;

    #[actix_web::test]
    async fn filters_by_semester_and_orders_by_due_date() {
        let app = TestApp::spawn().await;
        app.create_assignment("Operating Systems Lab", "2024-05-05", 4).await;
        app.create_assignment("Data Structures Assignment 1", "2024-04-15", 3).await;
        app.create_assignment("Database Management System Project", "2024-04-20", 4)
            .await;

        let res = app.get("/api/assignments?semester=4").await;
        assert_eq!(res.status, 200);
        let titles: Vec<_> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            titles,
            vec!["Database Management System Project", "Operating Systems Lab"]
        );

        let res = app.get("/api/assignments?semester=&department=").await;
        assert_eq!(res.body.as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn non_numeric_semester_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app.get("/api/assignments?semester=fourth").await;
        assert_eq!(res.status, 400);
        assert!(res.body["error"].as_str().unwrap().contains("semester"));
    }
}

mod assignment_submit {
    use super::*;

    #[actix_web::test]
    async fn upload_sets_file_fields_and_stores_file() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("report.pdf", "application/pdf", PDF)],
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.body);
        assert_eq!(res.body["fileName"], "report.pdf");
        assert_eq!(res.body["fileType"], "application/pdf");
        assert_eq!(res.body["fileSize"], PDF.len() as i64);
        assert!(res.body["uploadDate"].is_string());

        let url = res.body["fileUrl"].as_str().unwrap();
        let stored = url.strip_prefix("/uploads/").unwrap();
        assert!(stored.ends_with(".pdf"));
        assert_eq!(app.uploaded_files(), vec![stored.to_string()]);
        assert_eq!(std::fs::read(app.upload_dir().join(stored)).unwrap(), PDF);
    }

    #[actix_web::test]
    async fn resubmission_replaces_previous_file() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let first = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("draft.pdf", "application/pdf", PDF)],
            )
            .await;
        let first_url = first.body["fileUrl"].as_str().unwrap().to_string();

        let second = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("final.txt", "text/plain", b"final answer")],
            )
            .await;
        assert_eq!(second.status, 200);
        let second_url = second.body["fileUrl"].as_str().unwrap();
        assert_ne!(second_url, first_url);
        assert_eq!(second.body["fileName"], "final.txt");

        let stored = second_url.strip_prefix("/uploads/").unwrap();
        assert_eq!(app.uploaded_files(), vec![stored.to_string()]);
    }

    #[actix_web::test]
    async fn disallowed_extension_writes_nothing() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("virus.exe", "application/octet-stream", b"MZ")],
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(res.body["error"].as_str().unwrap().contains("File type not allowed"));
        assert!(app.uploaded_files().is_empty());

        let detail = app.get(&paths::assignment(id)).await;
        assert!(detail.body.get("fileUrl").is_none());
    }

    #[actix_web::test]
    async fn oversized_file_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let mut data = b"%PDF".to_vec();
        data.resize(10 * 1024 * 1024 + 1, b'a');
        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("huge.pdf", "application/pdf", &data)],
            )
            .await;

        assert_eq!(res.status, 413);
        assert!(app.uploaded_files().is_empty());
    }

    #[actix_web::test]
    async fn file_at_size_limit_is_accepted() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let mut data = b"%PDF".to_vec();
        data.resize(10 * 1024 * 1024, b'a');
        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("limit.pdf", "application/pdf", &data)],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["fileSize"], 10 * 1024 * 1024);
        assert_eq!(app.uploaded_files().len(), 1);
    }

    #[actix_web::test]
    async fn content_must_match_extension() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("fake.pdf", "application/pdf", b"not a pdf")],
            )
            .await;
        assert_eq!(res.status, 400);

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::file("empty.txt", "text/plain", b"")],
            )
            .await;
        assert_eq!(res.status, 400);
        assert!(app.uploaded_files().is_empty());
    }

    #[actix_web::test]
    async fn exactly_one_file_field_required() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Report", "2024-04-15", 3).await;

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[
                    Part::file("a.txt", "text/plain", b"a"),
                    Part::file("b.txt", "text/plain", b"b"),
                ],
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Only one file can be uploaded at a time");

        let res = app
            .upload(
                &paths::assignment_submit(id),
                &[Part::text("note", "no attachment")],
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "No file uploaded");
        assert!(app.uploaded_files().is_empty());
    }

    #[actix_web::test]
    async fn missing_assignment_leaves_no_file() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(
                &paths::assignment_submit(999),
                &[Part::file("report.pdf", "application/pdf", PDF)],
            )
            .await;

        assert_eq!(res.status, 404);
        assert!(app.uploaded_files().is_empty());
    }
}
