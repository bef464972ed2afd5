use serde_json::json;

use crate::common::{Part, TestApp, paths};

mod submission_create {
    use super::*;

    #[actix_web::test]
    async fn status_is_derived_from_due_date() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;

        let late = app
            .post_json(
                &paths::assignment_submissions(id),
                &json!({ "studentId": 7, "submissionDate": "2024-04-16" }),
            )
            .await;
        assert_eq!(late.status, 201);
        assert_eq!(late.body["status"], "late");
        assert_eq!(late.body["attachments"], json!([]));
        assert_eq!(late.body["comments"], json!([]));

        let on_time = app
            .post_json(
                &paths::assignment_submissions(id),
                &json!({ "studentId": 8, "submissionDate": "2024-04-14" }),
            )
            .await;
        assert_eq!(on_time.body["status"], "submitted");
    }

    #[actix_web::test]
    async fn student_lookup_returns_latest_with_assignment() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        app.create_submission(id, 7, "2024-04-10").await;
        let latest = app.create_submission(id, 7, "2024-04-18").await;

        let res = app.get(&paths::student_submission(id, 7)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], latest);
        assert_eq!(res.body["status"], "late");
        assert_eq!(res.body["assignment"]["id"], id);

        let res = app.get(&paths::student_submission(id, 8)).await;
        assert_eq!(res.status, 404);

        let res = app.get(&format!("/api/assignments/{id}/submission/x")).await;
        assert_eq!(res.status, 400);
    }

    #[actix_web::test]
    async fn unknown_assignment_or_bad_student() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(&paths::assignment_submissions(31), &json!({ "studentId": 7 }))
            .await;
        assert_eq!(res.status, 404);

        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        let res = app
            .post_json(&paths::assignment_submissions(id), &json!({ "studentId": -1 }))
            .await;
        assert_eq!(res.status, 400);
    }
}

mod submission_updates {
    use super::*;

    #[actix_web::test]
    async fn attachment_moves_submission_date_and_rederives_status() {
        let app = TestApp::spawn().await;
        // 截止日期已过，附件上传时间为当前时间
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        let submission = app.create_submission(id, 7, "2024-04-14").await;

        let res = app
            .upload(
                &paths::submission_attachments(submission),
                &[Part::file("notes.txt", "text/plain", b"traversal notes")],
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.body);
        assert_eq!(res.body["status"], "late");
        let attachments = res.body["attachments"].as_array().unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0]["filename"], "notes.txt");
        let path = attachments[0]["path"].as_str().unwrap();
        assert!(path.starts_with("/uploads/"));
        assert_eq!(app.uploaded_files().len(), 1);
    }

    #[actix_web::test]
    async fn attachment_to_missing_submission_leaves_no_file() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(
                &paths::submission_attachments(55),
                &[Part::file("notes.txt", "text/plain", b"notes")],
            )
            .await;

        assert_eq!(res.status, 404);
        assert!(app.uploaded_files().is_empty());
    }

    #[actix_web::test]
    async fn grading_is_sticky() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        let submission = app.create_submission(id, 7, "2024-04-16").await;

        let res = app
            .put_json(
                &paths::submission_grade(submission),
                &json!({ "grade": 92, "feedback": "Clean implementation" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["status"], "graded");
        assert_eq!(res.body["grade"], 92.0);
        assert_eq!(res.body["feedback"], "Clean implementation");

        // 评分后追加附件不会改变状态
        let res = app
            .upload(
                &paths::submission_attachments(submission),
                &[Part::file("fix.txt", "text/plain", b"fix")],
            )
            .await;
        assert_eq!(res.body["status"], "graded");
        assert_eq!(res.body["grade"], 92.0);
    }

    #[actix_web::test]
    async fn grade_out_of_range_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        let submission = app.create_submission(id, 7, "2024-04-14").await;

        let res = app
            .put_json(&paths::submission_grade(submission), &json!({ "grade": 150 }))
            .await;
        assert_eq!(res.status, 400);

        let res = app
            .put_json(&paths::submission_grade(submission + 1), &json!({ "grade": 50 }))
            .await;
        assert_eq!(res.status, 404);
    }

    #[actix_web::test]
    async fn comments_are_appended() {
        let app = TestApp::spawn().await;
        let id = app.create_assignment("Trees", "2024-04-15", 3).await;
        let submission = app.create_submission(id, 7, "2024-04-14").await;

        app.post_json(
            &paths::submission_comments(submission),
            &json!({ "authorId": 1, "text": "Add complexity analysis" }),
        )
        .await;
        let res = app
            .post_json(
                &paths::submission_comments(submission),
                &json!({ "authorId": 7, "text": "Added" }),
            )
            .await;

        assert_eq!(res.status, 200);
        let comments = res.body["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["text"], "Add complexity analysis");
        assert_eq!(comments[1]["authorId"], 7);
        assert!(comments[1]["createdAt"].is_string());
        assert_eq!(res.body["status"], "submitted");

        let res = app
            .post_json(
                &paths::submission_comments(submission),
                &json!({ "authorId": 7, "text": "" }),
            )
            .await;
        assert_eq!(res.status, 400);
    }
}
