use crate::common::{Part, TestApp, paths};

#[actix_web::test]
async fn uploaded_file_is_served_with_content_type() {
    let app = TestApp::spawn().await;
    let id = app.create_assignment("Report", "2024-04-15", 3).await;

    let res = app
        .upload(
            &paths::assignment_submit(id),
            &[Part::file("answer.txt", "text/plain", b"42")],
        )
        .await;
    let url = res.body["fileUrl"].as_str().unwrap().to_string();

    let res = app.get(&url).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.bytes, b"42");
    assert_eq!(res.content_type.as_deref(), Some("text/plain; charset=utf-8"));
}

#[actix_web::test]
async fn unknown_or_unsafe_names_are_not_found() {
    let app = TestApp::spawn().await;
    std::fs::write(app.upload_dir().join("known.pdf"), b"%PDF-1.4").unwrap();

    let res = app.get("/uploads/known.pdf").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.content_type.as_deref(), Some("application/pdf"));

    assert_eq!(app.get("/uploads/missing.pdf").await.status, 404);
    assert_eq!(app.get("/uploads/..%2Fportal.db").await.status, 404);
    assert_eq!(app.get("/uploads/.hidden").await.status, 404);
}
