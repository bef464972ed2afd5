use serde_json::json;

use rust_student_portal::models::users::requests::CreateUserRequest;

use crate::common::{TestApp, paths};

#[actix_web::test]
async fn missing_profile_is_not_found() {
    let app = TestApp::spawn().await;
    let res = app.get(&paths::profile(1)).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["error"], "Profile not found");

    let res = app.get("/api/profile/me").await;
    assert_eq!(res.status, 400);
}

#[actix_web::test]
async fn put_creates_then_updates_profile() {
    let app = TestApp::spawn().await;
    let user = app
        .storage
        .create_user(CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.edu".to_string(),
            student_number: Some("CS2021001".to_string()),
        })
        .await
        .unwrap();

    let res = app
        .put_json(
            &paths::profile(user.id),
            &json!({
                "name": "Alice Smith",
                "phone": "555-0100",
                "dateOfBirth": "2003-02-11",
                "department": "Computer Science",
                "semester": 5,
                "batch": "2021-2025",
                "enrollmentDate": "2021-09-01",
            }),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.body);
    assert_eq!(res.body["userId"], user.id);
    assert_eq!(res.body["user"]["name"], "Alice Smith");
    assert_eq!(res.body["user"]["email"], "alice@example.edu");
    assert_eq!(res.body["settings"]["emailNotifications"], true);
    assert_eq!(res.body["settings"]["smsNotifications"], false);
    let enrollment = res.body["enrollmentDate"].clone();

    let res = app
        .put_json(&paths::profile(user.id), &json!({ "semester": 6 }))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["semester"], 6);
    assert_eq!(res.body["phone"], serde_json::Value::Null);
    assert_eq!(res.body["enrollmentDate"], enrollment);

    let res = app.get(&paths::profile(user.id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["semester"], 6);
    assert_eq!(res.body["user"]["name"], "Alice Smith");
}

#[actix_web::test]
async fn put_validates_input() {
    let app = TestApp::spawn().await;

    let res = app
        .put_json(&paths::profile(3), &json!({ "semester": 0 }))
        .await;
    assert_eq!(res.status, 400);

    let res = app
        .put_json(&paths::profile(3), &json!({ "dateOfBirth": "yesterday" }))
        .await;
    assert_eq!(res.status, 400);

    assert_eq!(app.get(&paths::profile(3)).await.status, 404);
}
