use serde_json::json;

use crate::common::{TestApp, paths};

fn subject(name: &str, status: &str) -> serde_json::Value {
    json!({
        "name": name,
        "midterm": 78,
        "final": 84,
        "assignments": 90,
        "attendance": 96,
        "grade": "B+",
        "status": status,
    })
}

#[actix_web::test]
async fn upsert_is_keyed_by_student_and_semester() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(
            paths::ACADEMIC,
            &json!({
                "studentId": 5,
                "semester": "Spring 2024",
                "subjects": [subject("DBMS", "good")],
                "gpa": 3.2,
                "completedCredits": 72,
            }),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.body);
    let id = res.body["id"].clone();
    assert_eq!(res.body["subjects"][0]["final"], 84.0);
    assert_eq!(res.body["subjects"][0]["grade"], "B+");

    let res = app
        .post_json(
            paths::ACADEMIC,
            &json!({
                "studentId": 5,
                "semester": "Spring 2024",
                "subjects": [subject("DBMS", "excellent"), subject("Networks", "average")],
                "gpa": 3.5,
            }),
        )
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["id"], id);
    assert_eq!(res.body["completedCredits"], 72);

    let res = app.get(&paths::academic(5)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["gpa"], 3.5);
    assert_eq!(res.body["subjects"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn report_summarizes_latest_record() {
    let app = TestApp::spawn().await;
    app.post_json(
        paths::ACADEMIC,
        &json!({
            "studentId": 9,
            "semester": "Fall 2024",
            "subjects": [
                subject("Data Structures", "excellent"),
                subject("Operating Systems", "good"),
                subject("Compilers", "poor"),
            ],
            "gpa": 3.1,
            "completedCredits": 90,
        }),
    )
    .await;

    let res = app.get(&paths::academic_report(9)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["semester"], "Fall 2024");
    assert_eq!(res.body["overallPerformance"], 2.67);
    assert_eq!(res.body["completedCredits"], 90);
    assert_eq!(res.body["studentInfo"], serde_json::Value::Null);
}

#[actix_web::test]
async fn missing_records_and_bad_input() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get(&paths::academic(4)).await.status, 404);
    assert_eq!(app.get(&paths::academic_report(4)).await.status, 404);

    let res = app
        .post_json(
            paths::ACADEMIC,
            &json!({
                "studentId": 4,
                "semester": "Fall 2024",
                "subjects": [subject("Physics", "outstanding")],
            }),
        )
        .await;
    assert_eq!(res.status, 400);

    let res = app
        .post_json(
            paths::ACADEMIC,
            &json!({ "studentId": 4, "semester": "Fall 2024", "gpa": 4.5 }),
        )
        .await;
    assert_eq!(res.status, 400);

    let mut minus = subject("Physics", "good");
    minus["grade"] = json!("A-");
    let res = app
        .post_json(
            paths::ACADEMIC,
            &json!({ "studentId": 4, "semester": "Fall 2024", "subjects": [minus] }),
        )
        .await;
    assert_eq!(res.status, 400);
}
