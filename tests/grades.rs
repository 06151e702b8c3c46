#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::json;

use common::test_db;

#[actix_web::test]
async fn create_and_fetch_grade() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post()
            .uri("/grades/")
            .set_json(json!({"id": 1, "gradeName": "  Fifth "}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "gradeName": "Fifth"}));

    let (status, body) = call!(&app, TestRequest::get().uri("/grades/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"Grade information": {"id": 1, "gradeName": "Fifth"}})
    );
}

#[actix_web::test]
async fn rejects_invalid_or_duplicate_grades() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    let app = test::init_service(db.app()).await;

    for payload in [
        json!({"id": 0, "gradeName": "Sixth"}),
        json!({"id": 1, "gradeName": "Sixth"}),
        json!({"id": 2, "gradeName": "Fifth"}),
        json!({"id": 2, "gradeName": "   "}),
    ] {
        let (status, body) = call!(&app, TestRequest::post().uri("/grades/").set_json(payload));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    let (_, body) = call!(&app, TestRequest::get().uri("/allgrades/"));
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn update_and_delete_grade() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    db.seed_grade(2, "Sixth").await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::put()
            .uri("/grade/1")
            .set_json(json!({"gradeName": "Sixth"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        &app,
        TestRequest::put()
            .uri("/grade/1")
            .set_json(json!({"gradeName": "Seventh"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Grade information"]["gradeName"], "Seventh");

    let (status, body) = call!(&app, TestRequest::delete().uri("/del_grade/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "grade of id:1 deleted successfully");

    let (status, body) = call!(&app, TestRequest::delete().uri("/del_grade/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Grade not found");
}

#[actix_web::test]
async fn missing_grade_and_bad_path_id() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(&app, TestRequest::get().uri("/grades/9"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(&app, TestRequest::get().uri("/grades/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("abc"));

    let (status, _) = call!(
        &app,
        TestRequest::put()
            .uri("/grade/9")
            .set_json(json!({"gradeName": "Ninth"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn grade_overview_lists_students_and_teachers() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(&app, TestRequest::get().uri("/student_with_teacher/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"grade_id": 1, "grade_name": "Fifth", "students": [], "teachers": []})
    );

    db.seed_student(1, "Ann", 1).await;
    let (_, body) = call!(&app, TestRequest::get().uri("/student_with_teacher/1"));
    assert_eq!(body["students"][0]["name"], "Ann");

    let (status, _) = call!(&app, TestRequest::get().uri("/student_with_teacher/2"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post()
            .uri("/grades/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"id\": ")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}
