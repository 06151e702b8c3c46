#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::json;

use common::test_db;

#[actix_web::test]
async fn qualification_is_normalized() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post().uri("/teachers/").set_json(json!({
            "id": 1, "name": "meera", "qualification": " bsc ", "grade_id": 1, "email": "m@school.com"
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["qualification"], "BSc");
    assert_eq!(body["name"], "Meera");

    let (status, body) = call!(
        &app,
        TestRequest::post().uri("/teachers/").set_json(json!({
            "id": 2, "name": "ravi", "qualification": "phd", "grade_id": 1, "email": "r@school.com"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("phd"));

    let (status, body) = call!(&app, TestRequest::get().uri("/teachers/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Teacher information"]["qualification"], "BSc");
}

#[actix_web::test]
async fn teacher_requires_existing_grade() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post().uri("/teachers/").set_json(json!({
            "id": 1, "name": "meera", "qualification": "msc", "grade_id": 3, "email": "m@school.com"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Grade with id 3 does not exist");
}

#[actix_web::test]
async fn teacher_update_needs_name_grade_and_qualification() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    db.seed_grade(2, "Sixth").await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/teachers/").set_json(json!({
            "id": 1, "name": "meera", "qualification": "msc", "grade_id": 1, "email": "m@school.com"
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(
        &app,
        TestRequest::put()
            .uri("/teach/1")
            .set_json(json!({"name": "meera", "grade_id": 2}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        &app,
        TestRequest::put().uri("/teach/1").set_json(json!({
            "name": "MEERA", "grade_id": 2, "qualification": "msc m.ed"
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher updated successfully");
    assert_eq!(
        body["Teacher information"],
        json!({
            "id": 1, "name": "Meera", "qualification": "MSc M.ed", "grade_id": 2, "email": "m@school.com"
        })
    );

    let (status, _) = call!(
        &app,
        TestRequest::put().uri("/teach/5").set_json(json!({
            "name": "meera", "grade_id": 2, "qualification": "msc"
        }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn teachers_by_grade_count_and_delete() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(&app, TestRequest::get().uri("/teachers_by_grade/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = call!(&app, TestRequest::get().uri("/count_teachers/1"));
    assert_eq!(body, json!({"grade_id": 1, "count": 0}));

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/teachers/").set_json(json!({
            "id": 4, "name": "meera", "qualification": "bsc b.ed", "grade_id": 1, "email": "m@school.com"
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(&app, TestRequest::get().uri("/teachers_by_grade/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["qualification"], "BSc B.ed");
    let (_, body) = call!(&app, TestRequest::get().uri("/count_teachers/1"));
    assert_eq!(body["count"], 1);
    let (_, body) = call!(&app, TestRequest::get().uri("/allteachers/"));
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = call!(&app, TestRequest::delete().uri("/del_teach/4"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher of id:4 deleted successfully");
    let (status, _) = call!(&app, TestRequest::get().uri("/teachers/4"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}
