#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;

use common::test_db;
use rust_school_admin::entity::notifications::{ActiveModel, Column};
use rust_school_admin::entity::prelude::Notifications;

#[actix_web::test]
async fn broadcast_writes_one_row_per_student() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    db.seed_grade(2, "Sixth").await;
    for (id, name) in [(1, "Ann"), (2, "Bob"), (3, "Cat")] {
        db.seed_student(id, name, 1).await;
    }
    db.seed_student(4, "Dan", 2).await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post()
            .uri("/send_notification/1")
            .set_json(json!({"content": "ignored", "event_type": "exam", "event_details": "Finals"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Notification sent to 3 students", "count": 3})
    );

    let rows = Notifications::find()
        .filter(Column::Content.eq("Upcoming exam : Finals"))
        .filter(Column::RecipientType.eq("student"))
        .count(db.storage.connection())
        .await
        .expect("count notifications");
    assert_eq!(rows, 3);

    let (_, body) = call!(&app, TestRequest::get().uri("/allnotifications/"));
    let recipients: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["recipient_id"].as_i64().unwrap())
        .collect();
    assert_eq!(recipients, vec![1, 2, 3]);
    assert_eq!(body[0]["event_type"], "exam");
}

#[actix_web::test]
async fn broadcast_rejects_unknown_event_and_empty_grade() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    db.seed_student(1, "Ann", 1).await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::post()
            .uri("/send_notification/1")
            .set_json(json!({"event_type": "meeting", "event_details": "Room 4"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        &app,
        TestRequest::post()
            .uri("/send_notification/9")
            .set_json(json!({"event_type": "holiday", "event_details": "Diwali"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let rows = Notifications::find()
        .count(db.storage.connection())
        .await
        .expect("count notifications");
    assert_eq!(rows, 0);
}

#[actix_web::test]
async fn single_notification_uses_event_template() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, body) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 10, "content": "whatever", "recipient_type": "teacher",
            "recipient_id": 3, "event_type": "holiday", "event_details": "Diwali"
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Notification sent successfully");

    let (status, body) = call!(&app, TestRequest::get().uri("/received_event_notification/10"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 10, "content": "Upcoming holiday: Diwali", "recipient_type": "teacher",
            "recipient_id": 3, "event_type": "holiday", "event_details": "Diwali"
        })
    );
}

#[actix_web::test]
async fn unknown_event_type_falls_back_without_persisting_it() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 11, "recipient_type": "student", "recipient_id": 1, "event_type": "meeting"
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(&app, TestRequest::get().uri("/received_event_notification/11"));
    assert_eq!(body["content"], "New notification");
    assert!(body["event_type"].is_null());
}

#[actix_web::test]
async fn single_notification_validation() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 1, "recipient_type": "parent", "recipient_id": 1, "event_type": "exam"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 0, "recipient_type": "student", "recipient_id": 1, "event_type": "exam"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let payload = json!({
        "id": 1, "recipient_type": "student", "recipient_id": 1, "event_type": "event", "event_details": "Sports day"
    });
    let (status, _) = call!(
        &app,
        TestRequest::post()
            .uri("/send_event_notification")
            .set_json(payload.clone())
    );
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call!(
        &app,
        TestRequest::post()
            .uri("/send_event_notification")
            .set_json(payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already exists"));
}

#[actix_web::test]
async fn delete_notification() {
    let db = test_db().await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(&app, TestRequest::get().uri("/received_event_notification/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 5, "recipient_type": "student", "recipient_id": 1
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(&app, TestRequest::delete().uri("/del_notification/5"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "notification of id:5 deleted successfully");

    let (status, _) = call!(&app, TestRequest::delete().uri("/del_notification/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn broadcast_after_explicit_id_gets_fresh_ids() {
    let db = test_db().await;
    db.seed_grade(1, "Fifth").await;
    db.seed_student(1, "Ann", 1).await;
    db.seed_student(2, "Bob", 1).await;
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(
        &app,
        TestRequest::post().uri("/send_event_notification").set_json(json!({
            "id": 1, "recipient_type": "teacher", "recipient_id": 7, "event_type": "event", "event_details": "Fair"
        }))
    );
    assert_eq!(status, StatusCode::OK);

    // 数据库分配的编号不能与手动指定的编号冲突
    let (status, body) = call!(
        &app,
        TestRequest::post()
            .uri("/send_notification/1")
            .set_json(json!({"event_type": "holiday", "event_details": "Diwali"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (_, body) = call!(&app, TestRequest::get().uri("/allnotifications/"));
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[actix_web::test]
async fn corrupt_recipient_type_is_a_server_error() {
    let db = test_db().await;
    ActiveModel {
        id: Set(8),
        content: Set("Upcoming exam : Finals".to_string()),
        recipient_type: Set("parent".to_string()),
        recipient_id: Set(1),
        event_type: Set(Some("exam".to_string())),
        event_details: Set(Some("Finals".to_string())),
    }
    .insert(db.storage.connection())
    .await
    .expect("insert raw notification");
    let app = test::init_service(db.app()).await;

    let (status, _) = call!(&app, TestRequest::get().uri("/received_event_notification/8"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = call!(&app, TestRequest::get().uri("/allnotifications/"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
