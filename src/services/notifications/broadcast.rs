use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::time::Instant;
use tracing::{debug, error, info};

use super::NotificationService;
use crate::errors::SchoolError;
use crate::models::error_response;
use crate::models::notifications::{
    entities::{EventType, RecipientType},
    requests::{BroadcastNotificationRequest, CreateNotificationRequest},
    responses::BroadcastResponse,
};
use crate::services::failure_response;

/// 向年级内全部学生群发
///
/// 每条通知单独提交，按学生查询顺序依次写入。中途失败时已写入的通知保留，
/// 剩余学生不再发送，接口返回 500。
pub async fn broadcast_to_grade(
    service: &NotificationService,
    request: &HttpRequest,
    grade_id: i64,
    broadcast_data: BroadcastNotificationRequest,
) -> ActixResult<HttpResponse> {
    // 群发路径不做回退，事件类型必须合法
    let event_type = match broadcast_data.event_type.parse::<EventType>() {
        Ok(event_type) => event_type,
        Err(e) => {
            return Ok(failure_response(
                "Broadcast rejected",
                SchoolError::validation(e),
            ));
        }
    };

    let storage = service.get_storage(request);

    let students = match storage.list_students_by_grade(grade_id).await {
        Ok(students) if students.is_empty() => {
            return Ok(failure_response(
                "Broadcast rejected",
                SchoolError::not_found(format!("No students found for grade {grade_id}")),
            ));
        }
        Ok(students) => students,
        Err(e) => return Ok(failure_response("Failed to list students by grade", e)),
    };

    let content = event_type.render(broadcast_data.event_details.as_deref().unwrap_or_default());
    let started = Instant::now();
    let mut sent: i64 = 0;

    for student in &students {
        let row = CreateNotificationRequest {
            id: None,
            content: content.clone(),
            recipient_type: RecipientType::Student,
            recipient_id: student.id,
            event_type: Some(event_type),
            event_details: broadcast_data.event_details.clone(),
        };

        if let Err(e) = storage.create_notification(row).await {
            error!(
                "Broadcast to grade {} aborted at student {}: {} of {} notifications written: {}",
                grade_id,
                student.id,
                sent,
                students.len(),
                e
            );
            return Ok(error_response(&e));
        }
        sent += 1;
    }

    info!("Broadcast {} notifications to grade {}", sent, grade_id);
    debug!("Broadcast to grade {} took {:?}", grade_id, started.elapsed());

    Ok(HttpResponse::Ok().json(BroadcastResponse {
        message: format!("Notification sent to {sent} students"),
        count: sent,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::errors::Result;
    use crate::models::{
        grades::{entities::Grade, requests::UpdateGradeRequest},
        notifications::entities::Notification,
        students::{entities::Student, requests::UpdateStudentRequest},
        teachers::{entities::Teacher, requests::UpdateTeacherRequest},
    };
    use crate::storage::Storage;

    /// 只支持群发所需操作的存储，第 `fail_on` 次写入通知时失败
    struct FlakyNotificationStorage {
        students: Vec<Student>,
        fail_on: usize,
        attempts: AtomicUsize,
        written: Mutex<Vec<CreateNotificationRequest>>,
    }

    impl FlakyNotificationStorage {
        fn new(student_count: i64, fail_on: usize) -> Self {
            let students = (1..=student_count)
                .map(|id| Student {
                    id,
                    name: format!("Student{id}"),
                    grade_id: 1,
                    age: 10,
                    email: format!("s{id}@school.com"),
                })
                .collect();
            Self {
                students,
                fail_on,
                attempts: AtomicUsize::new(0),
                written: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Storage for FlakyNotificationStorage {
        async fn create_grade(&self, _: Grade) -> Result<Grade> {
            unimplemented!()
        }
        async fn get_grade_by_id(&self, _: i64) -> Result<Option<Grade>> {
            unimplemented!()
        }
        async fn get_grade_by_name(&self, _: &str) -> Result<Option<Grade>> {
            unimplemented!()
        }
        async fn list_grades(&self) -> Result<Vec<Grade>> {
            unimplemented!()
        }
        async fn update_grade(&self, _: i64, _: UpdateGradeRequest) -> Result<Option<Grade>> {
            unimplemented!()
        }
        async fn delete_grade(&self, _: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn create_student(&self, _: Student) -> Result<Student> {
            unimplemented!()
        }
        async fn get_student_by_id(&self, _: i64) -> Result<Option<Student>> {
            unimplemented!()
        }
        async fn get_student_by_email(&self, _: &str) -> Result<Option<Student>> {
            unimplemented!()
        }
        async fn list_students(&self) -> Result<Vec<Student>> {
            unimplemented!()
        }
        async fn list_students_with_offset(&self, _: u64, _: u64) -> Result<Vec<Student>> {
            unimplemented!()
        }
        async fn list_students_by_grade(&self, grade_id: i64) -> Result<Vec<Student>> {
            Ok(self
                .students
                .iter()
                .filter(|s| s.grade_id == grade_id)
                .cloned()
                .collect())
        }
        async fn count_students_by_grade(&self, _: i64) -> Result<i64> {
            unimplemented!()
        }
        async fn update_student(
            &self,
            _: i64,
            _: UpdateStudentRequest,
        ) -> Result<Option<Student>> {
            unimplemented!()
        }
        async fn delete_student(&self, _: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn create_teacher(&self, _: Teacher) -> Result<Teacher> {
            unimplemented!()
        }
        async fn get_teacher_by_id(&self, _: i64) -> Result<Option<Teacher>> {
            unimplemented!()
        }
        async fn get_teacher_by_email(&self, _: &str) -> Result<Option<Teacher>> {
            unimplemented!()
        }
        async fn list_teachers(&self) -> Result<Vec<Teacher>> {
            unimplemented!()
        }
        async fn list_teachers_by_grade(&self, _: i64) -> Result<Vec<Teacher>> {
            unimplemented!()
        }
        async fn count_teachers_by_grade(&self, _: i64) -> Result<i64> {
            unimplemented!()
        }
        async fn update_teacher(
            &self,
            _: i64,
            _: UpdateTeacherRequest,
        ) -> Result<Option<Teacher>> {
            unimplemented!()
        }
        async fn delete_teacher(&self, _: i64) -> Result<bool> {
            unimplemented!()
        }

        async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt == self.fail_on {
                return Err(SchoolError::database_operation("disk I/O error"));
            }

            let mut written = self.written.lock().unwrap();
            written.push(req.clone());
            Ok(Notification {
                id: written.len() as i64,
                content: req.content,
                recipient_type: req.recipient_type,
                recipient_id: req.recipient_id,
                event_type: req.event_type,
                event_details: req.event_details,
            })
        }
        async fn get_notification_by_id(&self, _: i64) -> Result<Option<Notification>> {
            unimplemented!()
        }
        async fn list_notifications(&self) -> Result<Vec<Notification>> {
            unimplemented!()
        }
        async fn delete_notification(&self, _: i64) -> Result<bool> {
            unimplemented!()
        }
    }

    fn exam_broadcast() -> BroadcastNotificationRequest {
        BroadcastNotificationRequest {
            content: None,
            event_type: "exam".to_string(),
            event_details: Some("Finals".to_string()),
        }
    }

    async fn run_broadcast(storage: Arc<FlakyNotificationStorage>) -> HttpResponse {
        let shared: Arc<dyn Storage> = storage;
        let request = TestRequest::default()
            .app_data(web::Data::new(shared))
            .to_http_request();
        broadcast_to_grade(
            &NotificationService::new_lazy(),
            &request,
            1,
            exam_broadcast(),
        )
        .await
        .expect("handler result")
    }

    #[actix_web::test]
    async fn test_mid_loop_failure_keeps_earlier_rows_and_stops() {
        let storage = Arc::new(FlakyNotificationStorage::new(3, 2));

        let response = run_broadcast(storage.clone()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let written = storage.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].recipient_id, 1);
        assert_eq!(written[0].content, "Upcoming exam : Finals");
        // 失败后不再尝试第三名学生
        assert_eq!(storage.attempts.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_every_student_gets_one_row() {
        let storage = Arc::new(FlakyNotificationStorage::new(3, usize::MAX));

        let response = run_broadcast(storage.clone()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let recipients: Vec<i64> = storage
            .written
            .lock()
            .unwrap()
            .iter()
            .map(|row| row.recipient_id)
            .collect();
        assert_eq!(recipients, vec![1, 2, 3]);
        assert!(
            storage
                .written
                .lock()
                .unwrap()
                .iter()
                .all(|row| row.id.is_none() && row.recipient_type == RecipientType::Student)
        );
    }
}
