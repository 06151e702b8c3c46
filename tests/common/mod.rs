//! 集成测试公共设施：临时 SQLite 数据库与完整路由的应用实例

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use std::sync::Arc;
use tempfile::TempDir;

use rust_school_admin::config::DatabaseConfig;
use rust_school_admin::models::{grades::entities::Grade, students::entities::Student};
use rust_school_admin::routes;
use rust_school_admin::storage::{Storage, sea_orm_storage::SeaOrmStorage};

/// 发送请求并返回状态码与 JSON 响应体
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service($app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// 临时数据库，目录在值被丢弃时删除
pub struct TestDb {
    _dir: TempDir,
    pub storage: SeaOrmStorage,
}

pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = dir.path().join("school.db").to_string_lossy().into_owned();
    let storage = SeaOrmStorage::connect(&DatabaseConfig {
        url,
        pool_size: 5,
        timeout: 5,
    })
    .await
    .expect("open and migrate test database");

    TestDb { _dir: dir, storage }
}

impl TestDb {
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        > + use<>,
    > {
        let storage: Arc<dyn Storage> = Arc::new(self.storage.clone());
        App::new()
            .app_data(web::Data::new(storage))
            .configure(routes::configure)
    }

    /// 直接写入年级（绕过接口）
    pub async fn seed_grade(&self, id: i64, grade_name: &str) {
        self.storage
            .create_grade(Grade {
                id,
                grade_name: grade_name.to_string(),
            })
            .await
            .expect("seed grade");
    }

    /// 直接写入学生（绕过接口）
    pub async fn seed_student(&self, id: i64, name: &str, grade_id: i64) {
        let email = format!("{}@school.com", name.to_lowercase());
        self.seed_student_with_email(id, name, grade_id, &email).await;
    }

    /// 直接写入指定邮箱的学生，不做任何校验
    pub async fn seed_student_with_email(&self, id: i64, name: &str, grade_id: i64, email: &str) {
        self.storage
            .create_student(Student {
                id,
                name: name.to_string(),
                grade_id,
                age: 10,
                email: email.to_string(),
            })
            .await
            .expect("seed student");
    }
}
