use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 输出数据库现有数据概况
async fn report_existing_data(storage: &Arc<dyn Storage>) {
    match storage.list_grades().await {
        Ok(grades) if grades.is_empty() => {
            info!("No grades found in database, create one via POST /grades/ first");
        }
        Ok(grades) => {
            debug!("Database already has {} grade(s)", grades.len());
        }
        Err(e) => {
            warn!("Failed to list grades: {}, skipping startup report", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 加密后端与存储初始化
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = match crate::storage::create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            // 日志可能尚未刷新，直接输出到 stderr
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            std::process::exit(1);
        }
    };
    warn!("Storage backend initialized and migrations completed");

    report_existing_data(&storage).await;

    StartupContext { storage }
}
