//! 停机信号
//!
//! actix 自带的信号处理已关闭，由这里统一等待 Ctrl+C 与 SIGTERM，
//! 收到任一信号后由调用方执行优雅停机。

use tokio::signal;
use tracing::error;

/// 等待停机信号，返回信号名称
///
/// 某个信号无法注册时只记录错误并继续等待其他信号。
pub async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                error!("Cannot listen for Ctrl+C: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                error!("Cannot listen for SIGTERM: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    }
}
