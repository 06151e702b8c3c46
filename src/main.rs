use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::io;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use rust_school_admin::config::AppConfig;
use rust_school_admin::routes;
use rust_school_admin::runtime::lifetime;

/// 日志写入 stdout；开发环境带源码位置，其他环境输出 JSON
///
/// 返回的 guard 被丢弃后缓冲中的日志不再刷新，需持有到进程结束。
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(io::stdout());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .with_level(true);

    if config.is_development() {
        subscriber
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        subscriber.with_ansi(false).json().init();
    }

    guard
}

fn cors(config: &AppConfig) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    setup_panic!();
    let started_at = chrono::Utc::now();

    AppConfig::init().map_err(|e| io::Error::other(format!("Invalid configuration: {e}")))?;
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    info!(
        "{} {} starting in {} mode with {} workers",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment,
        config.server.workers
    );

    let storage = web::Data::new(lifetime::startup::prepare_server_startup().await.storage);

    let http = HttpServer::new(move || {
        App::new()
            .wrap(cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(storage.clone())
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .configure(routes::configure)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers)
    .disable_signals();

    // 配置了 Unix 套接字时优先监听套接字
    #[cfg(unix)]
    let http = match config.unix_socket_path() {
        Some(socket_path) => {
            // 上次异常退出留下的套接字文件会导致绑定失败
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            info!("Listening on unix:{}", socket_path);
            http.bind_uds(socket_path)?
        }
        None => {
            info!("Listening on http://{}", config.server_bind_address());
            http.bind(config.server_bind_address())?
        }
    };

    #[cfg(not(unix))]
    let http = {
        info!("Listening on http://{}", config.server_bind_address());
        http.bind(config.server_bind_address())?
    };

    let server = http.run();
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        let signal = lifetime::shutdown::shutdown_signal().await;
        warn!("{} received, waiting for in-flight requests", signal);
        handle.stop(true).await;
    });

    info!(
        "Ready after {} ms",
        (chrono::Utc::now() - started_at).num_milliseconds()
    );

    server.await?;
    info!("Server stopped");
    Ok(())
}
