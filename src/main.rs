use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// 任何失败都以此状态退出（即 -1 在 POSIX 上的值）
const FAILURE_EXIT_CODE: u8 = 255;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match s3_relocator::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
