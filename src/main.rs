use readme_updater::app::{execute_readme_workflow, UpdaterConfig};
use readme_updater::infra::api::http::ReqwestHttpClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("README更新に失敗しました: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = UpdaterConfig::from_defaults()?;
    let http_client = ReqwestHttpClient::new();
    let mut rng = rand::thread_rng();
    let today = chrono::Local::now().date_naive();

    execute_readme_workflow(&http_client, &config, &mut rng, today).await?;
    Ok(())
}
