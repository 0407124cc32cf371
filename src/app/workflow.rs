use crate::{
    app::config::UpdaterConfig,
    domain::{
        feed::get_latest_item,
        stats::{format_word_count, get_post_stats},
        tag::select_tag,
        template::{format_timestamp, load_template, render_template, store_readme, TemplateValues},
    },
    infra::api::http::HttpClient,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;

/// README更新ワークフローのメイン実行関数（依存性を注入）
///
/// 1. フィードから最新記事を取得
/// 2. 投稿統計を取得（設定されている場合）
/// 3. テンプレートを読み込み、値を差し込んで書き出す
///
/// 書き出しは全ての取得と読み込みが成功した後にのみ行うため、
/// 途中で失敗した場合は出力ファイルに触れない。
/// 書き出した内容を返す。
pub async fn execute_readme_workflow<H: HttpClient, R: Rng + ?Sized>(
    http_client: &H,
    config: &UpdaterConfig,
    rng: &mut R,
    today: NaiveDate,
) -> Result<String> {
    tracing::info!("=== README更新開始 ===");

    // 先頭の記事を最新記事とみなす
    let item = get_latest_item(http_client, &config.feed_url)
        .await
        .context("フィードの取得に失敗")?;
    tracing::info!(post = %item, "最新記事を選択");

    let words = match &config.stats_url {
        Some(stats_url) => {
            let stats = get_post_stats(http_client, stats_url)
                .await
                .context("投稿統計の取得に失敗")?;
            Some(format_word_count(stats.words))
        }
        None => None,
    };

    let template = load_template(&config.template_path).context("テンプレートの準備に失敗")?;

    let values = TemplateValues {
        link: item.markdown_link(),
        tag: select_tag(&item.tags, &config.tag_rules, rng),
        timestamp: format_timestamp(today),
        words,
    };
    tracing::info!(tag = %values.tag, timestamp = %values.timestamp, "差し込み値を決定");

    let readme = render_template(&template, &values);
    store_readme(&config.output_path, &readme).context("READMEの書き出しに失敗")?;

    tracing::info!("=== README更新完了 ===");
    Ok(readme)
}
