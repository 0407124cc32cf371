use crate::infra::api::http::HttpClient;
use crate::infra::parser::{null_as_default, parse_json_str};
use crate::types::{UpdateError, UpdateResult};
use serde::Deserialize;
use std::fmt;

// JSON Feedの<items>要素のうち利用するフィールドのみを格納する構造体
// 各フィールドは省略・nullのどちらも空として扱う
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl FeedItem {
    /// READMEに埋め込むMarkdownリンク `[title](url)` を生成する
    pub fn markdown_link(&self) -> String {
        format!("[{}]({})", self.title, self.url)
    }
}

impl fmt::Display for FeedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}

/// JSON Feed本体。itemsは新しい順に並んでいる前提（検証はしない）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// 先頭の記事を最新記事として返す
    pub fn latest_item(&self) -> Option<&FeedItem> {
        self.items.first()
    }
}

/// JSON文字列をFeedに変換する
pub fn parse_feed(json: &str) -> UpdateResult<Feed> {
    parse_json_str(json, "フィード")
}

/// フィードを取得して解析する
pub async fn get_feed<H: HttpClient>(client: &H, url: &str) -> UpdateResult<Feed> {
    let body = client.fetch_text(url).await?;
    let feed = parse_feed(&body)?;
    tracing::info!(%url, count = feed.items.len(), "フィード取得完了");
    Ok(feed)
}

/// フィードを取得し最新記事を返す
///
/// itemsが空の場合は`EmptyFeed`エラーになる。
pub async fn get_latest_item<H: HttpClient>(client: &H, url: &str) -> UpdateResult<FeedItem> {
    let feed = get_feed(client, url).await?;
    feed.latest_item()
        .cloned()
        .ok_or_else(|| UpdateError::empty_feed(url))
}
