use crate::infra::api::http::HttpClient;
use crate::infra::parser::{null_as_default, parse_json_str};
use crate::types::UpdateResult;
use serde::Deserialize;

/// ブログ全体の投稿統計。省略・nullの値は0になる
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PostStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub words: i64,
}

// 統計エンドポイントのレスポンス `{ data: { count, words } }`
#[derive(Debug, Deserialize)]
struct PostStatsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    data: PostStats,
}

/// JSON文字列から投稿統計を取り出す
pub fn parse_post_stats(json: &str) -> UpdateResult<PostStats> {
    let response: PostStatsResponse = parse_json_str(json, "投稿統計")?;
    Ok(response.data)
}

/// 投稿統計を取得して解析する
pub async fn get_post_stats<H: HttpClient>(client: &H, url: &str) -> UpdateResult<PostStats> {
    let body = client.fetch_text(url).await?;
    let stats = parse_post_stats(&body)?;
    tracing::info!(%url, count = stats.count, words = stats.words, "投稿統計取得完了");
    Ok(stats)
}

/// 語数を英語ロケールの桁区切り（例: `123,456`、`-1,234`）で整形する
pub fn format_word_count(words: i64) -> String {
    let digits = words.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if words < 0 {
        formatted.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api::http::MockHttpClient;
    use crate::types::UpdateError;

    const STATS_URL: &str = "https://example.com/api/posts/_stats";

    #[test]
    fn test_parse_post_stats_envelope() {
        let stats = parse_post_stats(r#"{"data":{"count":42,"words":123456}}"#).unwrap();
        assert_eq!(
            stats,
            PostStats {
                count: 42,
                words: 123456
            }
        );
    }

    #[test]
    fn test_parse_post_stats_without_envelope() {
        // dataで包まれていない場合は統計なし（0件）として扱う
        let stats = parse_post_stats(r#"{"count":42,"words":123456}"#).unwrap();
        assert_eq!(stats, PostStats::default());
    }

    #[test]
    fn test_parse_post_stats_missing_and_null_values() {
        let stats = parse_post_stats(r#"{"data":{"count":null}}"#).unwrap();
        assert_eq!(stats, PostStats { count: 0, words: 0 });

        let stats = parse_post_stats(r#"{"data":{"count":2,"words":-1234}}"#).unwrap();
        assert_eq!(stats.words, -1234);
    }

    #[test]
    fn test_parse_post_stats_wrong_type() {
        let result = parse_post_stats(r#"{"data":{"count":"many","words":1}}"#);
        assert!(matches!(result, Err(UpdateError::Parse { .. })));
    }

    #[test]
    fn test_format_word_count() {
        assert_eq!(format_word_count(0), "0");
        assert_eq!(format_word_count(999), "999");
        assert_eq!(format_word_count(1000), "1,000");
        assert_eq!(format_word_count(123456), "123,456");
        assert_eq!(format_word_count(1234567), "1,234,567");
        assert_eq!(format_word_count(-999), "-999");
        assert_eq!(format_word_count(-1234), "-1,234");
        assert_eq!(format_word_count(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[tokio::test]
    async fn test_get_post_stats_with_mock() -> Result<(), anyhow::Error> {
        let client = MockHttpClient::new()
            .with_response(STATS_URL, r#"{"data":{"count":3,"words":4500}}"#);

        let stats = get_post_stats(&client, STATS_URL).await?;

        assert_eq!(stats.count, 3);
        assert_eq!(stats.words, 4500);
        Ok(())
    }
}
