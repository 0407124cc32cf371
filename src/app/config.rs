use crate::domain::tag::TagRules;
use crate::types::ConfigResult;
use std::path::PathBuf;

pub const FEED_URL: &str = "https://sophiabits.com/feed.json";
pub const STATS_URL: &str = "https://sophiabits.com/api/posts/_stats";
pub const OUTPUT_PATH: &str = "../README.md";
pub const TEMPLATE_PATH: &str = "../.template.md";

/// README更新処理の設定
///
/// 本番では固定値（`from_defaults`）のみを使用する。
/// テストではエンドポイントやパスを差し替える。
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    pub feed_url: String,
    /// `None`の場合は投稿統計を取得せず`{{WORDS}}`を置換しない
    pub stats_url: Option<String>,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub tag_rules: TagRules,
}

impl UpdaterConfig {
    /// 固定値と埋め込みタグルールから設定を作成
    pub fn from_defaults() -> ConfigResult<Self> {
        Ok(Self {
            feed_url: FEED_URL.to_string(),
            stats_url: Some(STATS_URL.to_string()),
            template_path: PathBuf::from(TEMPLATE_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            tag_rules: TagRules::embedded()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults() {
        let config = UpdaterConfig::from_defaults().unwrap();

        assert_eq!(config.feed_url, FEED_URL);
        assert_eq!(config.stats_url.as_deref(), Some(STATS_URL));
        assert_eq!(config.template_path, PathBuf::from("../.template.md"));
        assert_eq!(config.output_path, PathBuf::from("../README.md"));
        assert_eq!(config.tag_rules.fallback(), "technology");
    }
}
