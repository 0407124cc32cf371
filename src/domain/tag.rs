use crate::types::{ConfigError, ConfigResult};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// バイナリに埋め込まれた既定のタグルール
const DEFAULT_TAG_RULES: &str = include_str!("data/tag_rules.yaml");

// YAMLファイルの構造に対応する型
#[derive(Debug, Deserialize)]
struct TagRulesFile {
    #[serde(default)]
    denylist: HashMap<String, bool>,
    #[serde(default)]
    allowlist: HashMap<String, bool>,
    fallback: String,
}

/// タグの選択・整形ルール
///
/// 各リストは「タグ → 有効かどうか」の対応で、`true` のエントリのみが効く。
/// denylistのキーは小文字に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    denylist: HashMap<String, bool>,
    allowlist: HashMap<String, bool>,
    fallback: String,
}

impl TagRules {
    /// 各リストから直接ルールを作成する
    pub fn new(
        denylist: HashMap<String, bool>,
        allowlist: HashMap<String, bool>,
        fallback: &str,
    ) -> ConfigResult<Self> {
        if fallback.trim().is_empty() {
            return Err(ConfigError::invalid_value("fallbackタグが空です"));
        }

        // 小文字化で衝突したキーはどちらかが有効なら有効とする
        let mut normalized: HashMap<String, bool> = HashMap::with_capacity(denylist.len());
        for (tag, enabled) in denylist {
            *normalized.entry(tag.to_lowercase()).or_insert(false) |= enabled;
        }

        Ok(Self {
            denylist: normalized,
            allowlist,
            fallback: fallback.to_string(),
        })
    }

    /// YAML文字列からルールを読み込む
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: TagRulesFile =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::yaml("タグルール", e))?;
        Self::new(file.denylist, file.allowlist, &file.fallback)
    }

    /// YAMLファイルからルールを読み込む
    pub fn load(file_path: &Path) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(file_path).map_err(|e| {
            ConfigError::unreadable_config_file(file_path.display().to_string(), e)
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// 文中で使えないタグかどうか（大文字小文字を区別しない）
    pub fn is_denied(&self, tag: &str) -> bool {
        self.denylist
            .get(&tag.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// 表記をそのまま残すタグかどうか（完全一致）
    pub fn is_allowed_verbatim(&self, tag: &str) -> bool {
        self.allowlist.get(tag).copied().unwrap_or(false)
    }

    /// バイナリに埋め込まれた既定ルールを読み込む
    pub fn embedded() -> ConfigResult<Self> {
        Self::from_yaml_str(DEFAULT_TAG_RULES)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// 文中で意味の通るタグを1つ選ぶ。該当がなければfallbackを返す
///
/// 候補からの選択は注入された乱数源で一様に行う。
// TODO: 記事タイトルのハッシュで選択を決定的にする
pub fn pick_tag<R: Rng + ?Sized>(tags: &[String], rules: &TagRules, rng: &mut R) -> String {
    let valid_tags: Vec<&String> = tags.iter().filter(|tag| !rules.is_denied(tag)).collect();

    valid_tags
        .choose(rng)
        .map(|tag| tag.to_string())
        .unwrap_or_else(|| rules.fallback().to_string())
}

/// 文中での見た目を整える。allowlist以外は小文字にする
pub fn format_tag(tag: &str, rules: &TagRules) -> String {
    if rules.is_allowed_verbatim(tag) {
        tag.to_string()
    } else {
        tag.to_lowercase()
    }
}

/// タグを選択し、文中用に整形して返す
pub fn select_tag<R: Rng + ?Sized>(tags: &[String], rules: &TagRules, rng: &mut R) -> String {
    format_tag(&pick_tag(tags, rules, rng), rules)
}
