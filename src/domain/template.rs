use crate::infra::storage::file::{read_text_file, write_text_file};
use crate::types::UpdateResult;
use chrono::NaiveDate;
use std::path::Path;

pub const LINK_PLACEHOLDER: &str = "{{LINK}}";
pub const TAG_PLACEHOLDER: &str = "{{TAG}}";
pub const TIMESTAMP_PLACEHOLDER: &str = "{{TIMESTAMP}}";
pub const WORDS_PLACEHOLDER: &str = "{{WORDS}}";

/// テンプレートに差し込む値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    /// 最新記事へのMarkdownリンク
    pub link: String,
    /// 整形済みのタグ
    pub tag: String,
    /// 生成日（例: `1 Jan 2024`）
    pub timestamp: String,
    /// 桁区切り済みの総語数。`None`の場合`{{WORDS}}`は置換しない
    pub words: Option<String>,
}

/// 日付をREADME用の`D Mon YYYY`形式（日はゼロ埋めなし）に整形する
pub fn format_timestamp(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// プレースホルダを先頭から1回ずつ置換する
///
/// 置換は`{{LINK}}`、`{{TAG}}`、`{{TIMESTAMP}}`、`{{WORDS}}`の順で行い、
/// 各プレースホルダは最初の出現箇所のみ置き換える。
pub fn render_template(template: &str, values: &TemplateValues) -> String {
    let mut rendered = template
        .replacen(LINK_PLACEHOLDER, &values.link, 1)
        .replacen(TAG_PLACEHOLDER, &values.tag, 1)
        .replacen(TIMESTAMP_PLACEHOLDER, &values.timestamp, 1);

    if let Some(words) = &values.words {
        rendered = rendered.replacen(WORDS_PLACEHOLDER, words, 1);
    }

    rendered
}

/// テンプレートファイルを読み込む
pub fn load_template(template_path: &Path) -> UpdateResult<String> {
    let template = read_text_file(template_path)?;
    tracing::info!(path = %template_path.display(), "テンプレート読み込み完了");
    Ok(template)
}

/// 生成したREADMEを書き出す（既存ファイルは上書き）
pub fn store_readme(output_path: &Path, content: &str) -> UpdateResult<()> {
    write_text_file(output_path, content)?;
    tracing::info!(path = %output_path.display(), bytes = content.len(), "README書き込み完了");
    Ok(())
}
