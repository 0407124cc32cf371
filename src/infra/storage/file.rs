use crate::types::{UpdateError, UpdateResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// ファイル全体をUTF-8テキストとして読み込む
/// 内容の解釈は各ドメインで行う
pub fn read_text_file(file_path: &Path) -> UpdateResult<String> {
    std::fs::read_to_string(file_path)
        .map_err(|e| UpdateError::file_read(file_path.display().to_string(), e))
}

/// テキストをファイルへ書き出す（既存ファイルは上書き）
///
/// 書き込み後にディスクへ同期する。
pub fn write_text_file(file_path: &Path, content: &str) -> UpdateResult<()> {
    let to_error = |e: std::io::Error| UpdateError::file_write(file_path.display().to_string(), e);

    let mut file = File::create(file_path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.sync_all().map_err(to_error)?;
    Ok(())
}
