use thiserror::Error;

/// 下位ライブラリのエラーを保持するための型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// README更新処理のエラー型
/// 取得・解析・テンプレート入出力の各段階で発生するエラーを定義
#[derive(Error, Debug)]
pub enum UpdateError {
    /// HTTPリクエストの送信に失敗
    #[error("HTTPリクエストの送信に失敗: {url} - {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    /// レスポンスボディの読み込みに失敗
    #[error("レスポンスボディの読み込みに失敗: {url} - {source}")]
    BodyRead {
        url: String,
        #[source]
        source: BoxError,
    },

    /// JSONの解析に失敗
    #[error("JSONの解析に失敗: {context} - {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// テンプレートファイルの読み込みに失敗
    #[error("テンプレートの読み込みに失敗: {path} - {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 出力ファイルの作成・書き込みに失敗
    #[error("出力ファイルの書き込みに失敗: {path} - {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// フィードに記事が1件も含まれていない
    #[error("フィードに記事がありません: {url}")]
    EmptyFeed { url: String },
}

impl UpdateError {
    /// ネットワークエラーを作成
    pub fn network<U: Into<String>, E: Into<BoxError>>(url: U, source: E) -> Self {
        Self::Network {
            url: url.into(),
            source: source.into(),
        }
    }

    /// ボディ読み込みエラーを作成
    pub fn body_read<U: Into<String>, E: Into<BoxError>>(url: U, source: E) -> Self {
        Self::BodyRead {
            url: url.into(),
            source: source.into(),
        }
    }

    /// JSON解析エラーを作成
    pub fn parse<C: Into<String>>(context: C, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// テンプレート読み込みエラーを作成
    pub fn file_read<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// 出力書き込みエラーを作成
    pub fn file_write<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// 空フィードエラーを作成
    pub fn empty_feed<U: Into<String>>(url: U) -> Self {
        Self::EmptyFeed { url: url.into() }
    }
}

/// 更新処理のResult型エイリアス
pub type UpdateResult<T> = std::result::Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_location() {
        let err = UpdateError::file_read(
            "../.template.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("テンプレートの読み込みに失敗"));
        assert!(msg.contains("../.template.md"));

        let err = UpdateError::empty_feed("https://example.com/feed.json");
        assert!(err.to_string().contains("https://example.com/feed.json"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UpdateError::parse("フィード", source);

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("JSONの解析に失敗: フィード"));
    }
}
