use thiserror::Error;

/// 設定関連のエラー型
/// タグルールなど設定データの読み込み・検証に関するエラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },

    /// 設定ファイルが読み込めない
    #[error("設定ファイルが読み込めません: {path} - {source}")]
    UnreadableConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 設定ファイルの形式が不正
    #[error("設定ファイルの解析に失敗: {context} - {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// 設定ファイル読み込みエラーを作成
    pub fn unreadable_config_file<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::UnreadableConfigFile {
            path: path.into(),
            source,
        }
    }

    /// YAML解析エラーを作成
    pub fn yaml<C: Into<String>>(context: C, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            context: context.into(),
            source,
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
