//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - 更新処理のエラー型: 取得・解析・ファイル入出力の失敗の統一表現
//! - 設定エラー型: タグルールなど設定データの失敗

pub mod config;
pub mod error;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult};
pub use error::{UpdateError, UpdateResult};
